use std::fmt;

use crate::BlobError;

/// Byte array of a fixed size `N`, written as `2 * N` hex characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Blob<const N: usize>([u8; N]);

impl<const N: usize> Blob<N> {
    /// Size of the blob in bytes.
    pub const SIZE: usize = N;

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Decodes a hex string of exactly `2 * N` characters.
    ///
    /// Upper- and lower-case digits are both accepted. Any other length or
    /// a non-hex character is rejected; there is no truncation or padding.
    ///
    /// ```
    /// use ledger_json_blob::Blob;
    ///
    /// let blob = Blob::<2>::from_hex("cafe").unwrap();
    /// assert_eq!(blob.as_bytes(), &[0xca, 0xfe]);
    /// assert!(Blob::<2>::from_hex("caf").is_err());
    /// assert!(Blob::<2>::from_hex("cafz").is_err());
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, BlobError> {
        if text.len() != N * 2 {
            return Err(BlobError::InvalidLength {
                expected: N * 2,
                actual: text.len(),
            });
        }
        let mut bytes = [0u8; N];
        hex::decode_to_slice(text, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => BlobError::InvalidHex {
                character: c,
                index,
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                BlobError::InvalidLength {
                    expected: N * 2,
                    actual: text.len(),
                }
            }
        })?;
        Ok(Self(bytes))
    }

    /// Copies a byte slice of exactly `N` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, BlobError> {
        let array: [u8; N] = bytes.try_into().map_err(|_| BlobError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Lower-case hex rendering, always `2 * N` characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; N] {
        self.0
    }
}

impl<const N: usize> Default for Blob<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> From<[u8; N]> for Blob<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Blob<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> std::str::FromStr for Blob<N> {
    type Err = BlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> fmt::Display for Blob<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::Debug for Blob<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob<{N}>({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_HEX: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

    #[test]
    fn decodes_exact_length_hex() {
        let blob = Blob::<32>::from_hex(HASH_HEX).unwrap();
        assert_eq!(blob.as_bytes()[..4], [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(blob.to_hex(), HASH_HEX);
    }

    #[test]
    fn accepts_upper_case_digits() {
        let lower = Blob::<4>::from_hex("cafebabe").unwrap();
        let upper = Blob::<4>::from_hex("CAFEBABE").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_short_and_long_input() {
        assert_eq!(
            Blob::<4>::from_hex("cafeba"),
            Err(BlobError::InvalidLength {
                expected: 8,
                actual: 6
            })
        );
        assert_eq!(
            Blob::<4>::from_hex("cafebabe00"),
            Err(BlobError::InvalidLength {
                expected: 8,
                actual: 10
            })
        );
        assert!(Blob::<4>::from_hex("").is_err());
        assert!(Blob::<4>::from_hex("cafebab").is_err());
    }

    #[test]
    fn rejects_non_hex_character() {
        assert_eq!(
            Blob::<4>::from_hex("cafebabx"),
            Err(BlobError::InvalidHex {
                character: 'x',
                index: 7
            })
        );
    }

    #[test]
    fn from_slice_requires_exact_size() {
        assert!(Blob::<2>::from_slice(&[1, 2]).is_ok());
        assert_eq!(
            Blob::<2>::from_slice(&[1, 2, 3]),
            Err(BlobError::InvalidLength {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn default_is_zeroed() {
        assert_eq!(Blob::<3>::default().as_bytes(), &[0, 0, 0]);
        assert_eq!(Blob::<3>::default().to_hex(), "000000");
    }

    #[test]
    fn debug_and_display_use_hex() {
        let blob = Blob::<2>::new([0xab, 0x01]);
        assert_eq!(blob.to_string(), "ab01");
        assert_eq!(format!("{blob:?}"), "Blob<2>(ab01)");
    }
}
