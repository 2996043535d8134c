/// Signature attached to a transaction, block or query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    pub pubkey: String,
    pub signature: String,
}

impl Signature {
    pub fn new(pubkey: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            signature: signature.into(),
        }
    }
}

/// Ordered signature list. Decoded strictly: one bad signature voids the list.
pub type Signatures = Vec<Signature>;
