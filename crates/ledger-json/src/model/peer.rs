use ledger_json_blob::PubKey;

/// Network peer taking part in consensus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Peer {
    pub address: String,
    pub pubkey: PubKey,
}

impl Peer {
    pub fn new(address: impl Into<String>, pubkey: PubKey) -> Self {
        Self {
            address: address.into(),
            pubkey,
        }
    }
}
