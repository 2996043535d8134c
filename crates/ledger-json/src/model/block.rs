use ledger_json_blob::Hash256;

use super::{Signatures, Transaction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub hash: Hash256,
    pub signatures: Signatures,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_ts: u64,
    pub height: u64,
    pub prev_hash: Hash256,
    pub txs_number: u16,
    pub merkle_root: Hash256,
    pub transactions: Vec<Transaction>,
}
