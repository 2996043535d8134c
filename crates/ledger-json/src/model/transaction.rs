use super::{Command, Signatures};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub signatures: Signatures,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_ts: u64,
    pub creator_account_id: String,
    /// Number of signatures required for the transaction to be valid.
    pub quorum: u32,
    pub commands: Vec<Command>,
}
