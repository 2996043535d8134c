//! Ledger domain objects produced by the decoders.
//!
//! Every type here is a plain value: no shared state, `Default` as the
//! starting point for the field-by-field builders in
//! [`converters`](crate::converters).

mod block;
mod command;
mod peer;
mod query;
mod signature;
mod transaction;

pub use block::Block;
pub use command::{
    AddAssetQuantity, AddPeer, AddSignatory, AppendRole, Command, CreateAccount, CreateAsset,
    CreateDomain, CreateRole, SetQuorum, TransferAsset,
};
pub use ledger_json_blob::{Hash256, PubKey};
pub use peer::Peer;
pub use query::{
    AccountAssetQuery, AccountQuery, AssetQuery, GetTransactions, Query, QueryPayload, RoleQuery,
    TxHashCollection,
};
pub use signature::{Signature, Signatures};
pub use transaction::Transaction;
