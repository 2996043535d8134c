use ledger_json_blob::Hash256;

use super::Signature;

/// Transaction hashes used as a query filter. Decoded leniently: entries
/// that are strings but not valid hashes are dropped.
pub type TxHashCollection = Vec<Hash256>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountQuery {
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountAssetQuery {
    pub account_id: String,
    pub asset_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetQuery {
    pub asset_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleQuery {
    pub role_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransactions {
    pub tx_hashes: TxHashCollection,
}

/// What a query asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryPayload {
    GetAccount(AccountQuery),
    GetAccountAssets(AccountAssetQuery),
    GetSignatories(AccountQuery),
    GetAccountTransactions(AccountQuery),
    GetAccountAssetTransactions(AccountAssetQuery),
    GetTransactions(GetTransactions),
    #[default]
    GetRoles,
    GetRolePermissions(RoleQuery),
    GetAssetInfo(AssetQuery),
}

impl QueryPayload {
    /// Wire name written to the `query_type` field.
    pub fn query_type(&self) -> &'static str {
        match self {
            QueryPayload::GetAccount(_) => "GetAccount",
            QueryPayload::GetAccountAssets(_) => "GetAccountAssets",
            QueryPayload::GetSignatories(_) => "GetSignatories",
            QueryPayload::GetAccountTransactions(_) => "GetAccountTransactions",
            QueryPayload::GetAccountAssetTransactions(_) => "GetAccountAssetTransactions",
            QueryPayload::GetTransactions(_) => "GetTransactions",
            QueryPayload::GetRoles => "GetRoles",
            QueryPayload::GetRolePermissions(_) => "GetRolePermissions",
            QueryPayload::GetAssetInfo(_) => "GetAssetInfo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub signature: Signature,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_ts: u64,
    pub creator_account_id: String,
    pub query_counter: u64,
    pub payload: QueryPayload,
}
