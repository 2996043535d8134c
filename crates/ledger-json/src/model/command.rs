use ledger_json_blob::PubKey;

use super::Peer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPeer {
    pub peer: Peer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSignatory {
    pub account_id: String,
    pub pubkey: PubKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendRole {
    pub account_id: String,
    pub role_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAccount {
    pub account_name: String,
    pub domain_id: String,
    pub pubkey: PubKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAsset {
    pub asset_name: String,
    pub domain_id: String,
    /// Digits after the decimal point.
    pub precision: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDomain {
    pub domain_id: String,
    pub user_default_role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRole {
    pub role_name: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddAssetQuantity {
    pub asset_id: String,
    /// Decimal amount, kept as text to avoid float rounding.
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferAsset {
    pub src_account_id: String,
    pub dest_account_id: String,
    pub asset_id: String,
    pub description: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetQuorum {
    pub account_id: String,
    pub new_quorum: u32,
}

/// State-changing instruction carried by a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPeer(AddPeer),
    AddSignatory(AddSignatory),
    AppendRole(AppendRole),
    CreateAccount(CreateAccount),
    CreateAsset(CreateAsset),
    CreateDomain(CreateDomain),
    CreateRole(CreateRole),
    AddAssetQuantity(AddAssetQuantity),
    TransferAsset(TransferAsset),
    SetQuorum(SetQuorum),
}

impl Command {
    /// Wire name written to the `command_type` field.
    pub fn command_type(&self) -> &'static str {
        match self {
            Command::AddPeer(_) => "AddPeer",
            Command::AddSignatory(_) => "AddSignatory",
            Command::AppendRole(_) => "AppendRole",
            Command::CreateAccount(_) => "CreateAccount",
            Command::CreateAsset(_) => "CreateAsset",
            Command::CreateDomain(_) => "CreateDomain",
            Command::CreateRole(_) => "CreateRole",
            Command::AddAssetQuantity(_) => "AddAssetQuantity",
            Command::TransferAsset(_) => "TransferAsset",
            Command::SetQuorum(_) => "SetQuorum",
        }
    }
}
