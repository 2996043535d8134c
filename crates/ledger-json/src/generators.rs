//! Builders for common commands and transactions, including the genesis
//! transaction that seeds a fresh ledger.
//!
//! Key material is supplied by the caller; nothing here generates keys.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{
    AddPeer, AppendRole, Command, CreateAccount, CreateAsset, CreateDomain, CreateRole, Peer,
    PubKey, Transaction,
};

pub const ADMIN_PERMISSIONS: &[&str] = &[
    "can_add_peer",
    "can_add_signatory",
    "can_create_account",
    "can_create_domain",
    "can_get_all_acc_ast",
    "can_get_all_acc_ast_txs",
    "can_get_all_acc_txs",
    "can_get_all_accounts",
    "can_get_all_signatories",
    "can_get_all_txs",
    "can_get_roles",
    "can_read_assets",
    "can_remove_signatory",
    "can_set_quorum",
];

pub const USER_PERMISSIONS: &[&str] = &[
    "can_add_signatory",
    "can_get_my_acc_ast",
    "can_get_my_acc_ast_txs",
    "can_get_my_acc_txs",
    "can_get_my_account",
    "can_get_my_signatories",
    "can_get_my_txs",
    "can_receive",
    "can_remove_signatory",
    "can_set_quorum",
    "can_transfer",
];

pub const ASSET_CREATOR_PERMISSIONS: &[&str] = &[
    "can_add_asset_qty",
    "can_create_asset",
    "can_receive",
    "can_transfer",
];

/// Shorthand constructors for individual commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandGenerator;

impl CommandGenerator {
    pub fn generate_add_peer(&self, peer: Peer) -> Command {
        Command::AddPeer(AddPeer { peer })
    }

    pub fn generate_create_role(&self, role_name: &str, permissions: &[&str]) -> Command {
        Command::CreateRole(CreateRole {
            role_name: role_name.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        })
    }

    pub fn generate_create_admin_role(&self, role_name: &str) -> Command {
        self.generate_create_role(role_name, ADMIN_PERMISSIONS)
    }

    pub fn generate_create_user_role(&self, role_name: &str) -> Command {
        self.generate_create_role(role_name, USER_PERMISSIONS)
    }

    pub fn generate_create_asset_creator_role(&self, role_name: &str) -> Command {
        self.generate_create_role(role_name, ASSET_CREATOR_PERMISSIONS)
    }

    pub fn generate_create_domain(&self, domain_id: &str, default_role: &str) -> Command {
        Command::CreateDomain(CreateDomain {
            domain_id: domain_id.to_string(),
            user_default_role: default_role.to_string(),
        })
    }

    pub fn generate_create_asset(&self, asset_name: &str, domain_id: &str, precision: u8) -> Command {
        Command::CreateAsset(CreateAsset {
            asset_name: asset_name.to_string(),
            domain_id: domain_id.to_string(),
            precision,
        })
    }

    pub fn generate_create_account(
        &self,
        account_name: &str,
        domain_id: &str,
        pubkey: PubKey,
    ) -> Command {
        Command::CreateAccount(CreateAccount {
            account_name: account_name.to_string(),
            domain_id: domain_id.to_string(),
            pubkey,
        })
    }

    pub fn generate_append_role(&self, account_id: &str, role_name: &str) -> Command {
        Command::AppendRole(AppendRole {
            account_id: account_id.to_string(),
            role_name: role_name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionGenerator;

impl TransactionGenerator {
    /// Genesis transaction: registers `peers`, the `admin`, `user` and
    /// `money_creator` roles, the `test` domain with a `coin` asset, and
    /// the `admin@test` and `test@test` accounts.
    pub fn generate_genesis_transaction(
        &self,
        timestamp: u64,
        peers: &[Peer],
        admin_key: PubKey,
        user_key: PubKey,
    ) -> Transaction {
        let commands = CommandGenerator;
        let mut tx_commands: Vec<Command> = peers
            .iter()
            .cloned()
            .map(|peer| commands.generate_add_peer(peer))
            .collect();
        tx_commands.extend([
            commands.generate_create_admin_role("admin"),
            commands.generate_create_user_role("user"),
            commands.generate_create_asset_creator_role("money_creator"),
            commands.generate_create_domain("test", "user"),
            commands.generate_create_asset("coin", "test", 2),
            commands.generate_create_account("admin", "test", admin_key),
            commands.generate_create_account("test", "test", user_key),
            commands.generate_append_role("admin@test", "admin"),
            commands.generate_append_role("admin@test", "money_creator"),
        ]);
        tracing::debug!(
            peers = peers.len(),
            commands = tx_commands.len(),
            "generated genesis transaction"
        );
        self.generate_transaction(timestamp, "", tx_commands)
    }

    pub fn generate_transaction(
        &self,
        timestamp: u64,
        creator_account_id: &str,
        commands: Vec<Command>,
    ) -> Transaction {
        Transaction {
            signatures: Vec::new(),
            created_ts: timestamp,
            creator_account_id: creator_account_id.to_string(),
            quorum: 1,
            commands,
        }
    }

    /// Same as [`generate_transaction`](Self::generate_transaction),
    /// stamped with the current wall-clock time in milliseconds.
    pub fn generate_transaction_now(
        &self,
        creator_account_id: &str,
        commands: Vec<Command>,
    ) -> Transaction {
        self.generate_transaction(now_millis(), creator_account_id, commands)
    }
}

/// Wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}
