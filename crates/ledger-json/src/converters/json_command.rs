//! Commands, discriminated by the `command_type` field.

use ledger_json_document::Document;
use serde_json::{json, Value};

use super::accumulate::accumulate_strict;
use super::convert::Convert;
use super::deserializer::FieldDeserializer;
use super::field::Array;
use super::json_common::peer_to_json;
use crate::model::{
    AddAssetQuantity, AddPeer, AddSignatory, AppendRole, Command, CreateAccount, CreateAsset,
    CreateDomain, CreateRole, Peer, PubKey, SetQuorum, TransferAsset,
};

pub fn from_json<D: Document>(document: &D) -> Option<Command> {
    let des = FieldDeserializer::new(document);
    let command_type = des.string_field("command_type")?;
    match command_type {
        "AddPeer" => des
            .build(
                AddPeer::default(),
                [des.object("peer", |_: AddPeer, peer: Peer| AddPeer { peer })],
            )
            .map(Command::AddPeer),
        "AddSignatory" => des
            .build(
                AddSignatory::default(),
                [
                    des.string("account_id", |c: AddSignatory, account_id: String| {
                        AddSignatory { account_id, ..c }
                    }),
                    des.string("pubkey", |c: AddSignatory, pubkey: PubKey| AddSignatory {
                        pubkey,
                        ..c
                    }),
                ],
            )
            .map(Command::AddSignatory),
        "AppendRole" => des
            .build(
                AppendRole::default(),
                [
                    des.string("account_id", |c: AppendRole, account_id: String| AppendRole {
                        account_id,
                        ..c
                    }),
                    des.string("role_name", |c: AppendRole, role_name: String| AppendRole {
                        role_name,
                        ..c
                    }),
                ],
            )
            .map(Command::AppendRole),
        "CreateAccount" => des
            .build(
                CreateAccount::default(),
                [
                    des.string("account_name", |c: CreateAccount, account_name: String| {
                        CreateAccount { account_name, ..c }
                    }),
                    des.string("domain_id", |c: CreateAccount, domain_id: String| {
                        CreateAccount { domain_id, ..c }
                    }),
                    des.string("pubkey", |c: CreateAccount, pubkey: PubKey| CreateAccount {
                        pubkey,
                        ..c
                    }),
                ],
            )
            .map(Command::CreateAccount),
        "CreateAsset" => des
            .build(
                CreateAsset::default(),
                [
                    des.string("asset_name", |c: CreateAsset, asset_name: String| {
                        CreateAsset { asset_name, ..c }
                    }),
                    des.string("domain_id", |c: CreateAsset, domain_id: String| CreateAsset {
                        domain_id,
                        ..c
                    }),
                    des.uint("precision", |c: CreateAsset, precision: u8| CreateAsset {
                        precision,
                        ..c
                    }),
                ],
            )
            .map(Command::CreateAsset),
        "CreateDomain" => des
            .build(
                CreateDomain::default(),
                [
                    des.string("domain_id", |c: CreateDomain, domain_id: String| {
                        CreateDomain { domain_id, ..c }
                    }),
                    des.string(
                        "user_default_role",
                        |c: CreateDomain, user_default_role: String| CreateDomain {
                            user_default_role,
                            ..c
                        },
                    ),
                ],
            )
            .map(Command::CreateDomain),
        "CreateRole" => des
            .build(
                CreateRole::default(),
                [
                    des.string("role_name", |c: CreateRole, role_name: String| CreateRole {
                        role_name,
                        ..c
                    }),
                    des.array("permissions", |c: CreateRole, permissions: Vec<String>| {
                        CreateRole { permissions, ..c }
                    }),
                ],
            )
            .map(Command::CreateRole),
        "AddAssetQuantity" => des
            .build(
                AddAssetQuantity::default(),
                [
                    des.string("asset_id", |c: AddAssetQuantity, asset_id: String| {
                        AddAssetQuantity { asset_id, ..c }
                    }),
                    des.string("amount", |c: AddAssetQuantity, amount: String| {
                        AddAssetQuantity { amount, ..c }
                    }),
                ],
            )
            .map(Command::AddAssetQuantity),
        "TransferAsset" => des
            .build(
                TransferAsset::default(),
                [
                    des.string("src_account_id", |c: TransferAsset, src_account_id: String| {
                        TransferAsset { src_account_id, ..c }
                    }),
                    des.string(
                        "dest_account_id",
                        |c: TransferAsset, dest_account_id: String| TransferAsset {
                            dest_account_id,
                            ..c
                        },
                    ),
                    des.string("asset_id", |c: TransferAsset, asset_id: String| {
                        TransferAsset { asset_id, ..c }
                    }),
                    des.string("description", |c: TransferAsset, description: String| {
                        TransferAsset { description, ..c }
                    }),
                    des.string("amount", |c: TransferAsset, amount: String| TransferAsset {
                        amount,
                        ..c
                    }),
                ],
            )
            .map(Command::TransferAsset),
        "SetQuorum" => des
            .build(
                SetQuorum::default(),
                [
                    des.string("account_id", |c: SetQuorum, account_id: String| SetQuorum {
                        account_id,
                        ..c
                    }),
                    des.uint("new_quorum", |c: SetQuorum, new_quorum: u32| SetQuorum {
                        new_quorum,
                        ..c
                    }),
                ],
            )
            .map(Command::SetQuorum),
        other => {
            tracing::debug!(command_type = other, "unknown command type");
            None
        }
    }
}

pub fn to_json(command: &Command) -> Value {
    let command_type = command.command_type();
    match command {
        Command::AddPeer(c) => json!({
            "command_type": command_type,
            "peer": peer_to_json(&c.peer),
        }),
        Command::AddSignatory(c) => json!({
            "command_type": command_type,
            "account_id": c.account_id,
            "pubkey": c.pubkey.to_hex(),
        }),
        Command::AppendRole(c) => json!({
            "command_type": command_type,
            "account_id": c.account_id,
            "role_name": c.role_name,
        }),
        Command::CreateAccount(c) => json!({
            "command_type": command_type,
            "account_name": c.account_name,
            "domain_id": c.domain_id,
            "pubkey": c.pubkey.to_hex(),
        }),
        Command::CreateAsset(c) => json!({
            "command_type": command_type,
            "asset_name": c.asset_name,
            "domain_id": c.domain_id,
            "precision": c.precision,
        }),
        Command::CreateDomain(c) => json!({
            "command_type": command_type,
            "domain_id": c.domain_id,
            "user_default_role": c.user_default_role,
        }),
        Command::CreateRole(c) => json!({
            "command_type": command_type,
            "role_name": c.role_name,
            "permissions": c.permissions,
        }),
        Command::AddAssetQuantity(c) => json!({
            "command_type": command_type,
            "asset_id": c.asset_id,
            "amount": c.amount,
        }),
        Command::TransferAsset(c) => json!({
            "command_type": command_type,
            "src_account_id": c.src_account_id,
            "dest_account_id": c.dest_account_id,
            "asset_id": c.asset_id,
            "description": c.description,
            "amount": c.amount,
        }),
        Command::SetQuorum(c) => json!({
            "command_type": command_type,
            "account_id": c.account_id,
            "new_quorum": c.new_quorum,
        }),
    }
}

/// Strict: one malformed command voids the list.
impl<'a, D: Document> Convert<Array<'a, D>> for Vec<Command> {
    fn convert(raw: Array<'a, D>) -> Option<Self> {
        accumulate_strict(raw, from_json)
    }
}
