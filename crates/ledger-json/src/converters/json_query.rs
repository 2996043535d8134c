//! Queries, discriminated by the `query_type` field.
//!
//! `GetTransactions` carries a hash filter under `tx_hashes`. That list
//! is decoded leniently: a string that is not a valid 32-byte hash is
//! dropped, while a non-string element rejects the whole query.

use ledger_json_document::{parse, render, Document};
use serde_json::{json, Map, Value};

use super::accumulate::accumulate_lenient;
use super::convert::Convert;
use super::deserializer::FieldDeserializer;
use super::field::Array;
use super::json_common::signature_to_json;
use crate::model::{
    AccountAssetQuery, AccountQuery, AssetQuery, GetTransactions, Hash256, Query, QueryPayload,
    RoleQuery, Signature, TxHashCollection,
};

pub fn from_json<D: Document>(document: &D) -> Option<Query> {
    let des = FieldDeserializer::new(document);
    let payload = payload_from_json(&des)?;
    des.build(
        Query {
            payload,
            ..Query::default()
        },
        [
            des.object("signature", |q: Query, signature: Signature| Query {
                signature,
                ..q
            }),
            des.uint64("created_ts", |q: Query, created_ts: u64| Query { created_ts, ..q }),
            des.string(
                "creator_account_id",
                |q: Query, creator_account_id: String| Query {
                    creator_account_id,
                    ..q
                },
            ),
            des.uint64("query_counter", |q: Query, query_counter: u64| Query {
                query_counter,
                ..q
            }),
        ],
    )
}

fn payload_from_json<D: Document>(des: &FieldDeserializer<'_, D>) -> Option<QueryPayload> {
    let query_type = des.string_field("query_type")?;
    match query_type {
        "GetAccount" => account_query(des).map(QueryPayload::GetAccount),
        "GetAccountAssets" => account_asset_query(des).map(QueryPayload::GetAccountAssets),
        "GetSignatories" => account_query(des).map(QueryPayload::GetSignatories),
        "GetAccountTransactions" => account_query(des).map(QueryPayload::GetAccountTransactions),
        "GetAccountAssetTransactions" => {
            account_asset_query(des).map(QueryPayload::GetAccountAssetTransactions)
        }
        "GetTransactions" => des
            .build(
                GetTransactions::default(),
                [des.array(
                    "tx_hashes",
                    |_: GetTransactions, tx_hashes: TxHashCollection| GetTransactions {
                        tx_hashes,
                    },
                )],
            )
            .map(QueryPayload::GetTransactions),
        "GetRoles" => Some(QueryPayload::GetRoles),
        "GetRolePermissions" => des
            .build(
                RoleQuery::default(),
                [des.string("role_id", |_: RoleQuery, role_id: String| RoleQuery { role_id })],
            )
            .map(QueryPayload::GetRolePermissions),
        "GetAssetInfo" => des
            .build(
                AssetQuery::default(),
                [des.string("asset_id", |_: AssetQuery, asset_id: String| AssetQuery {
                    asset_id,
                })],
            )
            .map(QueryPayload::GetAssetInfo),
        other => {
            tracing::debug!(query_type = other, "unknown query type");
            None
        }
    }
}

fn account_query<D: Document>(des: &FieldDeserializer<'_, D>) -> Option<AccountQuery> {
    des.build(
        AccountQuery::default(),
        [des.string("account_id", |_: AccountQuery, account_id: String| {
            AccountQuery { account_id }
        })],
    )
}

fn account_asset_query<D: Document>(des: &FieldDeserializer<'_, D>) -> Option<AccountAssetQuery> {
    des.build(
        AccountAssetQuery::default(),
        [
            des.string("account_id", |q: AccountAssetQuery, account_id: String| {
                AccountAssetQuery { account_id, ..q }
            }),
            des.string("asset_id", |q: AccountAssetQuery, asset_id: String| {
                AccountAssetQuery { asset_id, ..q }
            }),
        ],
    )
}

/// Lenient: hex strings that do not decode are skipped, non-strings void the list.
impl<'a, D: Document> Convert<Array<'a, D>> for TxHashCollection {
    fn convert(raw: Array<'a, D>) -> Option<Self> {
        accumulate_lenient(raw, Hash256::convert)
    }
}

pub fn to_json(query: &Query) -> Value {
    let mut m = Map::new();
    m.insert("signature".into(), signature_to_json(&query.signature));
    m.insert("created_ts".into(), json!(query.created_ts));
    m.insert("creator_account_id".into(), json!(query.creator_account_id));
    m.insert("query_counter".into(), json!(query.query_counter));
    m.insert("query_type".into(), json!(query.payload.query_type()));
    match &query.payload {
        QueryPayload::GetAccount(q)
        | QueryPayload::GetSignatories(q)
        | QueryPayload::GetAccountTransactions(q) => {
            m.insert("account_id".into(), json!(q.account_id));
        }
        QueryPayload::GetAccountAssets(q) | QueryPayload::GetAccountAssetTransactions(q) => {
            m.insert("account_id".into(), json!(q.account_id));
            m.insert("asset_id".into(), json!(q.asset_id));
        }
        QueryPayload::GetTransactions(q) => {
            let hashes = q.tx_hashes.iter().map(|h| json!(h.to_hex())).collect();
            m.insert("tx_hashes".into(), Value::Array(hashes));
        }
        QueryPayload::GetRoles => {}
        QueryPayload::GetRolePermissions(q) => {
            m.insert("role_id".into(), json!(q.role_id));
        }
        QueryPayload::GetAssetInfo(q) => {
            m.insert("asset_id".into(), json!(q.asset_id));
        }
    }
    Value::Object(m)
}

pub fn query_from_str(text: &str) -> Option<Query> {
    parse(text).and_then(|document| from_json(&document))
}

pub fn query_to_string(query: &Query) -> String {
    render(&to_json(query))
}
