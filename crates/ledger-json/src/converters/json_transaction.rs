//! Transactions.

use ledger_json_document::{parse, render, Document};
use serde_json::{json, Value};

use super::deserializer::FieldDeserializer;
use super::json_command;
use super::json_common::signatures_to_json;
use crate::model::{Command, Signatures, Transaction};

pub fn from_json<D: Document>(document: &D) -> Option<Transaction> {
    let des = FieldDeserializer::new(document);
    des.build(
        Transaction::default(),
        [
            des.array("signatures", |tx: Transaction, signatures: Signatures| {
                Transaction { signatures, ..tx }
            }),
            des.uint64("created_ts", |tx: Transaction, created_ts: u64| Transaction {
                created_ts,
                ..tx
            }),
            des.string(
                "creator_account_id",
                |tx: Transaction, creator_account_id: String| Transaction {
                    creator_account_id,
                    ..tx
                },
            ),
            des.uint("quorum", |tx: Transaction, quorum: u32| Transaction { quorum, ..tx }),
            des.array("commands", |tx: Transaction, commands: Vec<Command>| {
                Transaction { commands, ..tx }
            }),
        ],
    )
}

pub fn to_json(transaction: &Transaction) -> Value {
    json!({
        "signatures": signatures_to_json(&transaction.signatures),
        "created_ts": transaction.created_ts,
        "creator_account_id": transaction.creator_account_id,
        "quorum": transaction.quorum,
        "commands": transaction
            .commands
            .iter()
            .map(json_command::to_json)
            .collect::<Vec<_>>(),
    })
}

/// Parses and decodes a transaction document; `None` for malformed text
/// or a malformed transaction.
pub fn transaction_from_str(text: &str) -> Option<Transaction> {
    parse(text).and_then(|document| from_json(&document))
}

pub fn transaction_to_string(transaction: &Transaction) -> String {
    render(&to_json(transaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppendRole, Signature};

    fn sample() -> Transaction {
        Transaction {
            signatures: vec![Signature::new("pk1", "sig1"), Signature::new("pk2", "sig2")],
            created_ts: 1_500_000_000_000,
            creator_account_id: "admin@test".into(),
            quorum: 1,
            commands: vec![Command::AppendRole(AppendRole {
                account_id: "admin@test".into(),
                role_name: "admin".into(),
            })],
        }
    }

    #[test]
    fn round_trips_through_text() {
        let tx = sample();
        let text = transaction_to_string(&tx);
        assert_eq!(transaction_from_str(&text), Some(tx));
    }

    #[test]
    fn bad_signature_voids_transaction() {
        let mut doc = to_json(&sample());
        doc["signatures"][1] = json!({"pubkey": "pk2"});
        assert_eq!(from_json(&doc), None);
    }

    #[test]
    fn bad_command_voids_transaction() {
        let mut doc = to_json(&sample());
        doc["commands"][0]["command_type"] = json!("Unknown");
        assert_eq!(from_json(&doc), None);
    }

    #[test]
    fn created_ts_accepts_64_bit_values() {
        let mut doc = to_json(&sample());
        doc["created_ts"] = json!(u64::MAX);
        assert_eq!(from_json(&doc).map(|tx| tx.created_ts), Some(u64::MAX));
    }

    #[test]
    fn quorum_rejects_64_bit_values() {
        let mut doc = to_json(&sample());
        doc["quorum"] = json!(u64::from(u32::MAX) + 1);
        assert_eq!(from_json(&doc), None);
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(transaction_from_str("{\"signatures\": ["), None);
        assert_eq!(transaction_from_str("[]"), None);
    }
}
