//! Blocks.
//!
//! Hashes are 32-byte blobs written as 64 hex characters. `txs_number`
//! is a `Uint` on the wire but must also fit in 16 bits.

use ledger_json_document::{parse, render, Document};
use serde_json::{json, Value};

use super::accumulate::accumulate_strict;
use super::deserializer::FieldDeserializer;
use super::json_common::signatures_to_json;
use super::json_transaction;
use crate::model::{Block, Hash256, Signatures, Transaction};

pub fn from_json<D: Document>(document: &D) -> Option<Block> {
    let des = FieldDeserializer::new(document);
    des.build(
        Block::default(),
        [
            des.string("hash", |b: Block, hash: Hash256| Block { hash, ..b }),
            des.array("signatures", |b: Block, signatures: Signatures| Block {
                signatures,
                ..b
            }),
            des.uint64("created_ts", |b: Block, created_ts: u64| Block { created_ts, ..b }),
            des.uint64("height", |b: Block, height: u64| Block { height, ..b }),
            des.string("prev_hash", |b: Block, prev_hash: Hash256| Block { prev_hash, ..b }),
            des.uint("txs_number", |b: Block, txs_number: u16| Block { txs_number, ..b }),
            des.string("merkle_root", |b: Block, merkle_root: Hash256| Block {
                merkle_root,
                ..b
            }),
            des.array_with(
                "transactions",
                |b: Block, transactions: Vec<Transaction>| Block { transactions, ..b },
                |transactions| accumulate_strict(transactions, json_transaction::from_json),
            ),
        ],
    )
}

pub fn to_json(block: &Block) -> Value {
    json!({
        "hash": block.hash.to_hex(),
        "signatures": signatures_to_json(&block.signatures),
        "created_ts": block.created_ts,
        "height": block.height,
        "prev_hash": block.prev_hash.to_hex(),
        "txs_number": block.txs_number,
        "merkle_root": block.merkle_root.to_hex(),
        "transactions": block
            .transactions
            .iter()
            .map(json_transaction::to_json)
            .collect::<Vec<_>>(),
    })
}

pub fn block_from_str(text: &str) -> Option<Block> {
    parse(text).and_then(|document| from_json(&document))
}

pub fn block_to_string(block: &Block) -> String {
    render(&to_json(block))
}
