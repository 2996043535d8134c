//! Objects shared by several ledger documents: signatures and peers.
//!
//! Wire names are fixed for interop: a signature is
//! `{"pubkey": string, "signature": string}` and a peer is
//! `{"address": string, "peer_key": hex}`.

use ledger_json_document::Document;
use serde_json::{json, Value};

use super::accumulate::accumulate_strict;
use super::convert::Convert;
use super::deserializer::FieldDeserializer;
use super::field::{Array, Object};
use crate::model::{Peer, PubKey, Signature, Signatures};

// ── Signature ─────────────────────────────────────────────────────────────

pub fn signature_from_json<D: Document>(document: &D) -> Option<Signature> {
    let des = FieldDeserializer::new(document);
    des.build(
        Signature::default(),
        [
            des.string("pubkey", |s: Signature, pubkey: String| Signature { pubkey, ..s }),
            des.string("signature", |s: Signature, signature: String| Signature {
                signature,
                ..s
            }),
        ],
    )
}

pub fn signature_to_json(signature: &Signature) -> Value {
    json!({
        "pubkey": signature.pubkey,
        "signature": signature.signature,
    })
}

pub fn signatures_to_json(signatures: &[Signature]) -> Value {
    Value::Array(signatures.iter().map(signature_to_json).collect())
}

impl<'a, D: Document> Convert<Object<'a, D>> for Signature {
    fn convert(raw: Object<'a, D>) -> Option<Self> {
        signature_from_json(raw.document())
    }
}

/// Strict: one malformed signature voids the list.
impl<'a, D: Document> Convert<Array<'a, D>> for Signatures {
    fn convert(raw: Array<'a, D>) -> Option<Self> {
        accumulate_strict(raw, signature_from_json)
    }
}

// ── Peer ──────────────────────────────────────────────────────────────────

pub fn peer_from_json<D: Document>(document: &D) -> Option<Peer> {
    let des = FieldDeserializer::new(document);
    des.build(
        Peer::default(),
        [
            des.string("address", |p: Peer, address: String| Peer { address, ..p }),
            des.string("peer_key", |p: Peer, pubkey: PubKey| Peer { pubkey, ..p }),
        ],
    )
}

pub fn peer_to_json(peer: &Peer) -> Value {
    json!({
        "address": peer.address,
        "peer_key": peer.pubkey.to_hex(),
    })
}

impl<'a, D: Document> Convert<Object<'a, D>> for Peer {
    fn convert(raw: Object<'a, D>) -> Option<Self> {
        peer_from_json(raw.document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0f0e0d0c0b0a09080706050403020100f0e0d0c0b0a090807060504030201000";

    #[test]
    fn signature_requires_both_fields() {
        assert_eq!(
            signature_from_json(&json!({"pubkey": "a", "signature": "b"})),
            Some(Signature::new("a", "b"))
        );
        assert_eq!(signature_from_json(&json!({"pubkey": "a"})), None);
        assert_eq!(signature_from_json(&json!({"signature": "b"})), None);
        assert_eq!(signature_from_json(&json!({"pubkey": 1, "signature": "b"})), None);
        assert_eq!(signature_from_json(&json!("pubkey")), None);
    }

    #[test]
    fn signature_ignores_extra_fields() {
        let doc = json!({"pubkey": "a", "signature": "b", "extra": [1, 2]});
        assert_eq!(signature_from_json(&doc), Some(Signature::new("a", "b")));
    }

    #[test]
    fn signature_round_trips() {
        let sig = Signature::new("ab01", "cd02");
        assert_eq!(signature_from_json(&signature_to_json(&sig)), Some(sig));
    }

    #[test]
    fn peer_decodes_hex_key() {
        let doc = json!({"address": "127.0.0.1:10001", "peer_key": KEY});
        let peer = peer_from_json(&doc).unwrap();
        assert_eq!(peer.address, "127.0.0.1:10001");
        assert_eq!(peer.pubkey.to_hex(), KEY);
        assert_eq!(peer_to_json(&peer), doc);
    }

    #[test]
    fn peer_with_short_key_is_rejected() {
        let doc = json!({"address": "127.0.0.1:10001", "peer_key": "0f0e"});
        assert_eq!(peer_from_json(&doc), None);
    }
}
