//! Peer lookups over the world state view.
//!
//! [`PeerQueryWsv`] adds nothing of its own: it forwards to whatever
//! [`WsvQuery`] backs the node.

use std::sync::Arc;

use crate::model::{Peer, PubKey};

/// Read access to peers stored in the world state view.
pub trait WsvQuery: Send + Sync {
    /// Every registered peer, or `None` if the store could not be read.
    fn peers(&self) -> Option<Vec<Peer>>;

    fn peer_by_public_key(&self, public_key: &PubKey) -> Option<Peer>;
}

/// Peer set of the ledger as seen by consensus.
pub trait PeerQuery {
    fn ledger_peers(&self) -> Option<Vec<Peer>>;

    fn ledger_peer_by_public_key(&self, public_key: &PubKey) -> Option<Peer>;
}

#[derive(Clone)]
pub struct PeerQueryWsv {
    wsv: Arc<dyn WsvQuery>,
}

impl PeerQueryWsv {
    pub fn new(wsv: Arc<dyn WsvQuery>) -> Self {
        Self { wsv }
    }
}

impl PeerQuery for PeerQueryWsv {
    fn ledger_peers(&self) -> Option<Vec<Peer>> {
        self.wsv.peers()
    }

    fn ledger_peer_by_public_key(&self, public_key: &PubKey) -> Option<Peer> {
        self.wsv.peer_by_public_key(public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWsv {
        peers: Vec<Peer>,
    }

    impl WsvQuery for FixedWsv {
        fn peers(&self) -> Option<Vec<Peer>> {
            Some(self.peers.clone())
        }

        fn peer_by_public_key(&self, public_key: &PubKey) -> Option<Peer> {
            self.peers.iter().find(|p| &p.pubkey == public_key).cloned()
        }
    }

    struct BrokenWsv;

    impl WsvQuery for BrokenWsv {
        fn peers(&self) -> Option<Vec<Peer>> {
            None
        }

        fn peer_by_public_key(&self, _: &PubKey) -> Option<Peer> {
            None
        }
    }

    #[test]
    fn forwards_to_wsv() {
        let a = Peer::new("a:1", PubKey::new([1; 32]));
        let b = Peer::new("b:1", PubKey::new([2; 32]));
        let query = PeerQueryWsv::new(Arc::new(FixedWsv {
            peers: vec![a.clone(), b.clone()],
        }));
        assert_eq!(query.ledger_peers(), Some(vec![a, b.clone()]));
        assert_eq!(query.ledger_peer_by_public_key(&PubKey::new([2; 32])), Some(b));
        assert_eq!(query.ledger_peer_by_public_key(&PubKey::new([3; 32])), None);
    }

    #[test]
    fn propagates_storage_failure() {
        let query = PeerQueryWsv::new(Arc::new(BrokenWsv));
        assert_eq!(query.ledger_peers(), None);
    }
}
