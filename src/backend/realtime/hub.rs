/**
 * Broadcast Hub
 *
 * Bridges real-time peers and the message log. The hub owns the set of
 * connected peers; each peer is represented by the sending half of a
 * bounded channel whose receiving half is drained by that peer's socket
 * task.
 *
 * # Ordering
 *
 * Accepting a message appends it to the log and fans it out while holding
 * the peer lock, so every peer receives accepted messages in log order.
 * Per-peer channels are FIFO, which keeps that order through to the socket.
 *
 * # Failure Handling
 *
 * A peer whose channel is closed, or whose queue already holds
 * `PEER_QUEUE_CAPACITY` undelivered events, is pruned during fanout. Other
 * peers still receive the event and the sender is never told. Dropping the
 * pruned sender ends that peer's socket task.
 */
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use uuid::Uuid;

use crate::backend::chat::log::MessageLog;
use crate::backend::notify::{self, NotificationSink};
use crate::shared::{Message, ServerEvent};

/// Opaque connection identifier
pub type PeerId = Uuid;

/// Receiving half handed to a peer's socket task
pub type PeerReceiver = mpsc::Receiver<ServerEvent>;

/// Undelivered events a peer may have queued before it is dropped
pub const PEER_QUEUE_CAPACITY: usize = 256;

type PeerMap = HashMap<PeerId, mpsc::Sender<ServerEvent>>;

#[derive(Clone)]
pub struct BroadcastHub {
    peers: Arc<Mutex<PeerMap>>,
    log: Arc<MessageLog>,
    notifier: Arc<dyn NotificationSink>,
    notify_timeout: Duration,
}

impl BroadcastHub {
    pub fn new(
        log: Arc<MessageLog>,
        notifier: Arc<dyn NotificationSink>,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            peers: Arc::new(Mutex::new(HashMap::new())),
            log,
            notifier,
            notify_timeout,
        }
    }

    /// Register a new peer
    pub fn connect(&self) -> (PeerId, PeerReceiver) {
        let peer_id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel(PEER_QUEUE_CAPACITY);
        let mut peers = self.peers();
        peers.insert(peer_id, tx);
        tracing::info!("[Hub] Peer connected: {} ({} online)", peer_id, peers.len());
        (peer_id, rx)
    }

    /// Remove a peer; returns false if it was already gone
    pub fn disconnect(&self, peer_id: PeerId) -> bool {
        let mut peers = self.peers();
        let removed = peers.remove(&peer_id).is_some();
        if removed {
            tracing::info!("[Hub] Peer disconnected: {} ({} online)", peer_id, peers.len());
        }
        removed
    }

    /// Handle a `send-message` frame from `peer_id`
    ///
    /// Whitespace-only text is dropped without touching the log. Otherwise
    /// the text is appended under the peer's id as `user`, a notification
    /// is dispatched in the background, and the message is fanned out to
    /// every connected peer including the sender.
    pub fn incoming(&self, peer_id: PeerId, raw_text: &str) -> Option<Message> {
        if raw_text.trim().is_empty() {
            tracing::debug!("[Hub] Discarding blank message from {}", peer_id);
            return None;
        }

        let mut peers = self.peers();
        let message = match self.log.append(peer_id.to_string(), raw_text) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("[Hub] Rejected message from {}: {}", peer_id, e);
                return None;
            }
        };
        let delivered = deliver(&mut peers, &ServerEvent::announce(&message));
        drop(peers);

        tracing::info!(
            "[Hub] Message {} from {} delivered to {} peers",
            message.id,
            peer_id,
            delivered
        );

        notify::dispatch(
            &self.notifier,
            peer_id.to_string(),
            message.body.clone(),
            self.notify_timeout,
        );

        Some(message)
    }

    /// Deliver `event` to a single peer
    pub fn send_to(&self, peer_id: PeerId, event: ServerEvent) -> bool {
        let mut peers = self.peers();
        let Some(tx) = peers.get(&peer_id) else {
            return false;
        };
        if let Err(e) = tx.try_send(event) {
            drop_peer(peer_id, &e);
            peers.remove(&peer_id);
            return false;
        }
        true
    }

    #[cfg(test)]
    fn is_connected(&self, peer_id: PeerId) -> bool {
        self.peers().contains_key(&peer_id)
    }

    pub fn peer_count(&self) -> usize {
        self.peers().len()
    }

    fn peers(&self) -> MutexGuard<'_, PeerMap> {
        self.peers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn deliver(peers: &mut PeerMap, event: &ServerEvent) -> usize {
    let mut delivered = 0;
    peers.retain(|peer_id, tx| match tx.try_send(event.clone()) {
        Ok(()) => {
            delivered += 1;
            true
        }
        Err(e) => {
            drop_peer(*peer_id, &e);
            false
        }
    });
    delivered
}

fn drop_peer(peer_id: PeerId, reason: &TrySendError<ServerEvent>) {
    match reason {
        TrySendError::Full(_) => {
            tracing::warn!("[Hub] Dropping peer {}: queue full", peer_id)
        }
        TrySendError::Closed(_) => {
            tracing::warn!("[Hub] Dropping unreachable peer {}", peer_id)
        }
    }
}
