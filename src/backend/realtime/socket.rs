/**
 * WebSocket Transport
 *
 * Upgrades `GET /ws` to a WebSocket and attaches it to the broadcast hub.
 *
 * Each connection gets two halves:
 * - a forwarding task that drains the peer's hub channel into the socket
 * - the read loop, which turns inbound frames into hub calls
 *
 * A frame that is not a valid `send-message` event yields an `error` event
 * for that peer only. The connection stays open.
 *
 * If the hub drops the peer (its queue filled up), the forwarding task
 * flushes what was queued and closes the socket.
 */
use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::backend::error::INVALID_REQUEST;
use crate::backend::realtime::hub::{BroadcastHub, PeerId};
use crate::shared::{ClientEvent, ServerEvent};

/// Handle `GET /ws`
pub async fn handle_socket_upgrade(
    State(hub): State<BroadcastHub>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_peer(socket, hub))
}

async fn run_peer(socket: WebSocket, hub: BroadcastHub) {
    let (peer_id, mut events) = hub.connect();
    let (mut sender, mut receiver) = socket.split();

    let forward_task = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let frame = match serde_json::to_string(&event) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("[Socket] Failed to serialize event: {:?}", e);
                    continue;
                }
            };
            if sender.send(WsMessage::Text(frame.into())).await.is_err() {
                break;
            }
        }
        // Channel closed: either the read loop ended or the hub dropped us.
        let _ = sender.close().await;
    });

    while let Some(frame) = receiver.next().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!("[Socket] Read error from {}: {:?}", peer_id, e);
                break;
            }
        };

        match frame {
            WsMessage::Text(text) => handle_frame(&hub, peer_id, text.as_str()),
            WsMessage::Binary(_) => reject_frame(&hub, peer_id),
            WsMessage::Close(_) => break,
            // Ping/pong replies are handled by axum.
            WsMessage::Ping(_) | WsMessage::Pong(_) => {}
        }

        if forward_task.is_finished() {
            break;
        }
    }

    hub.disconnect(peer_id);
    forward_task.abort();
}

fn handle_frame(hub: &BroadcastHub, peer_id: PeerId, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(ClientEvent::SendMessage(body)) => {
            hub.incoming(peer_id, &body);
        }
        Err(e) => {
            tracing::debug!("[Socket] Unparseable frame from {}: {}", peer_id, e);
            reject_frame(hub, peer_id);
        }
    }
}

fn reject_frame(hub: &BroadcastHub, peer_id: PeerId) {
    hub.send_to(peer_id, ServerEvent::error(INVALID_REQUEST));
}
