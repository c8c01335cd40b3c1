//! Live server and WebSocket client helpers

use std::net::SocketAddr;
use std::time::Duration;

use chatline::backend::server::{create_app_with_state, AppState};
use chatline::shared::{ClientEvent, ServerEvent};
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{
    connect_async, tungstenite::Message as WsMessage, MaybeTlsStream, WebSocketStream,
};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

const WAIT: Duration = Duration::from_secs(2);

/// Serve `state` on an ephemeral local port
pub async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = create_app_with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });
    addr
}

/// Open a socket and wait until the hub has registered it
pub async fn connect_peer(addr: SocketAddr, state: &AppState) -> WsClient {
    let before = state.hub.peer_count();
    let (ws, _) = connect_async(format!("ws://{addr}/ws"))
        .await
        .expect("websocket handshake");
    wait_for_peers(state, before + 1).await;
    ws
}

/// Poll until the hub holds exactly `expected` peers
pub async fn wait_for_peers(state: &AppState, expected: usize) {
    tokio::time::timeout(WAIT, async {
        while state.hub.peer_count() != expected {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| {
        panic!(
            "expected {} peers, hub has {}",
            expected,
            state.hub.peer_count()
        )
    });
}

pub async fn send_event(ws: &mut WsClient, event: &ClientEvent) {
    let frame = serde_json::to_string(event).expect("event serializes");
    send_raw(ws, &frame).await;
}

pub async fn send_raw(ws: &mut WsClient, frame: &str) {
    ws.send(WsMessage::Text(frame.to_string().into()))
        .await
        .expect("frame sent");
}

/// Next server event, skipping control frames
pub async fn next_event(ws: &mut WsClient) -> ServerEvent {
    tokio::time::timeout(WAIT, async {
        loop {
            match ws.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    return serde_json::from_str::<ServerEvent>(text.as_str())
                        .expect("server frame is a known event");
                }
                Some(Ok(WsMessage::Close(_))) | None => panic!("socket closed"),
                Some(Ok(_)) => continue,
                Some(Err(e)) => panic!("socket error: {e}"),
            }
        }
    })
    .await
    .expect("event arrives in time")
}

/// Assert nothing arrives within a short window
pub async fn assert_silent(ws: &mut WsClient) {
    let outcome = tokio::time::timeout(Duration::from_millis(150), ws.next()).await;
    assert!(outcome.is_err(), "unexpected frame: {:?}", outcome);
}
