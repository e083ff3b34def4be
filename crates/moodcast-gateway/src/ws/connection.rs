use axum::{
    extract::{ws::Message, ws::WebSocket, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use moodcast_core::config::OUTBOUND_BUFFER;
use std::sync::Arc;
use tracing::{debug, info};

use crate::app::AppState;
use crate::ws::registry::ClientId;

/// Axum handler — upgrades HTTP to WebSocket at GET /ws.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| run_connection(socket, state))
}

/// Per-connection event loop — lives for the entire WS session.
///
/// Broadcast payloads arrive on a bounded mpsc channel whose sender lives in
/// the registry; this task is the only writer to the socket.
async fn run_connection(socket: WebSocket, state: Arc<AppState>) {
    let client_id = ClientId::new();
    let (outbound_tx, mut outbound_rx) = tokio::sync::mpsc::channel::<String>(OUTBOUND_BUFFER);
    let active = state.registry.add(client_id.clone(), outbound_tx);
    info!(client_id = %client_id, active, "client connected");

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            payload = outbound_rx.recv() => {
                match payload {
                    Some(text) => {
                        if sink.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    // The publisher pruned this client and dropped its sender.
                    None => break,
                }
            }

            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        // Inbound traffic carries no meaning for the broadcast.
                        debug!(client_id = %client_id, payload = %text.as_str(), "ignoring client message");
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        debug!(client_id = %client_id, error = %e, "socket error");
                        break;
                    }
                }
            }
        }
    }

    let active = state.registry.remove(&client_id);
    info!(client_id = %client_id, active, "client disconnected");
}
