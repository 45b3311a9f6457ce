use std::sync::Arc;
use axum::{
    extract::{State, ws::{Message, WebSocket, WebSocketUpgrade}},
    response::Response,
};
use tracing::{info, error, debug};
use futures_util::{StreamExt, SinkExt};

use crate::relay::{Relay, RelayError, SessionPhase};

/// WebSocket handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(relay): State<Arc<Relay>>,
) -> Response {
    info!("New WebSocket connection attempt");
    ws.on_upgrade(move |socket| handle_socket(socket, relay))
}

/// Handle WebSocket connection
async fn handle_socket(socket: WebSocket, relay: Arc<Relay>) {
    debug!("Accepting WebSocket connection ({:?})", SessionPhase::Connecting);

    // Split the socket so the writer can run next to the reader
    let (mut sender, mut receiver) = socket.split();

    let (session_id, mut phase, mut outbox) = relay.connect().await;
    info!("WebSocket connection established with session_id: {} ({:?})", session_id, phase);

    // Drain the session's outbox into the socket
    let writer_id = session_id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = outbox.recv().await {
            if sender.send(Message::Text(frame)).await.is_err() {
                debug!("Socket for {} is closed, stopping writer", writer_id);
                break;
            }
        }
    });

    // Feed inbound text frames to the relay, one at a time
    let reader_relay = relay.clone();
    let reader_id = session_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(frame) = receiver.next().await {
            let text = match frame {
                Ok(Message::Text(text)) => text,
                Ok(Message::Close(_)) => break,
                Ok(_) => continue,
                Err(e) => {
                    debug!("Socket error for {}: {}", reader_id, e);
                    break;
                }
            };

            match reader_relay.handle_text(&reader_id, &text).await {
                Ok(next) => {
                    if next != phase {
                        debug!("Session {} moved to {:?}", reader_id, next);
                        phase = next;
                    }
                }
                Err(RelayError::UnknownSession(_)) => break,
                Err(e) => error!("Failed to process message from {}: {}", reader_id, e),
            }
        }
    });

    // Wait for either task to finish (and finish the other)
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    relay.disconnect(&session_id).await;
    info!("WebSocket connection terminated for session_id: {} ({:?})", session_id, SessionPhase::Disconnected);
}
