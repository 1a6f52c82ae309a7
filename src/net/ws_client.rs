//! Realtime WebSocket client.
//!
//! One socket is opened per page load. Outbound messages go through an
//! unbounded channel whose sending half ([`WsSender`]) is shared via context;
//! a local task drains it into the socket. Inbound frames are logged only.
//! There is no reconnect: once the socket closes, sends report `false`.
//!
//! All socket I/O is gated behind `#[cfg(feature = "csr")]` since it requires
//! a browser environment.

#[cfg(test)]
#[path = "ws_client_test.rs"]
mod ws_client_test;

use crate::error::ClientError;
use crate::net::types::{OutboundChatEvent, WsEnvelope};
#[cfg(feature = "csr")]
use crate::state::connection::ConnectionStatus;

/// Sink for outbound chat messages.
pub trait Broadcast {
    /// Hand `event` to the transport. Returns `false` if it was not accepted.
    fn broadcast_message(&self, event: &OutboundChatEvent) -> bool;
}

/// Sending half of the socket's outbound queue.
///
/// The default value has no socket behind it and rejects every send.
#[derive(Clone, Debug, Default)]
pub struct WsSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl WsSender {
    #[cfg(feature = "csr")]
    fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Whether the outbound queue is still being drained.
    pub fn is_open(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    /// Queue a raw text frame. Returns `false` if no socket is attached.
    pub fn send_text(&self, text: String) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(text).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            false
        }
    }
}

impl Broadcast for WsSender {
    fn broadcast_message(&self, event: &OutboundChatEvent) -> bool {
        if !self.is_open() {
            leptos::logging::warn!("socket closed; dropping chat message for room {}", event.room_id);
            return false;
        }
        match encode_broadcast(event) {
            Ok(text) => self.send_text(text),
            Err(e) => {
                leptos::logging::warn!("{e}");
                false
            }
        }
    }
}

/// Serialize a chat message into its `broadcastMessage` envelope.
///
/// # Errors
///
/// Returns [`ClientError::Encode`] if serialization fails.
pub fn encode_broadcast(event: &OutboundChatEvent) -> Result<String, ClientError> {
    serde_json::to_string(&WsEnvelope::broadcast(event.clone())).map_err(|e| ClientError::Encode(e.to_string()))
}

/// Open the socket at `url` on a local task and return its sender.
#[cfg(feature = "csr")]
pub fn spawn_ws_client(url: String, status: leptos::prelude::RwSignal<ConnectionStatus>) -> WsSender {
    use leptos::prelude::Set;

    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();

    leptos::task::spawn_local(async move {
        status.set(ConnectionStatus::Connecting);
        match run_socket(&url, status, rx).await {
            Ok(()) => leptos::logging::log!("WS disconnected"),
            Err(e) => leptos::logging::warn!("{e}"),
        }
        status.set(ConnectionStatus::Disconnected);
    });

    WsSender::new(tx)
}

/// Pump the outbound queue into the socket and log inbound frames until
/// either side closes.
#[cfg(feature = "csr")]
async fn run_socket(
    url: &str,
    status: leptos::prelude::RwSignal<ConnectionStatus>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Set;

    let ws = WebSocket::open(url).map_err(|e| ClientError::WebSocket(e.to_string()))?;
    let (mut ws_write, mut ws_read) = ws.split();

    status.set(ConnectionStatus::Connected);

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => log::debug!("WS recv: {text}"),
                Ok(Message::Bytes(bytes)) => log::debug!("WS recv: {} bytes", bytes.len()),
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
