//! Always-mounted, invisible owner of the realtime socket.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::ws_client::WsSender;
use crate::state::connection::ConnectionStatus;

/// Opens the WebSocket once on mount and publishes its sender into the
/// shared `RwSignal<WsSender>` context. Renders nothing.
#[component]
pub fn WsHandler() -> impl IntoView {
    let sender = expect_context::<RwSignal<WsSender>>();
    let status = expect_context::<RwSignal<ConnectionStatus>>();
    let config = expect_context::<ClientConfig>();

    #[cfg(feature = "csr")]
    {
        leptos::logging::log!("WS connecting to {}", config.ws_url);
        sender.set(crate::net::ws_client::spawn_ws_client(config.ws_url, status));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (sender, status, config);
    }
}
