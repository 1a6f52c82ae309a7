//! Client configuration derived from the hosting page.
//!
//! The client ships as a static bundle served by the room service, so the
//! WebSocket endpoint is derived from `window.location` rather than baked in.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the element the application mounts into.
pub const DEFAULT_ROOT_ID: &str = "root";

/// Path prefix for REST endpoints.
pub const DEFAULT_API_BASE: &str = "/api";

/// Path of the realtime WebSocket endpoint.
pub const WS_PATH: &str = "/ws";

const FALLBACK_HOST: &str = "localhost:3000";

/// Runtime configuration for the bootstrap, REST client, and WebSocket handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Id of the mount element in the host document.
    pub root_id: String,
    /// Prefix prepended to every REST path.
    pub api_base: String,
    /// Absolute WebSocket URL.
    pub ws_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_location("http://", FALLBACK_HOST)
    }
}

impl ClientConfig {
    /// Build a config for a page served from `href` on `host`.
    ///
    /// Pages served over https get a `wss` socket; everything else gets `ws`.
    pub fn from_location(href: &str, host: &str) -> Self {
        let ws_proto = if href.starts_with("https") { "wss" } else { "ws" };
        let host = if host.is_empty() { FALLBACK_HOST } else { host };
        Self {
            root_id: DEFAULT_ROOT_ID.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            ws_url: format!("{ws_proto}://{host}{WS_PATH}"),
        }
    }

    /// Read the current page location from the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            let location = web_sys::window().map(|w| w.location());
            let href = location.as_ref().and_then(|l| l.href().ok()).unwrap_or_default();
            let host = location.as_ref().and_then(|l| l.host().ok()).unwrap_or_default();
            Self::from_location(&href, &host)
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Join a REST path onto the configured API base.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
