//! Networking modules for HTTP + realtime WebSocket traffic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the room service, `ws_client` owns the socket
//! lifecycle and outbound queue, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
pub mod ws_client;
