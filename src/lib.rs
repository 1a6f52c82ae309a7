//! # roomchat-client
//!
//! Leptos + WASM frontend for the room chat application.
//!
//! This crate contains the page tree, reusable components (accordion, chat
//! input), shared room state, the REST client, and the WebSocket handler.
//! [`bootstrap::mount`] wires them together into the host document's
//! `#root` element.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: mount the application as soon as the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = bootstrap::mount(&config::ClientConfig::detect()) {
        leptos::logging::error!("mount failed: {e}");
    }
}
