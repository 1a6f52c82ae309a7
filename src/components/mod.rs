//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render room chrome and interaction surfaces while reading
//! shared state from Leptos context providers.

pub mod accordion;
pub mod chat_input;
pub mod icons;
pub mod room_sections;
pub mod status_line;
pub mod ws_handler;
