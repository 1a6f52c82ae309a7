//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`room`, `chat`, `accordion`, `connection`) so
//! components depend on small focused models. Everything here is plain data;
//! components wrap it in `RwSignal`s and pages provide it through context.

pub mod accordion;
pub mod chat;
pub mod connection;
pub mod room;
