//! Route-level page components.

pub mod lobby;
pub mod room;
