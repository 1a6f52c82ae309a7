//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Network and bootstrap failures surface as [`ClientError`] values so pages
//! can render their `Display` text inline. Chat submit validation is not an
//! error: an incomplete submit is silently ignored by the chat draft.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Marker the room service returns when a room has reached capacity.
const ROOM_FULL_MARKER: &str = "error_room_full";

/// Errors produced by the bootstrap, REST client, and WebSocket handler.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The host document has no element with the configured mount id.
    #[error("mount point `#{0}` not found")]
    MountPointMissing(String),
    /// [`crate::bootstrap::mount`] was called more than once.
    #[error("application is already mounted")]
    AlreadyMounted,
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The room has reached its member limit.
    #[error("room is full")]
    RoomFull,
    /// A response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// An outbound payload could not be serialized.
    #[error("failed to encode payload: {0}")]
    Encode(String),
    /// The WebSocket could not be opened or failed mid-session.
    #[error("websocket error: {0}")]
    WebSocket(String),
    /// Browser-only functionality was invoked outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ClientError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        if body.contains(ROOM_FULL_MARKER) {
            return Self::RoomFull;
        }

        let message = body.trim();
        let message = if message.is_empty() { "no response body" } else { message };
        Self::Status { status, message: message.to_owned() }
    }
}
