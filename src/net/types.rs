//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Room service payloads use Go-style `PascalCase` field names; the realtime
//! chat envelope uses `camelCase`. The serde attributes below pin both so the
//! Rust field names can stay idiomatic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Maximum number of members the room service admits into one room.
pub const ROOM_LIMIT: usize = 10;

/// Event name used for outbound chat envelopes.
pub const BROADCAST_MESSAGE_EVENT: &str = "broadcastMessage";

/// Identity of the room the user currently occupies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    #[serde(rename = "RoomId")]
    pub room_id: String,
}

/// Grid cell occupied by a room member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// A room member as reported by the room service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "RoomID", default)]
    pub room_id: String,
    #[serde(rename = "Position", default)]
    pub position: Position,
    /// Facing direction; kept opaque because only the scene renderer reads it.
    #[serde(rename = "Direction", default)]
    pub direction: serde_json::Value,
}

/// The authenticated user behind the session cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

/// Body of `POST /room/new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewRoomRequest {
    pub user_name: String,
    pub room_name: String,
}

/// Response of `POST /room/new`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRoomResponse {
    #[serde(rename = "RoomId")]
    pub room_id: String,
    #[serde(rename = "Users", default)]
    pub users: Vec<User>,
}

/// Body of `POST /room/join`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    #[serde(rename = "RoomId")]
    pub room_id: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
}

/// Response of `POST /room/join`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinRoomResponse {
    #[serde(rename = "Users", default)]
    pub users: Vec<User>,
}

/// A chat message handed to the broadcaster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundChatEvent {
    pub room_id: String,
    pub from: String,
    pub msg: String,
}

/// Envelope wrapping every realtime message sent over the socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WsEnvelope<T> {
    pub event: String,
    pub data: T,
}

impl WsEnvelope<OutboundChatEvent> {
    /// Wrap a chat message in a `broadcastMessage` envelope.
    pub fn broadcast(event: OutboundChatEvent) -> Self {
        Self { event: BROADCAST_MESSAGE_EVENT.to_owned(), data: event }
    }
}
