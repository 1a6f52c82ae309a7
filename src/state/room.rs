#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use crate::net::types::{CurrentUser, RoomInfo, User};

/// Read-only view of the session's room membership.
///
/// Chat composition reads through this trait instead of a global store so it
/// can be exercised with plain test fixtures.
pub trait RoomContext {
    /// Room the user currently occupies.
    fn room_info(&self) -> Option<&RoomInfo>;
    /// Identifier of the signed-in user.
    fn user_id(&self) -> Option<&str>;
}

/// Room membership for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomState {
    pub room: Option<RoomInfo>,
    pub user: Option<CurrentUser>,
    pub users: Vec<User>,
    /// `true` while the current user is being fetched.
    pub loading: bool,
}

impl RoomState {
    /// Record a successful create/join and the members reported with it.
    pub fn enter(&mut self, room_id: String, users: Vec<User>) {
        self.room = Some(RoomInfo { room_id });
        self.users = users;
    }

    /// Forget the current room, keeping the signed-in user.
    pub fn leave(&mut self) {
        self.room = None;
        self.users.clear();
    }

    /// Whether the session currently sits in `room_id`.
    pub fn is_in_room(&self, room_id: &str) -> bool {
        self.room.as_ref().is_some_and(|r| r.room_id == room_id)
    }

    /// Display name of the signed-in user.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

impl RoomContext for RoomState {
    fn room_info(&self) -> Option<&RoomInfo> {
        self.room.as_ref()
    }

    fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}
