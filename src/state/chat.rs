#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::OutboundChatEvent;
use crate::net::ws_client::Broadcast;
use crate::state::room::RoomContext;

/// Longest message the chat input accepts, in UTF-16 code units (the unit
/// the input's `maxlength` counts).
pub const MAX_MESSAGE_LEN: usize = 60;

/// Key that refocuses the input when pressed on an empty draft.
const REFOCUS_KEY: &str = "Backspace";

/// What the chat input should do in response to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Refocus,
}

/// The message currently being composed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatDraft {
    text: String,
}

impl ChatDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the draft, truncating to [`MAX_MESSAGE_LEN`] UTF-16 code units.
    ///
    /// Truncation stops on a character boundary, so a surrogate pair that
    /// would straddle the limit is dropped whole.
    pub fn set_text(&mut self, value: &str) {
        let mut units = 0;
        self.text = value
            .chars()
            .take_while(|c| {
                units += c.len_utf16();
                units <= MAX_MESSAGE_LEN
            })
            .collect();
    }

    /// Build the outbound event, or `None` if room, user, or text is missing.
    pub fn outbound<R>(&self, room: &R) -> Option<OutboundChatEvent>
    where
        R: RoomContext + ?Sized,
    {
        let room_id = room.room_info().map(|r| r.room_id.as_str()).filter(|id| !id.is_empty())?;
        let from = room.user_id().filter(|id| !id.is_empty())?;
        if self.is_empty() {
            return None;
        }

        Some(OutboundChatEvent {
            room_id: room_id.to_owned(),
            from: from.to_owned(),
            msg: self.text.clone(),
        })
    }

    /// Send the draft and clear it.
    ///
    /// An incomplete draft is left untouched and nothing is sent. Delivery is
    /// fire-and-forget: a send the broadcaster cannot accept is logged and the
    /// draft is still cleared.
    pub fn submit<R, B>(&mut self, room: &R, broadcaster: &B) -> Option<OutboundChatEvent>
    where
        R: RoomContext + ?Sized,
        B: Broadcast + ?Sized,
    {
        let event = self.outbound(room)?;
        if !broadcaster.broadcast_message(&event) {
            leptos::logging::warn!("chat message for room {} was not handed to the socket", event.room_id);
        }
        self.text.clear();
        Some(event)
    }

    /// Decide how to react to `key` given the current draft.
    pub fn key_action(&self, key: &str) -> KeyAction {
        if self.is_empty() && key == REFOCUS_KEY {
            KeyAction::Refocus
        } else {
            KeyAction::None
        }
    }
}
