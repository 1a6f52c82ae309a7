use std::cell::RefCell;

use super::*;
use crate::net::types::{CurrentUser, RoomInfo};
use crate::state::room::RoomState;

/// Broadcaster double that records every event it is handed.
#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<OutboundChatEvent>>,
    accept: bool,
}

impl Recorder {
    fn accepting() -> Self {
        Self { sent: RefCell::default(), accept: true }
    }
}

impl Broadcast for Recorder {
    fn broadcast_message(&self, event: &OutboundChatEvent) -> bool {
        self.sent.borrow_mut().push(event.clone());
        self.accept
    }
}

fn room(room_id: Option<&str>, user_id: Option<&str>) -> RoomState {
    RoomState {
        room: room_id.map(|id| RoomInfo { room_id: id.to_owned() }),
        user: user_id.map(|id| CurrentUser { id: id.to_owned(), username: "ann".to_owned() }),
        ..RoomState::default()
    }
}

fn draft(text: &str) -> ChatDraft {
    let mut draft = ChatDraft::default();
    draft.set_text(text);
    draft
}

// =============================================================
// Draft editing
// =============================================================

#[test]
fn draft_default_is_empty() {
    assert!(ChatDraft::default().is_empty());
}

#[test]
fn set_text_truncates_to_max_length() {
    let long = "x".repeat(75);
    let draft = draft(&long);
    assert_eq!(draft.text().chars().count(), MAX_MESSAGE_LEN);
}

#[test]
fn set_text_counts_utf16_units_not_bytes() {
    let long = "é".repeat(61);
    let draft = draft(&long);
    assert_eq!(draft.text().chars().count(), 60);
    assert_eq!(draft.text().len(), 120);
}

#[test]
fn set_text_counts_astral_characters_as_two_units() {
    let long = "😀".repeat(70);
    let draft = draft(&long);
    assert_eq!(draft.text().chars().count(), 30);
    assert_eq!(draft.text().encode_utf16().count(), MAX_MESSAGE_LEN);
}

#[test]
fn set_text_drops_surrogate_pair_straddling_the_limit() {
    let value = format!("{}😀", "x".repeat(MAX_MESSAGE_LEN - 1));
    let draft = draft(&value);
    assert_eq!(draft.text(), "x".repeat(MAX_MESSAGE_LEN - 1));
}

#[test]
fn set_text_keeps_short_values_verbatim() {
    assert_eq!(draft("hello there").text(), "hello there");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn valid_submit_broadcasts_once_and_clears() {
    let recorder = Recorder::accepting();
    let mut draft = draft("hi");

    let sent = draft.submit(&room(Some("r1"), Some("u1")), &recorder);

    let expected = OutboundChatEvent { room_id: "r1".to_owned(), from: "u1".to_owned(), msg: "hi".to_owned() };
    assert_eq!(sent, Some(expected.clone()));
    assert_eq!(*recorder.sent.borrow(), vec![expected]);
    assert!(draft.is_empty());
}

#[test]
fn submit_with_empty_message_is_a_noop() {
    let recorder = Recorder::accepting();
    let mut draft = ChatDraft::default();

    assert!(draft.submit(&room(Some("r1"), Some("u1")), &recorder).is_none());
    assert!(recorder.sent.borrow().is_empty());
}

#[test]
fn submit_without_room_keeps_draft() {
    let recorder = Recorder::accepting();
    let mut draft = draft("hi");

    assert!(draft.submit(&room(None, Some("u1")), &recorder).is_none());
    assert!(recorder.sent.borrow().is_empty());
    assert_eq!(draft.text(), "hi");
}

#[test]
fn submit_without_user_keeps_draft() {
    let recorder = Recorder::accepting();
    let mut draft = draft("hi");

    assert!(draft.submit(&room(Some("r1"), None), &recorder).is_none());
    assert!(recorder.sent.borrow().is_empty());
    assert_eq!(draft.text(), "hi");
}

#[test]
fn submit_treats_blank_identifiers_as_missing() {
    let recorder = Recorder::accepting();
    let mut draft = draft("hi");

    assert!(draft.submit(&room(Some(""), Some("u1")), &recorder).is_none());
    assert!(draft.submit(&room(Some("r1"), Some("")), &recorder).is_none());
    assert!(recorder.sent.borrow().is_empty());
    assert_eq!(draft.text(), "hi");
}

#[test]
fn submit_clears_even_when_socket_rejects() {
    let recorder = Recorder::default();
    let mut draft = draft("hi");

    assert!(draft.submit(&room(Some("r1"), Some("u1")), &recorder).is_some());
    assert_eq!(recorder.sent.borrow().len(), 1);
    assert!(draft.is_empty());
}

#[test]
fn whitespace_message_is_sent_as_typed() {
    let recorder = Recorder::accepting();
    let mut draft = draft("  ");

    let sent = draft.submit(&room(Some("r1"), Some("u1")), &recorder);
    assert_eq!(sent.map(|e| e.msg), Some("  ".to_owned()));
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn backspace_on_empty_draft_refocuses() {
    assert_eq!(ChatDraft::default().key_action("Backspace"), KeyAction::Refocus);
}

#[test]
fn backspace_with_text_does_nothing_special() {
    assert_eq!(draft("a").key_action("Backspace"), KeyAction::None);
}

#[test]
fn other_keys_on_empty_draft_do_nothing() {
    assert_eq!(ChatDraft::default().key_action("Enter"), KeyAction::None);
    assert_eq!(ChatDraft::default().key_action("Delete"), KeyAction::None);
}
