//! Single-line chat composer that broadcasts to the current room.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use leptos::prelude::*;

use crate::components::icons::SendHorizontalIcon;
use crate::net::types::OutboundChatEvent;
use crate::net::ws_client::WsSender;
use crate::state::chat::{ChatDraft, KeyAction, MAX_MESSAGE_LEN};
use crate::state::room::RoomState;

/// Submit `draft` against the shared room and socket without cloning either.
pub fn submit_draft(
    draft: RwSignal<ChatDraft>,
    room: RwSignal<RoomState>,
    sender: RwSignal<WsSender>,
) -> Option<OutboundChatEvent> {
    room.with_untracked(|r| sender.with_untracked(|s| draft.try_update(|d| d.submit(r, s)).flatten()))
}

/// Chat input with a submit button.
///
/// Submitting without a room, a user, or any text does nothing.
#[component]
pub fn ChatInput() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let sender = expect_context::<RwSignal<WsSender>>();

    let draft = RwSignal::new(ChatDraft::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_draft(draft, room, sender);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if draft.with_untracked(|d| d.key_action(&ev.key())) == KeyAction::Refocus {
            #[cfg(feature = "csr")]
            {
                if let Some(Err(e)) = input_ref.get_untracked().map(|el| el.focus()) {
                    leptos::logging::warn!("chat input focus failed: {e:?}");
                }
            }
        }
    };

    view! {
        <div class="chat-input">
            <form on:submit=on_submit>
                <div class="chat-input__row">
                    <input
                        type="text"
                        class="chat-input__field"
                        data-testid="chat-input"
                        node_ref=input_ref
                        autofocus=true
                        placeholder="Type your message..."
                        maxlength=MAX_MESSAGE_LEN.to_string()
                        prop:value=move || draft.with(|d| d.text().to_owned())
                        on:input=move |ev| draft.update(|d| d.set_text(&event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    <button type="submit" class="chat-input__send" data-testid="chat-submit-btn">
                        <SendHorizontalIcon class="w-6 h-6"/>
                    </button>
                </div>
            </form>
        </div>
    }
}
