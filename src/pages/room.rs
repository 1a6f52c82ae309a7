//! Room page: room details accordion plus the chat composer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::accordion::Accordion;
use crate::components::chat_input::ChatInput;
use crate::components::room_sections::room_sections;
use crate::components::status_line::StatusLine;
use crate::state::room::RoomState;

/// Room page. Reads the room id from the route and only renders the room
/// when the session has actually entered it.
#[component]
pub fn RoomPage() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let params = use_params_map();

    let route_id = move || params.read().get("id").unwrap_or_default();
    let joined = move || {
        let id = route_id();
        room.with(|r| r.is_in_room(&id))
    };

    let on_leave = move |_| room.update(RoomState::leave);

    view! {
        <div class="room-page">
            <Show
                when=joined
                fallback=|| {
                    view! {
                        <div class="room-page__missing">
                            <p>"You are not in this room."</p>
                            <A href="/">"Back to lobby"</A>
                        </div>
                    }
                }
            >
                <aside class="room-page__sidebar">
                    <Accordion sections=room_sections(room)/>
                </aside>
                <section class="room-page__chat">
                    <StatusLine/>
                    <ChatInput/>
                </section>
                <button class="btn room-page__leave" on:click=on_leave>
                    "Leave room"
                </button>
            </Show>
        </div>
    }
}
