//! Lobby page: create a new room or join an existing one.

#[cfg(test)]
#[path = "lobby_test.rs"]
mod lobby_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::{JoinRoomRequest, NewRoomRequest};
use crate::state::room::RoomState;

/// Client route for a room.
pub fn room_path(room_id: &str) -> String {
    format!("/room/{room_id}")
}

/// Trimmed form input, or `None` if nothing was typed.
pub fn form_value(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Lobby with create-room and join-room forms.
///
/// Loads the signed-in user on mount; both forms need a user name.
#[component]
pub fn LobbyPage() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let room_name = RwSignal::new(String::new());
    let join_id = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Fetch the current user once per page load.
    {
        let api = api.clone();
        Effect::new(move || {
            if room.with_untracked(|r| r.user.is_some() || r.loading) {
                return;
            }
            room.update(|r| r.loading = true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.current_user().await {
                    Ok(user) => room.update(|r| {
                        r.user = Some(user);
                        r.loading = false;
                    }),
                    Err(e) => {
                        leptos::logging::warn!("current user fetch failed: {e}");
                        room.update(|r| r.loading = false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        });
    }

    let on_create = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(requested_name) = form_value(&room_name.get_untracked()) else {
                return;
            };
            let Some(user_name) = room.with_untracked(|r| r.user_name().map(ToOwned::to_owned)) else {
                error.set(Some("Sign in before creating a room.".to_owned()));
                return;
            };

            pending.set(true);
            error.set(None);
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = NewRoomRequest { user_name, room_name: requested_name };
                match api.new_room(&request).await {
                    Ok(resp) => {
                        let path = room_path(&resp.room_id);
                        room.update(|r| r.enter(resp.room_id, resp.users));
                        navigate(&path, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("room create failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                pending.set(false);
            });
        }
    };

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(room_id) = form_value(&join_id.get_untracked()) else {
            return;
        };
        let Some(user_name) = room.with_untracked(|r| r.user_name().map(ToOwned::to_owned)) else {
            error.set(Some("Sign in before joining a room.".to_owned()));
            return;
        };

        pending.set(true);
        error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = JoinRoomRequest { room_id: room_id.clone(), user_name };
            match api.join_room(&request).await {
                Ok(resp) => {
                    let path = room_path(&room_id);
                    room.update(|r| r.enter(room_id, resp.users));
                    navigate(&path, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("room join failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    };

    let greeting = move || {
        room.with(|r| match r.user_name() {
            Some(name) => format!("Signed in as {name}"),
            None if r.loading => "Loading...".to_owned(),
            None => "Not signed in".to_owned(),
        })
    };

    view! {
        <div class="lobby-page">
            <header class="lobby-page__header">
                <h1>"Rooms"</h1>
                <span class="lobby-page__user">{greeting}</span>
            </header>

            <form class="lobby-page__form" on:submit=on_create>
                <input
                    type="text"
                    class="lobby-page__input"
                    placeholder="Room name"
                    prop:value=move || room_name.get()
                    on:input=move |ev| room_name.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    "Create room"
                </button>
            </form>

            <form class="lobby-page__form" on:submit=on_join>
                <input
                    type="text"
                    class="lobby-page__input"
                    placeholder="Room id"
                    prop:value=move || join_id.get()
                    on:input=move |ev| join_id.set(event_target_value(&ev))
                />
                <button type="submit" class="btn" disabled=move || pending.get()>
                    "Join room"
                </button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class="lobby-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
