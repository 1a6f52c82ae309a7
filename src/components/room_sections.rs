//! Accordion sections describing the current room.

#[cfg(test)]
#[path = "room_sections_test.rs"]
mod room_sections_test;

use leptos::prelude::*;

use crate::components::accordion::Section;
use crate::net::types::ROOM_LIMIT;
use crate::state::room::RoomState;

/// "3/10 members" style occupancy label.
pub fn occupancy_label(count: usize) -> String {
    let noun = if count == 1 { "member" } else { "members" };
    format!("{count}/{ROOM_LIMIT} {noun}")
}

/// Build the "Room" and "People" sections for the room page.
pub fn room_sections(room: RwSignal<RoomState>) -> Vec<Section> {
    let room_id = move || {
        room.with(|r| r.room.as_ref().map(|info| info.room_id.clone()).unwrap_or_default())
    };
    let occupancy = move || room.with(|r| occupancy_label(r.users.len()));

    vec![
        Section::new("Room", move || {
            view! {
                <dl class="room-details">
                    <dt>"Room id"</dt>
                    <dd class="room-details__id">{room_id}</dd>
                    <dt>"Occupancy"</dt>
                    <dd>{occupancy}</dd>
                </dl>
            }
        }),
        Section::new("People", move || {
            view! {
                <ul class="room-people">
                    {move || {
                        let self_id = room.with(|r| r.user.as_ref().map(|u| u.id.clone()));
                        room.with(|r| {
                            r.users
                                .iter()
                                .map(|u| {
                                    let is_self = self_id.as_deref() == Some(u.user_id.as_str());
                                    let name = u.user_name.clone();
                                    view! {
                                        <li class="room-people__item" class:room-people__item--self=is_self>
                                            {name}
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
            }
        }),
    ]
}
