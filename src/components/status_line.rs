//! Connection indicator shown above the chat input.

use leptos::prelude::*;

use crate::state::connection::ConnectionStatus;

/// Dot + label reflecting the realtime socket status.
#[component]
pub fn StatusLine() -> impl IntoView {
    let status = expect_context::<RwSignal<ConnectionStatus>>();

    let status_class = move || match status.get() {
        ConnectionStatus::Connected => "status-line__dot status-line__dot--connected",
        ConnectionStatus::Connecting => "status-line__dot status-line__dot--connecting",
        ConnectionStatus::Disconnected => "status-line__dot status-line__dot--disconnected",
    };

    view! {
        <div class="status-line">
            <span class=status_class></span>
            <span class="status-line__label">{move || status.get().label()}</span>
        </div>
    }
}
