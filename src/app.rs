//! Root component tree: context providers, the socket owner, and routing.
//!
//! DESIGN
//! ======
//! The tree mirrors the provider layering of the page:
//!
//! ```text
//! Root
//! └── StateProvider          room / connection / socket-sender signals
//!     ├── WsHandler          socket lifecycle, renders nothing
//!     └── ApiProvider        REST client
//!         └── App            meta tags + router
//! ```

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::ws_handler::WsHandler;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::ws_client::WsSender;
use crate::pages::{lobby::LobbyPage, room::RoomPage};
use crate::state::connection::ConnectionStatus;
use crate::state::room::RoomState;

/// Top of the mounted tree.
#[component]
pub fn Root(config: ClientConfig) -> impl IntoView {
    let api = ApiClient::new(config.clone());
    provide_context(config);

    view! {
        <StateProvider>
            <WsHandler/>
            <ApiProvider client=api>
                <App/>
            </ApiProvider>
        </StateProvider>
    }
}

/// Provides the shared state signals to every descendant.
#[component]
pub fn StateProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(RoomState::default()));
    provide_context(RwSignal::new(ConnectionStatus::default()));
    provide_context(RwSignal::new(WsSender::default()));

    children()
}

/// Provides the REST client to every descendant.
#[component]
pub fn ApiProvider(client: ApiClient, children: Children) -> impl IntoView {
    provide_context(client);

    children()
}

/// Main application: document title and client-side routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Rooms"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LobbyPage/>
                    <Route path=(StaticSegment("room"), ParamSegment("id")) view=RoomPage/>
                </Routes>
            </main>
        </Router>
    }
}
