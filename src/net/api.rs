//! REST client for the room service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call returns [`ClientError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; non-success responses are
//! classified by [`ClientError::from_status`] so pages can special-case a full
//! room.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;
use crate::error::ClientError;

use super::types::{CurrentUser, JoinRoomRequest, JoinRoomResponse, NewRoomRequest, NewRoomResponse};

const CURRENT_USER_PATH: &str = "/auth/me";
const NEW_ROOM_PATH: &str = "/room/new";
const JOIN_ROOM_PATH: &str = "/room/join";

/// Data-fetching client shared with the page tree through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Absolute URL for a REST path.
    pub fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Fetch the user behind the session cookie.
    ///
    /// # Errors
    ///
    /// Fails if the session is missing or the request cannot be made.
    pub async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        self.get_json(CURRENT_USER_PATH).await
    }

    /// Create a room and enter it.
    ///
    /// # Errors
    ///
    /// Fails on transport, status, or decode errors.
    pub async fn new_room(&self, request: &NewRoomRequest) -> Result<NewRoomResponse, ClientError> {
        self.post_json(NEW_ROOM_PATH, request).await
    }

    /// Join an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RoomFull`] when the room is at capacity.
    pub async fn join_room(&self, request: &JoinRoomRequest) -> Result<JoinRoomResponse, ClientError> {
        self.post_json(JOIN_ROOM_PATH, request).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ClientError::Unavailable)
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .json(body)
                .map_err(|e| ClientError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ClientError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn read_json<T>(resp: gloo_net::http::Response) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::from_status(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| ClientError::Decode(e.to_string()))
}
