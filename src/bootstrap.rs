//! One-time application mount.
//!
//! Locates the mount element, claims the one-time mount, installs browser
//! logging and panic reporting for the winning call, and renders [`Root`](crate::app::Root) into it. There is no teardown: the
//! mounted tree lives as long as the page.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::ClientConfig;
use crate::error::ClientError;

static MOUNTED: AtomicBool = AtomicBool::new(false);

/// Mark `flag` as mounted, failing if it already was. `on_first` runs only
/// for the call that wins the claim.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn claim_mount(flag: &AtomicBool, on_first: impl FnOnce()) -> Result<(), ClientError> {
    if flag.swap(true, Ordering::SeqCst) {
        return Err(ClientError::AlreadyMounted);
    }
    on_first();
    Ok(())
}

/// Mount the application into the element with id `config.root_id`.
///
/// # Errors
///
/// Returns [`ClientError::MountPointMissing`] if the element does not exist,
/// [`ClientError::AlreadyMounted`] on a second call, and
/// [`ClientError::Unavailable`] outside the browser build.
pub fn mount(config: &ClientConfig) -> Result<(), ClientError> {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;
        use wasm_bindgen::JsCast;

        use crate::app::Root;

        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&config.root_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or_else(|| ClientError::MountPointMissing(config.root_id.clone()))?;

        claim_mount(&MOUNTED, || {
            console_error_panic_hook::set_once();
            if let Err(e) = console_log::init_with_level(log::Level::Debug) {
                leptos::logging::warn!("console logger already installed: {e}");
            }
        })?;

        let config = config.clone();
        log::info!("mounting into #{}", config.root_id);
        leptos::mount::mount_to(root, move || view! { <Root config=config/> }).forget();
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, &MOUNTED);
        Err(ClientError::Unavailable)
    }
}
