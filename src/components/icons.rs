//! SVG icon components.
//!
//! Icons are rendered inline so they inherit `currentColor` from the
//! surrounding text.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

/// Class list for the accordion chevron: points up when open, down when closed.
pub fn chevron_class(open: bool) -> &'static str {
    if open { "w-3 h-3 shrink-0" } else { "w-3 h-3 rotate-180 shrink-0" }
}

/// Chevron drawn in accordion headers.
#[component]
pub fn ChevronIcon(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    let class = move || chevron_class(open.get());

    view! {
        <svg
            data-accordion-icon=""
            class=class
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 10 6"
        >
            <path
                stroke="currentColor"
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M9 5 5 1 1 5"
            />
        </svg>
    }
}

/// Horizontal paper-plane icon for the chat submit button.
#[component]
pub fn SendHorizontalIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            <path d="m3 3 3 9-3 9 19-9Z"/>
            <path d="M6 12h16"/>
        </svg>
    }
}
