//! Collapsible accordion with a single expanded slot.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use leptos::prelude::*;

use crate::components::icons::ChevronIcon;
use crate::state::accordion::Expansion;

/// One labeled panel of an [`Accordion`].
#[derive(Clone)]
pub struct Section {
    pub title: String,
    pub content: ViewFn,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self { title: title.into(), content: content.into() }
    }
}

/// DOM id of the header wrapping section `idx`.
pub fn heading_id(idx: usize) -> String {
    format!("accordion-collapse-heading-{idx}")
}

/// DOM id of the body of section `idx`.
pub fn body_id(idx: usize) -> String {
    format!("accordion-collapse-body-{idx}")
}

/// One header + body view per section, in order. Empty input yields no panels.
pub fn section_panels(sections: Vec<Section>, expansion: RwSignal<Expansion>) -> Vec<AnyView> {
    sections
        .into_iter()
        .enumerate()
        .map(|(idx, Section { title, content })| {
            let is_open = move || expansion.get().is_open(idx);
            let on_click = move |_| expansion.update(|e| e.toggle(idx));

            view! {
                <div>
                    <h2 id=heading_id(idx)>
                        <button
                            type="button"
                            class="accordion__header"
                            data-accordion-target=format!("#{}", body_id(idx))
                            aria-expanded=move || is_open().to_string()
                            aria-controls=body_id(idx)
                            on:click=on_click
                        >
                            <span>{title}</span>
                            <ChevronIcon open=Signal::derive(is_open)/>
                        </button>
                    </h2>
                    <div id=body_id(idx) class:hidden=move || !is_open() aria-labelledby=heading_id(idx)>
                        <div class="accordion__body">{content.run()}</div>
                    </div>
                </div>
            }
            .into_any()
        })
        .collect()
}

/// Accordion rendering one header + body per section, in order.
///
/// Expansion state is local to the component and resets on remount.
#[component]
pub fn Accordion(#[prop(optional)] sections: Vec<Section>) -> impl IntoView {
    let expansion = RwSignal::new(Expansion::default());
    let panels = section_panels(sections, expansion);

    view! {
        <div id="accordion-collapse" data-accordion="collapse">
            {panels}
        </div>
    }
}
