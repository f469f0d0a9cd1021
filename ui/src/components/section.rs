//! Small shared section furniture.

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{title}" }
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}

/// Decorative divider between adjacent sections; fades in with the shared
/// reveal observer.
#[component]
pub fn SectionDivider() -> Element {
    rsx! {
        div { class: "section-divider" }
    }
}
