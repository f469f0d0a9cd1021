//! About page: the long-form bio and the hobby cards.

use dioxus::prelude::*;

use crate::components::{SectionDivider, SectionHeader};
use crate::content::{AboutFullCopy, ContentStore, HobbiesCopy, LanguageCode};
use crate::core::reveal;
use crate::hooks;

#[component]
pub fn About() -> Element {
    let store = use_context::<ContentStore>();
    let lang = use_context::<Signal<LanguageCode>>();
    let page = store.page(lang()).clone();

    #[cfg(debug_assertions)]
    println!("[content] About render (lang={})", lang());

    hooks::use_reveal(".section-divider", reveal::DIVIDER_THRESHOLD);

    rsx! {
        SectionDivider {}
        AboutFull { copy: page.about_full }
        SectionDivider {}
        Hobbies { copy: page.hobbies }
        SectionDivider {}
    }
}

#[component]
fn AboutFull(copy: AboutFullCopy) -> Element {
    hooks::use_reveal(".about-text, .about-photo", reveal::ABOUT_PAGE_THRESHOLD);

    rsx! {
        section { id: "about",
            div { class: "container about-inner",
                SectionHeader { title: copy.title, subtitle: copy.subtitle }
                div { class: "about-text",
                    for (i, paragraph) in copy.text.split('\n').enumerate() {
                        if paragraph.trim().is_empty() {
                            br { key: "{i}" }
                        } else {
                            p { key: "{i}", "{paragraph}" }
                        }
                    }
                }
                div { class: "about-photos-grid",
                    for (i, photo) in copy.photos.iter().enumerate() {
                        div { key: "{i}", class: "about-photo",
                            img { src: "{photo}", alt: "Portrait {i + 1}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Hobbies(copy: HobbiesCopy) -> Element {
    rsx! {
        section { class: "hobbies-section",
            div { class: "container",
                SectionHeader { title: copy.title, subtitle: copy.subtitle }
                div { class: "hobbies-grid",
                    for (i, hobby) in copy.items.iter().enumerate() {
                        div { key: "{i}", class: "hobby-card",
                            span { class: "hobby-card__icon", aria_hidden: "true", "{hobby.icon}" }
                            h3 { "{hobby.title}" }
                            p { "{hobby.desc}" }
                        }
                    }
                }
            }
        }
    }
}
