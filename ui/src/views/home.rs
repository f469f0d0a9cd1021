//! Landing page: intro, about teaser, hero carousel, projects, contact.

use dioxus::prelude::*;

use crate::components::{HeroCarousel, SectionDivider, SectionHeader};
use crate::content::{
    AboutCopy, ContactCopy, ContentStore, IntroCopy, LanguageCode, ProjectsCopy,
};
use crate::core::reveal;
use crate::hooks;

#[component]
pub fn Home() -> Element {
    let store = use_context::<ContentStore>();
    let lang = use_context::<Signal<LanguageCode>>();
    let page = store.page(lang()).clone();

    #[cfg(debug_assertions)]
    println!("[content] Home render (lang={})", lang());

    hooks::use_reveal(".section-divider", reveal::DIVIDER_THRESHOLD);

    rsx! {
        Intro { copy: page.intro }
        SectionDivider {}
        AboutTeaser { copy: page.about }
        SectionDivider {}
        HeroCarousel { slides: page.hero.slides, cta: page.hero.cta }
        SectionDivider {}
        Projects { copy: page.projects }
        SectionDivider {}
        Contact { copy: page.contact }
    }
}

#[component]
fn Intro(copy: IntroCopy) -> Element {
    rsx! {
        section { id: "intro", class: "intro-section",
            div { class: "container intro-content",
                h1 { "{copy.title}" }
                p { "{copy.subtitle}" }
                a { href: "#about",
                    button { class: "btn intro-btn", "{copy.button}" }
                }
            }
        }
    }
}

#[component]
fn AboutTeaser(copy: AboutCopy) -> Element {
    hooks::use_reveal(".about-text, .about-photo", reveal::SECTION_THRESHOLD);

    rsx! {
        section { id: "about",
            div { class: "container about-inner",
                SectionHeader { title: copy.title, subtitle: copy.subtitle }
                div { class: "about-content",
                    div { class: "about-text",
                        p { "{copy.text}" }
                        a { href: "/about",
                            button { class: "btn", "{copy.button}" }
                        }
                    }
                    div { class: "about-photos",
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
}

#[component]
fn Projects(copy: ProjectsCopy) -> Element {
    hooks::use_reveal(".card", reveal::SECTION_THRESHOLD);

    rsx! {
        section { id: "projects",
            div { class: "container",
                SectionHeader { title: copy.title, subtitle: copy.subtitle }
                div { class: "projects-grid",
                    for (i, project) in copy.items.iter().enumerate() {
                        div { key: "{i}", class: "card",
                            a { href: "{project.link}",
                                img { class: "card-img", src: "{project.img}", alt: "{project.title}" }
                            }
                            h3 { "{project.title}" }
                            p { "{project.desc}" }
                            a { href: "{project.link}",
                                button { class: "btn", "{copy.button}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact(copy: ContactCopy) -> Element {
    rsx! {
        section { id: "contact",
            div { class: "container contact-inner",
                SectionHeader { title: copy.title, subtitle: copy.subtitle }
                p { "{copy.text}" }
                div { class: "socials",
                    for (i, link) in copy.links.iter().enumerate() {
                        a {
                            key: "{i}",
                            class: "social-icon",
                            href: "{link.href}",
                            aria_label: "{link.label}",
                            "{link.icon}"
                        }
                    }
                }
            }
        }
    }
}
