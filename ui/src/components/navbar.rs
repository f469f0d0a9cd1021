//! Site navbar: hide-on-scroll-down, burger overlay for small screens, and
//! the language selector.

use dioxus::events::FormEvent;
use dioxus::prelude::*;

use crate::content::{ContentStore, LanguageCode};
use crate::core::scroll::ScrollState;
use crate::hooks;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let store = use_context::<ContentStore>();
    let mut lang = use_context::<Signal<LanguageCode>>();

    // Scroll state lives with this instance; the listener detaches when the
    // navbar unmounts, so remounts never stack handlers.
    let mut scroll = use_signal(ScrollState::default);
    let on_scroll = use_callback(move |y: f64| scroll.with_mut(|state| state.observe(y)));
    hooks::use_window_scroll(on_scroll);

    let mut menu_open = use_signal(|| false);

    let labels = store.page(lang()).nav.clone();
    let languages: Vec<LanguageCode> = store.languages().collect();

    let select_language = move |event: FormEvent| {
        // Unknown option values are ignored rather than surfaced.
        if let Ok(code) = event.value().parse::<LanguageCode>() {
            #[cfg(debug_assertions)]
            println!("[content] language -> {code}");
            lang.set(code);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            class: "navbar",
            class: if scroll().hidden() { "navbar--hidden" },
            h1 { class: "navbar__brand", "{labels.brand}" }
            div { class: "navbar__right",
                div { class: "navbar__links",
                    a { href: "/#intro", "{labels.intro}" }
                    a { href: "/about", "{labels.about}" }
                    a { href: "/#projects", "{labels.projects}" }
                    a { href: "/#contact", "{labels.contact}" }
                }
                select {
                    class: "navbar__lang",
                    aria_label: "Language",
                    value: "{lang()}",
                    onchange: select_language,
                    for code in languages.clone() {
                        option { key: "{code}", value: "{code}", "{code.label()}" }
                    }
                }
                button {
                    class: "navbar__burger",
                    aria_label: "Menu",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
        }

        div {
            class: "burger-menu",
            class: if menu_open() { "burger-menu--open" },
            a { href: "/#intro", onclick: move |_| menu_open.set(false), "{labels.intro}" }
            a { href: "/about", onclick: move |_| menu_open.set(false), "{labels.about}" }
            a { href: "/#projects", onclick: move |_| menu_open.set(false), "{labels.projects}" }
            a { href: "/#contact", onclick: move |_| menu_open.set(false), "{labels.contact}" }
            select {
                class: "burger-menu__lang",
                aria_label: "Language",
                value: "{lang()}",
                onchange: select_language,
                for code in languages {
                    option { key: "{code}", value: "{code}", "{code.label()}" }
                }
            }
        }
    }
}
