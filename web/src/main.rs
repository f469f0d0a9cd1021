use dioxus::prelude::*;

use ui::components::Navbar;
use ui::content::{self, ContentStore};
use ui::views::{About, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One fetch for the page lifetime. There is no retry: a failed load
    // keeps the placeholder up and a reload is the retry affordance.
    let store = use_resource(|| async move { content::load().await });

    let body = match &*store.read() {
        Some(Ok(store)) => rsx! {
            Site { store: store.clone() }
        },
        Some(Err(err)) => {
            eprintln!("[content] load failed, staying on the placeholder: {err}");
            rsx! {
                Loading {}
            }
        }
        None => rsx! {
            Loading {}
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}

/// Mounted once the content store resolves; everything below it can assume
/// loaded, immutable content.
#[component]
fn Site(store: ContentStore) -> Element {
    use_context_provider(|| store.clone());
    use_context_provider(|| Signal::new(content::DEFAULT_LANGUAGE));

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}

#[component]
fn Loading() -> Element {
    rsx! {
        p { class: "loading", "Loading..." }
    }
}
