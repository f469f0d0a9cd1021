//! Hero carousel: auto-advancing slides with arrow and dot overrides.

use dioxus::prelude::*;

use crate::content::HeroSlide;
use crate::core::carousel::CarouselState;
use crate::hooks;

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");

#[component]
pub fn HeroCarousel(slides: ReadOnlySignal<Vec<HeroSlide>>, cta: String) -> Element {
    let mut state = use_signal(CarouselState::default);
    let slide_count = use_memo(move || slides.read().len());

    // The autoplay future restarts only when the slide count changes and is
    // cancelled on unmount. Arrow and dot presses deliberately leave it
    // running: manual and automatic advancement compose, last write wins.
    let on_advance = use_callback(move |count: usize| state.with_mut(|s| s.advance(count)));
    hooks::use_autoplay(slide_count, on_advance);

    let slide_list = slides.read().clone();
    if slide_list.is_empty() {
        return rsx! {};
    }

    let current = state().index();

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }

        section { id: "home", class: "carousel",
            for (i, slide) in slide_list.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "carousel__slide",
                    class: if i == current { "carousel__slide--active" },
                    img { src: "{slide.img}", alt: "{slide.title}" }
                    div { class: "carousel__overlay",
                        div { class: "carousel__content",
                            h1 { "{slide.title}" }
                            p { "{slide.desc}" }
                            button { class: "btn", "{cta}" }
                        }
                    }
                }
            }

            button {
                class: "carousel__arrow carousel__arrow--left",
                aria_label: "Previous slide",
                onclick: move |_| state.with_mut(|s| s.retreat(slide_count())),
                "\u{2039}"
            }
            button {
                class: "carousel__arrow carousel__arrow--right",
                aria_label: "Next slide",
                onclick: move |_| state.with_mut(|s| s.advance(slide_count())),
                "\u{203a}"
            }

            div { class: "carousel__dots",
                for i in 0..slide_count() {
                    button {
                        key: "{i}",
                        class: "carousel__dot",
                        class: if i == current { "carousel__dot--active" },
                        aria_label: "Slide {i + 1}",
                        onclick: move |_| state.with_mut(|s| s.select(i, slide_count())),
                    }
                }
            }
        }
    }
}
