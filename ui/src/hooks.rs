//! Browser glue: window scroll tracking, carousel autoplay, and viewport
//! reveal observation.
//!
//! Each hook ties its browser-side resource to the calling component's
//! scope, so the subscribe/unsubscribe pairing happens exactly once per
//! component lifetime: listeners and observers are released by Drop guards
//! held in hook slots, and the autoplay future is cancelled with its scope.
//! Non-wasm builds get inert stand-ins so the crate and its tests compile
//! natively.

use dioxus::prelude::*;

/// Track the window's vertical scroll offset with a passive listener.
/// The callback receives `window.scrollY` on every scroll event.
#[cfg(target_arch = "wasm32")]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    struct ScrollListener(Closure<dyn FnMut(web_sys::Event)>);

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    self.0.as_ref().unchecked_ref(),
                );
            }
        }
    }

    use_hook(|| {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                on_scroll.call(window.scroll_y().unwrap_or(0.0));
            }
        });
        if let Some(window) = web_sys::window() {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            );
        }
        Rc::new(ScrollListener(closure))
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_window_scroll(_on_scroll: Callback<f64>) {}

/// Fire `on_advance` with the current slide count every
/// [`crate::core::carousel::AUTOPLAY_INTERVAL_MS`] while the caller stays
/// mounted. The underlying future is keyed on `slide_count`, so a count
/// change restarts the cadence; unmounting cancels it.
#[cfg(target_arch = "wasm32")]
pub fn use_autoplay(slide_count: Memo<usize>, on_advance: Callback<usize>) {
    use gloo_timers::future::TimeoutFuture;

    use crate::core::carousel::AUTOPLAY_INTERVAL_MS;

    let _ticker = use_resource(move || {
        let count = slide_count();
        async move {
            if count < 2 {
                return;
            }
            loop {
                TimeoutFuture::new(AUTOPLAY_INTERVAL_MS).await;
                on_advance.call(count);
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_autoplay(_slide_count: Memo<usize>, _on_advance: Callback<usize>) {}

/// Observe every element matching `selector` and toggle its `visible`
/// class from the reveal predicate on each intersection callback.
///
/// Targets are collected on the first post-render effect, when the
/// section's DOM exists; the observer disconnects when the caller
/// unmounts.
#[cfg(target_arch = "wasm32")]
pub fn use_reveal(selector: &'static str, threshold: f64) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::core::reveal;

    struct RevealObserver {
        observer: web_sys::IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array)>,
    }

    impl RevealObserver {
        fn attach(selector: &str, threshold: f64) -> Option<Self> {
            let document = web_sys::window()?.document()?;

            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(
                move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        let revealed =
                            reveal::is_revealed(entry.intersection_ratio(), threshold);
                        let _ = entry
                            .target()
                            .class_list()
                            .toggle_with_force("visible", revealed);
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

            let targets = document.query_selector_all(selector).ok()?;
            for i in 0..targets.length() {
                if let Some(node) = targets.get(i) {
                    if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                        observer.observe(&element);
                    }
                }
            }

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    let slot: Rc<RefCell<Option<RevealObserver>>> = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect(move || {
        if slot.borrow().is_none() {
            *slot.borrow_mut() = RevealObserver::attach(selector, threshold);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_reveal(_selector: &'static str, _threshold: f64) {}
