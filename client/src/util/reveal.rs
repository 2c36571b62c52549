//! `use_reveal`: the viewport hook behind every section's entrance
//! animation.
//!
//! Client-side (hydrate): an `IntersectionObserver` with a 10% threshold
//! feeds a [`VisibilityLatch`]. The first intersecting report sets the flag
//! and disconnects the observer. Unmounting disconnects it and drops the
//! JS callback.
//! Server-side (SSR): the flag stays `false`.

use leptos::html::Section;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::visibility::{REVEAL_THRESHOLD, VisibilityLatch};

#[cfg(feature = "hydrate")]
type ObserverCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Watch `target` and return a flag that turns `true` the first time the
/// section is at least 10% inside the viewport. A ref that never mounts
/// leaves the flag `false`.
pub fn use_reveal(target: NodeRef<Section>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        // The callback must outlive the observer that invokes it.
        let observer = StoredValue::new_local(None::<(web_sys::IntersectionObserver, ObserverCallback)>);

        Effect::new(move || {
            let Some(element) = target.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }

            let mut latch = VisibilityLatch::default();
            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, obs: web_sys::IntersectionObserver| {
                    let intersecting = entries
                        .iter()
                        .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                    if latch.observe(intersecting) {
                        set_visible.set(true);
                        obs.disconnect();
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(obs) => {
                    obs.observe(&element);
                    observer.set_value(Some((obs, callback)));
                }
                Err(err) => log::warn!("intersection observer unavailable: {err:?}"),
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|slot| {
                if let Some((obs, callback)) = slot.take() {
                    obs.disconnect();
                    drop(callback);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, set_visible);
    }

    visible
}
