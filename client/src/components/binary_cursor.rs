//! Trail of `0`/`1` digits following the mouse pointer.
//!
//! Glyphs are appended straight to `document.body` rather than rendered
//! through the view tree; each one removes itself after
//! [`GLYPH_LIFETIME_MS`](crate::util::glyph::GLYPH_LIFETIME_MS).

use leptos::prelude::*;

#[component]
pub fn BinaryCursor() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::mousemove, |ev| {
            spawn_glyph(f64::from(ev.client_x()), f64::from(ev.client_y()));
        });
        on_cleanup(move || listener.remove());
    }
}

#[cfg(feature = "hydrate")]
fn spawn_glyph(client_x: f64, client_y: f64) {
    use crate::util::glyph::{GLYPH_LIFETIME_MS, Glyph};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };

    let samples = [js_sys::Math::random(), js_sys::Math::random(), js_sys::Math::random()];
    let glyph = Glyph::spawn(client_x, client_y, samples);
    span.set_text_content(Some(&glyph.digit.to_string()));
    let _ = span.set_attribute("style", &glyph.initial_style());
    if body.append_child(&span).is_err() {
        return;
    }

    // Fade on the next frame so the transition has a starting state.
    let fading = span.clone();
    request_animation_frame(move || {
        let _ = fading.set_attribute("style", &glyph.faded_style());
    });

    gloo_timers::callback::Timeout::new(GLYPH_LIFETIME_MS, move || span.remove()).forget();
}
