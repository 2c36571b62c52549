//! Typewriter effect for the hero greeting.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use leptos::prelude::*;

/// Milliseconds between revealed characters.
pub const TYPING_INTERVAL_MS: u64 = 100;

/// The first `count` characters of `text`, cut on a char boundary.
#[must_use]
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Advance the typed character count by one tick. Returns `None` once the
/// whole text is showing, which is the signal to stop the timer.
#[must_use]
pub fn next_count(text: &str, count: usize) -> Option<usize> {
    (count < text.chars().count()).then_some(count + 1)
}

/// Reveal `text` one character per [`TYPING_INTERVAL_MS`] and return the
/// visible prefix as a signal. The timer stops when the text is complete or
/// the owner unmounts.
pub fn use_typewriter(text: &'static str) -> Signal<String> {
    let (count, set_count) = signal(0_usize);

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new(None::<IntervalHandle>);
        let started = set_interval_with_handle(
            move || match next_count(text, count.get_untracked()) {
                Some(next) => set_count.set(next),
                None => {
                    if let Some(h) = handle.try_update_value(Option::take).flatten() {
                        h.clear();
                    }
                }
            },
            std::time::Duration::from_millis(TYPING_INTERVAL_MS),
        );
        match started {
            Ok(h) => handle.set_value(Some(h)),
            Err(err) => {
                log::warn!("typing timer unavailable: {err:?}");
                set_count.set(text.chars().count());
            }
        }
        on_cleanup(move || {
            if let Some(h) = handle.try_update_value(Option::take).flatten() {
                h.clear();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_count;
    }

    Signal::derive(move || typed_prefix(text, count.get()).to_owned())
}
