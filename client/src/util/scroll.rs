//! Window scrolling helpers.
//!
//! All navigation on the page is in-page: anchors are scrolled into view
//! smoothly rather than routed. Outside the browser every helper is a no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Normalise `about` or `#about` to a CSS id selector.
#[must_use]
pub fn anchor_selector(target: &str) -> String {
    let id = target.trim().trim_start_matches('#');
    format!("#{id}")
}

/// Smooth-scroll the element matching `anchor` into view. Missing elements
/// are ignored.
pub fn scroll_to_anchor(anchor: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(element)) = document.query_selector(&anchor_selector(anchor)) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = anchor;
    }
}

/// Smooth-scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Current vertical scroll offset in CSS pixels; `0.0` on the server.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
