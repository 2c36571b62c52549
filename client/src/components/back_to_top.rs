//! Floating button that returns the visitor to the top of the page.

use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::content::Icon;
use crate::state::ui::ChromeState;
use crate::util::scroll::scroll_to_top;

/// Shown only while the page is scrolled more than 300px.
#[component]
pub fn BackToTop() -> impl IntoView {
    let chrome = RwSignal::new(ChromeState::default());

    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::scroll, move |_| {
            chrome.update(|c| c.on_scroll(crate::util::scroll::scroll_y()));
        });
        on_cleanup(move || listener.remove());
    }

    view! {
        <Show when=move || chrome.get().back_to_top_visible()>
            <button
                class="fixed bottom-8 right-8 z-50 w-12 h-12 rounded-full bg-primary hover:bg-primary/90 text-primary-foreground shadow-lg glow-primary hover-scale transition-all duration-300 animate-fade-in flex items-center justify-center"
                aria-label="Back to top"
                on:click=move |_| scroll_to_top()
            >
                <IconMark icon=Icon::ChevronUp size="w-6 h-6"/>
            </button>
        </Show>
    }
}
