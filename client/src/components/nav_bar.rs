//! Fixed navigation bar with in-page anchor links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links keep their `#anchor` hrefs so the page works before hydration;
//! once hydrated, clicks are intercepted and smooth-scrolled instead.

use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::content::Icon;
use crate::content::profile::{NAV_ITEMS, NavItem, PROFILE};
use crate::state::ui::ChromeState;
use crate::util::scroll::scroll_to_anchor;

#[component]
pub fn NavBar() -> impl IntoView {
    let chrome = RwSignal::new(ChromeState::default());

    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::scroll, move |_| {
            chrome.update(|c| c.on_scroll(crate::util::scroll::scroll_y()));
        });
        on_cleanup(move || listener.remove());
    }

    let nav_class = move || {
        if chrome.get().nav_solid() {
            "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-background/95 backdrop-blur-md border-b border-primary/20"
        } else {
            "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    let link = move |item: &'static NavItem, class: &'static str| {
        view! {
            <a
                href=item.anchor
                class=class
                on:click=move |ev| {
                    ev.prevent_default();
                    chrome.update(ChromeState::close_menu);
                    scroll_to_anchor(item.anchor);
                }
            >
                {item.label}
            </a>
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                <a
                    href="#home"
                    class="text-xl font-bold gradient-text"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_anchor("#home");
                    }
                >
                    {PROFILE.name}
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| link(item, "text-muted-foreground hover:text-primary transition-colors duration-300"))
                        .collect_view()}
                </div>

                <button
                    class="md:hidden text-primary"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| chrome.update(ChromeState::toggle_menu)
                >
                    {move || {
                        let icon = if chrome.get().menu_open { Icon::X } else { Icon::Menu };
                        view! { <IconMark icon=icon size="w-6 h-6"/> }
                    }}
                </button>
            </div>

            <Show when=move || chrome.get().menu_open>
                <div class="md:hidden px-4 pb-4 flex flex-col space-y-3 bg-background/95 backdrop-blur-md">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| link(item, "py-2 text-muted-foreground hover:text-primary transition-colors duration-300"))
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
