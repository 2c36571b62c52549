//! Full-height landing block: typed greeting, floating particles, calls to
//! action, and social links.

use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::content::Icon;
use crate::content::profile::{PROFILE, SOCIAL_LINKS};
use crate::util::particles::particles;
use crate::util::scroll::scroll_to_anchor;
use crate::util::typing::use_typewriter;

#[component]
pub fn HeroSection() -> impl IntoView {
    let typed = use_typewriter(PROFILE.greeting);

    let background = format!(
        "background-image: url({}); background-size: cover; background-position: center; background-attachment: fixed",
        PROFILE.hero_background
    );

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative overflow-hidden" style=background>
            <div class="absolute inset-0 bg-background/80"></div>

            <div class="absolute inset-0">
                {particles()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div
                                class="absolute w-2 h-2 bg-primary rounded-full opacity-20 animate-float"
                                style=p.style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 text-center max-w-4xl mx-auto px-4">
                <div class="mb-8">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 min-h-[200px] flex items-center justify-center">
                        <span class="gradient-text">
                            {typed}
                            <span class="animate-blink-caret">"|"</span>
                        </span>
                    </h1>
                </div>

                <p class="text-xl md:text-2xl text-muted-foreground mb-8 animate-fade-in">{PROFILE.subtitle}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12 animate-fade-in">
                    <button
                        class="btn btn-primary px-8 py-3 text-lg glow-primary hover-scale"
                        on:click=move |_| scroll_to_anchor("#projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        class="btn btn-outline px-8 py-3 text-lg hover-scale"
                        on:click=move |_| scroll_to_anchor("#contact")
                    >
                        "Let's Connect"
                    </button>
                </div>

                <div class="flex items-center justify-center gap-4 mt-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            let new_tab = link.opens_new_tab();
                            view! {
                                <a
                                    href=link.href
                                    target=new_tab.then_some("_blank")
                                    rel=new_tab.then_some("noopener noreferrer")
                                    class="p-3 rounded-lg bg-primary/10 hover:bg-primary/20 text-primary hover:scale-110 transition-all duration-300"
                                    aria-label=link.label
                                >
                                    <IconMark icon=link.icon size="w-5 h-5"/>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                    <button
                        class="text-primary hover:text-primary/80 transition-colors"
                        aria-label="Scroll to about"
                        on:click=move |_| scroll_to_anchor("#about")
                    >
                        <IconMark icon=Icon::ChevronDown size="w-8 h-8"/>
                    </button>
                </div>
            </div>
        </section>
    }
}
