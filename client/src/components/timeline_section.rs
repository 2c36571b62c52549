use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::components::section_header::SectionHeader;
use crate::content::timeline::{PHILOSOPHY_ATTRIBUTION, PHILOSOPHY_QUOTE, TIMELINE};
use crate::state::visibility::{delay_style, reveal_class, stagger_style};
use crate::util::reveal::use_reveal;

/// Vertical timeline of education, experience, and milestones.
#[component]
pub fn TimelineSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="timeline" class="py-20" node_ref=section_ref>
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get(), "animate-fade-in"))>
                    <SectionHeader
                        title="Journey Timeline"
                        subtitle="Key milestones in my educational and professional development"
                    />

                    <div class="relative">
                        <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary via-accent to-primary opacity-30"></div>

                        <div class="space-y-12">
                            {TIMELINE
                                .iter()
                                .enumerate()
                                .map(|(index, event)| {
                                    view! {
                                        <div
                                            class=move || format!(
                                                "relative flex items-start space-x-6 {}",
                                                reveal_class(visible.get(), "animate-fade-in"),
                                            )
                                            style=stagger_style(index)
                                        >
                                            <div class="relative flex-shrink-0">
                                                <div class="w-16 h-16 bg-card border-2 border-primary/30 rounded-full flex items-center justify-center glow-primary">
                                                    <div class="text-primary">
                                                        <IconMark icon=event.icon size="w-6 h-6"/>
                                                    </div>
                                                </div>
                                            </div>

                                            <div class="card flex-1 p-6 hover-scale">
                                                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-4">
                                                    <h3 class="text-xl font-bold mb-2 sm:mb-0">{event.title}</h3>
                                                    <div class="flex items-center space-x-2">
                                                        <span class=format!("badge badge-outline {}", event.kind.badge_class())>
                                                            {event.kind.label()}
                                                        </span>
                                                        <span class="badge badge-secondary text-muted-foreground">{event.date}</span>
                                                    </div>
                                                </div>

                                                <p class="text-muted-foreground leading-relaxed mb-4">{event.description}</p>

                                                <div class="flex flex-wrap gap-2">
                                                    {event
                                                        .tags
                                                        .iter()
                                                        .map(|tag| view! { <span class="badge badge-primary text-xs">{*tag}</span> })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=move || format!("mt-16 text-center {}", reveal_class(visible.get(), "animate-fade-in"))
                        style=delay_style(800)
                    >
                        <div class="card max-w-3xl mx-auto p-8 bg-card/30">
                            <blockquote class="text-lg md:text-xl font-medium text-foreground mb-4">
                                "\u{201c}"{PHILOSOPHY_QUOTE}"\u{201d}"
                            </blockquote>
                            <p class="text-muted-foreground">"\u{2014} "{PHILOSOPHY_ATTRIBUTION}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
