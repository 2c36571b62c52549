//! Biography card, journey narrative, and strengths grid.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::components::section_header::SectionHeader;
use crate::content::about::{CERTIFICATIONS, EXPERIENCE, HOBBIES, JOURNEY, STRENGTHS};
use crate::content::profile::PROFILE;
use crate::state::visibility::reveal_class;
use crate::util::reveal::use_reveal;

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="about" class="py-20 bg-secondary/20" node_ref=section_ref>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get(), "animate-fade-in"))>
                    <SectionHeader title="About Me" subtitle=PROFILE.tagline/>

                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div class=move || reveal_class(visible.get(), "animate-slide-in-left")>
                            <div class="card p-8 hover-scale">
                                <div class="text-center mb-6">
                                    <div class="w-48 h-48 mx-auto mb-6 relative">
                                        <img
                                            src=PROFILE.avatar
                                            alt=PROFILE.name
                                            class="w-full h-full object-cover rounded-full border-4 border-primary/30 glow-primary"
                                        />
                                    </div>
                                    <h3 class="text-2xl font-bold gradient-text mb-2">{PROFILE.name}</h3>
                                    <p class="text-primary font-semibold text-lg">{PROFILE.role}</p>
                                </div>

                                <div class="space-y-4">
                                    <div>
                                        <h4 class="font-semibold text-accent mb-2">"Education & Certifications"</h4>
                                        {CERTIFICATIONS
                                            .iter()
                                            .map(|c| view! { <span class="badge badge-secondary mr-2 mb-2">{*c}</span> })
                                            .collect_view()}
                                    </div>
                                    <div>
                                        <h4 class="font-semibold text-accent mb-2">"Experience"</h4>
                                        <div class="text-sm text-muted-foreground space-y-1">
                                            {EXPERIENCE
                                                .iter()
                                                .map(|line| view! { <p>"• "{*line}</p> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                    <div>
                                        <h4 class="font-semibold text-accent mb-2">"Hobbies"</h4>
                                        <div class="flex flex-wrap gap-2">
                                            {HOBBIES
                                                .iter()
                                                .map(|h| view! { <span class="badge badge-outline border-primary/30">{*h}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class=move || format!("space-y-8 {}", reveal_class(visible.get(), "animate-slide-in-right"))>
                            <div class="card p-6">
                                <h3 class="text-2xl font-bold mb-4 text-accent">"My Journey"</h3>
                                <div class="space-y-4 text-muted-foreground">
                                    {JOURNEY.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                                </div>
                            </div>

                            <div class="grid md:grid-cols-2 gap-4">
                                {STRENGTHS
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <div class="card p-4 bg-card/30 hover-scale group">
                                                <div class="flex items-start space-x-3">
                                                    <div class="text-primary group-hover:text-accent transition-colors duration-300">
                                                        <IconMark icon=s.icon size="w-6 h-6"/>
                                                    </div>
                                                    <div>
                                                        <h4 class="font-semibold mb-1">{s.title}</h4>
                                                        <p class="text-sm text-muted-foreground">{s.description}</p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
