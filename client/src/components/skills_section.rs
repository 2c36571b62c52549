use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::components::section_header::SectionHeader;
use crate::content::skills::{LEARNING_NOTE, SKILL_CATEGORIES};
use crate::state::visibility::{delay_style, reveal_class, stagger_style};
use crate::util::reveal::use_reveal;

/// Skill categories as a two-column grid of badge cards.
#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="skills" class="py-20" node_ref=section_ref>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get(), "animate-fade-in"))>
                    <SectionHeader
                        title="Technical Skills"
                        subtitle="A comprehensive toolkit for building modern, scalable applications"
                    />

                    <div class="grid md:grid-cols-2 gap-8">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(index, category)| {
                                view! {
                                    <div
                                        class=move || format!(
                                            "card relative p-6 transition-all duration-500 hover-scale group {}",
                                            reveal_class(visible.get(), "animate-fade-in"),
                                        )
                                        style=stagger_style(index)
                                    >
                                        <div class="flex items-center mb-6">
                                            <div class=format!(
                                                "{} group-hover:glow-primary transition-all duration-300 mr-4",
                                                category.accent.text_class(),
                                            )>
                                                <IconMark icon=category.icon size="w-8 h-8"/>
                                            </div>
                                            <h3 class="text-xl font-bold">{category.title}</h3>
                                        </div>

                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class=format!(
                                                            "badge {} transition-all duration-300 hover-scale cursor-default",
                                                            category.accent.badge_class(),
                                                        )>{*skill}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>

                                        <div class="absolute inset-0 bg-gradient-to-r from-primary/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 rounded-lg pointer-events-none"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div
                        class=move || format!("mt-12 text-center {}", reveal_class(visible.get(), "animate-fade-in"))
                        style=delay_style(800)
                    >
                        <div class="card inline-block p-6 bg-card/30">
                            <p class="text-muted-foreground">
                                <span class="text-primary font-semibold">"Always Learning: "</span>
                                {LEARNING_NOTE}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
