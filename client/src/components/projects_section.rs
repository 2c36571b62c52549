//! Project cards with code and demo links.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::components::section_header::SectionHeader;
use crate::content::Icon;
use crate::content::projects::{PROJECTS, Project};
use crate::state::visibility::{delay_style, reveal_class, stagger_style};
use crate::util::reveal::use_reveal;
use crate::util::scroll::scroll_to_anchor;

/// Live demo link, or a disabled button for projects that are not hosted.
fn demo_button(project: &Project) -> AnyView {
    match project.demo_url {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="flex-1">
                <button class="btn btn-outline btn-sm w-full">
                    <IconMark icon=Icon::ExternalLink size="w-4 h-4 mr-2"/>
                    "Demo"
                </button>
            </a>
        }
        .into_any(),
        None => view! {
            <button class="btn btn-sm flex-1 border border-muted text-muted-foreground cursor-not-allowed" disabled>
                <IconMark icon=Icon::ExternalLink size="w-4 h-4 mr-2"/>
                "Demo"
            </button>
        }
        .into_any(),
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="projects" class="py-20 bg-secondary/20" node_ref=section_ref>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get(), "animate-fade-in"))>
                    <SectionHeader
                        title="Featured Projects"
                        subtitle="Innovative solutions showcasing technical expertise across various domains"
                    />

                    <div class="grid md:grid-cols-2 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! {
                                    <div
                                        class=move || format!(
                                            "card group relative overflow-hidden transition-all duration-500 hover-scale {}",
                                            reveal_class(visible.get(), "animate-fade-in"),
                                        )
                                        style=stagger_style(index)
                                    >
                                        <div class=format!(
                                            "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-opacity duration-300",
                                            project.gradient,
                                        )></div>

                                        <div class="relative p-6">
                                            <div class="flex items-center space-x-3 mb-4">
                                                <div class="text-primary group-hover:text-accent transition-colors duration-300">
                                                    <IconMark icon=project.icon size="w-8 h-8"/>
                                                </div>
                                                <div>
                                                    <h3 class="text-xl font-bold mb-1">{project.title}</h3>
                                                    <span class="badge badge-outline text-xs">{project.category}</span>
                                                </div>
                                            </div>

                                            <p class="text-muted-foreground mb-6 leading-relaxed">{project.description}</p>

                                            <div class="mb-6">
                                                <h4 class="text-sm font-semibold text-accent mb-3">"Key Features"</h4>
                                                <div class="grid grid-cols-2 gap-2">
                                                    {project
                                                        .features
                                                        .iter()
                                                        .map(|feature| {
                                                            view! {
                                                                <div class="flex items-center text-sm text-muted-foreground">
                                                                    <div class="w-1.5 h-1.5 bg-primary rounded-full mr-2"></div>
                                                                    {*feature}
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>

                                            <div class="mb-6">
                                                <h4 class="text-sm font-semibold text-accent mb-3">"Tech Stack"</h4>
                                                <div class="flex flex-wrap gap-2">
                                                    {project
                                                        .tech_stack
                                                        .iter()
                                                        .map(|tech| view! { <span class="badge badge-primary">{*tech}</span> })
                                                        .collect_view()}
                                                </div>
                                            </div>

                                            <div class="flex space-x-3">
                                                <a href=project.code_url target="_blank" rel="noopener noreferrer" class="flex-1">
                                                    <button class="btn btn-primary btn-sm w-full">
                                                        <IconMark icon=Icon::Github size="w-4 h-4 mr-2"/>
                                                        "Code"
                                                    </button>
                                                </a>
                                                {demo_button(project)}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div
                        class=move || format!("text-center mt-12 {}", reveal_class(visible.get(), "animate-fade-in"))
                        style=delay_style(800)
                    >
                        <div class="card inline-block p-6 bg-card/30">
                            <p class="text-muted-foreground mb-4">
                                "Interested in seeing more of my work or collaborating on a project?"
                            </p>
                            <button
                                class="btn btn-primary px-8 glow-primary hover-scale"
                                on:click=move |_| scroll_to_anchor("#contact")
                            >
                                "Let's Work Together"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
