//! Blog post summaries with a closing quote.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::components::section_header::SectionHeader;
use crate::content::Icon;
use crate::content::blog::{BLOG_POSTS, BLOG_QUOTE, BLOG_QUOTE_ATTRIBUTION};
use crate::state::visibility::{delay_style, reveal_class, stagger_style};
use crate::util::reveal::use_reveal;
use crate::util::scroll::scroll_to_anchor;

#[component]
pub fn BlogSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="blog" class="py-20" node_ref=section_ref>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get(), "animate-fade-in"))>
                    <SectionHeader
                        title="Blog & Insights"
                        subtitle="Sharing thoughts on development, AI/ML trends, and the journey of continuous learning"
                    />

                    <div class="grid md:grid-cols-2 gap-8">
                        {BLOG_POSTS
                            .iter()
                            .enumerate()
                            .map(|(index, post)| {
                                view! {
                                    <a href=post.link class="block">
                                        <div
                                            class=move || format!(
                                                "card group relative overflow-hidden transition-all duration-500 hover-scale cursor-pointer {}",
                                                reveal_class(visible.get(), "animate-fade-in"),
                                            )
                                            style=stagger_style(index)
                                        >
                                            <div class="p-6">
                                                <div class="flex items-start justify-between mb-4">
                                                    <div class="flex items-center space-x-3">
                                                        <div class="text-primary group-hover:text-accent transition-colors duration-300">
                                                            <IconMark icon=post.icon size="w-6 h-6"/>
                                                        </div>
                                                        <span class="badge badge-outline text-xs">{post.category}</span>
                                                    </div>
                                                    <div class="text-primary group-hover:text-accent transition-colors duration-300 opacity-0 group-hover:opacity-100">
                                                        <IconMark icon=Icon::ArrowRight size="w-5 h-5"/>
                                                    </div>
                                                </div>

                                                <h3 class="text-xl font-bold mb-3 group-hover:text-primary transition-colors duration-300">
                                                    {post.title}
                                                </h3>
                                                <p class="text-muted-foreground mb-6 leading-relaxed">{post.excerpt}</p>

                                                <div class="flex items-center space-x-4 text-sm text-muted-foreground mb-4">
                                                    <div class="flex items-center space-x-1">
                                                        <IconMark icon=Icon::Calendar size="w-3.5 h-3.5"/>
                                                        <span>{post.display_date()}</span>
                                                    </div>
                                                    <div class="flex items-center space-x-1">
                                                        <IconMark icon=Icon::Clock size="w-3.5 h-3.5"/>
                                                        <span>{post.read_time}</span>
                                                    </div>
                                                </div>

                                                <div class="flex flex-wrap gap-2">
                                                    {post
                                                        .tags
                                                        .iter()
                                                        .map(|tag| view! { <span class="badge badge-primary text-xs">{*tag}</span> })
                                                        .collect_view()}
                                                </div>
                                            </div>

                                            <div class="absolute inset-0 bg-gradient-to-br from-primary/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none"></div>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div
                        class=move || format!("mt-16 text-center {}", reveal_class(visible.get(), "animate-fade-in"))
                        style=delay_style(800)
                    >
                        <div class="card max-w-4xl mx-auto p-8 bg-card/30">
                            <blockquote class="text-xl md:text-2xl font-medium mb-4">
                                "\u{201c}"{BLOG_QUOTE}"\u{201d}"
                            </blockquote>
                            <p class="text-muted-foreground">"\u{2014} "{BLOG_QUOTE_ATTRIBUTION}</p>
                        </div>
                    </div>

                    <div
                        class=move || format!("text-center mt-12 {}", reveal_class(visible.get(), "animate-fade-in"))
                        style=delay_style(1000)
                    >
                        <button
                            class="btn btn-outline px-8 py-3 hover-scale"
                            on:click=move |_| scroll_to_anchor("#blog")
                        >
                            "View All Posts"
                            <IconMark icon=Icon::ArrowRight size="w-5 h-5 ml-2"/>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
