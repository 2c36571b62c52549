use leptos::prelude::*;

/// Centered gradient title with a muted subtitle, shared by every content
/// section.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">{title}</h2>
            <p class="text-xl text-muted-foreground max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}
