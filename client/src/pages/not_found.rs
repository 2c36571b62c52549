use leptos::prelude::*;
use leptos_meta::Title;

/// Fallback for any path other than `/`.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found"/>
        <div class="min-h-screen flex items-center justify-center bg-muted">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-xl text-muted-foreground mb-4">"Oops! Page not found"</p>
                <a href="/" class="text-primary hover:text-primary/80 underline">"Return to Home"</a>
            </div>
        </div>
    }
}
