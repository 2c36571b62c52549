//! Toast viewport and the `notify` helper used to queue notices.

use leptos::prelude::*;

use crate::components::icon::IconMark;
use crate::content::Icon;
use crate::state::toast::{Notice, Toast, ToastState, ToastVariant};

/// Queue `notice` and, in the browser, schedule its dismissal after
/// [`TOAST_DURATION_MS`](crate::state::toast::TOAST_DURATION_MS).
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let id = toasts.try_update(|t| t.push(notice));

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DURATION_MS, move || {
                toasts.try_update(|t| t.dismiss(id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast bg-card border border-primary/20 text-foreground",
        ToastVariant::Destructive => "toast bg-destructive border border-destructive text-destructive-foreground",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full md:max-w-[420px]" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <li class=toast_class(toast.variant) role="status">
                            <div class="grid gap-1">
                                <div class="text-sm font-semibold">{toast.title}</div>
                                {toast
                                    .description
                                    .map(|d| view! { <div class="text-sm opacity-90">{d}</div> })}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                <IconMark icon=Icon::X size="w-4 h-4"/>
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
