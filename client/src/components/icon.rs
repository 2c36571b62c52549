//! Line icon rendered from `/icons/<name>.svg` as a CSS mask, so it takes
//! the surrounding text colour.

use leptos::prelude::*;

use crate::content::Icon;

#[component]
pub fn IconMark(icon: Icon, #[prop(default = "")] size: &'static str) -> impl IntoView {
    view! {
        <span
            class=icon.class(size)
            style=format!("--icon: url(/icons/{}.svg)", icon.name())
            aria-hidden="true"
        ></span>
    }
}
