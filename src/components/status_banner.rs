//! Status Banner Component
//!
//! Renders the transient status message from the app context.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || !ctx.message.get().is_empty()>
            <div class="status-banner">{move || ctx.message.get()}</div>
        </Show>
    }
}
