//! Dashboard Component
//!
//! Catalog view for authenticated users: navbar, status banner,
//! search bar, sweet grid and the modal form. Owns the full-list
//! reload that runs on mount and after every mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{SearchBar, StatusBanner, SweetCard, SweetForm};
use crate::context::AppContext;
use crate::models::Sweet;
use crate::session::use_session;
use crate::store::{store_set_sweets, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Sweet>>(None);

    // Full list fetch on mount, re-run whenever a mutation bumps the
    // reload trigger. The displayed catalog is only ever this fetch's
    // result, never a locally patched copy.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = session.token() else { return };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_sweets(&token).await {
                Ok(sweets) => store_set_sweets(&store, sweets),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to load sweets: {err}").into());
                    ctx.show_message("Failed to load sweets");
                }
            }
            set_loading.set(false);
        });
    });

    let on_add = Callback::new(move |_| {
        set_editing.set(None);
        set_show_form.set(true);
    });
    let on_edit = Callback::new(move |sweet: Sweet| {
        set_editing.set(Some(sweet));
        set_show_form.set(true);
    });
    let on_close = Callback::new(move |_| {
        set_show_form.set(false);
        set_editing.set(None);
    });

    view! {
        <div class="dashboard">
            <nav class="navbar">
                <h1>"Sweet Shop"</h1>
                <div class="navbar-user">
                    <span class="username">
                        {move || session.user().map(|u| u.username).unwrap_or_default()}
                    </span>
                    <Show when=move || session.is_admin()>
                        <span class="admin-badge">"ADMIN"</span>
                    </Show>
                    <button class="logout-btn" on:click=move |_| session.log_out()>
                        "Logout"
                    </button>
                </div>
            </nav>

            <div class="dashboard-body">
                <StatusBanner />

                <SearchBar on_add=on_add />

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Loading sweets..."</div> }
                >
                    <div class="sweet-grid">
                        <For
                            each=move || store.sweets().get()
                            key=|sweet| sweet.id.clone()
                            children=move |sweet| {
                                view! { <SweetCard sweet=sweet on_edit=on_edit /> }
                            }
                        />
                    </div>

                    <Show when=move || store.sweets().read().is_empty()>
                        <div class="empty-state">
                            <p>"No sweets found"</p>
                        </div>
                    </Show>
                </Show>
            </div>

            {move || {
                show_form
                    .get()
                    .then(|| view! { <SweetForm sweet=editing.get() on_close=on_close /> })
            }}
        </div>
    }
}
