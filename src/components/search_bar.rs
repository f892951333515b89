//! Search Bar Component
//!
//! Name/category filter fields with an explicit search action.
//! An empty filter is a full reload, not a no-op search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::SearchFilter;
use crate::session::use_session;
use crate::store::{store_set_sweets, use_app_store};

#[component]
pub fn SearchBar(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (search_name, set_search_name) = signal(String::new());
    let (search_category, set_search_category) = signal(String::new());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let filter = SearchFilter {
            name: search_name.get(),
            category: search_category.get(),
        };
        // Both fields blank: same call path as the initial load.
        if filter.is_empty() {
            ctx.reload();
            return;
        }
        let Some(token) = session.token() else { return };

        spawn_local(async move {
            match api::search_sweets(&token, &filter.to_query()).await {
                Ok(sweets) => store_set_sweets(&store, sweets),
                Err(err) => {
                    web_sys::console::error_1(&format!("Search failed: {err}").into());
                    ctx.show_message(err);
                }
            }
        });
    };

    view! {
        <form class="search-bar" on:submit=on_search>
            <div class="search-field">
                <label>"Search by Name"</label>
                <input
                    type="text"
                    placeholder="Chocolate, Gummy..."
                    prop:value=move || search_name.get()
                    on:input=move |ev| set_search_name.set(event_target_value(&ev))
                />
            </div>

            <div class="search-field">
                <label>"Search by Category"</label>
                <input
                    type="text"
                    placeholder="Candy, Chocolate..."
                    prop:value=move || search_category.get()
                    on:input=move |ev| set_search_category.set(event_target_value(&ev))
                />
            </div>

            <button type="submit">"Search"</button>

            <Show when=move || session.is_admin()>
                <button
                    type="button"
                    class="add-btn"
                    on:click=move |_| on_add.run(())
                >
                    "Add Sweet"
                </button>
            </Show>
        </form>
    }
}
