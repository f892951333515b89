//! Sweet Form Component
//!
//! Modal create/edit form over a working copy of one sweet's fields.
//! Numeric fields stay strings while typing and are coerced on save;
//! whether an existing sweet was supplied decides create vs update.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{Sweet, SweetDraft};
use crate::session::use_session;

#[component]
pub fn SweetForm(
    sweet: Option<Sweet>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let draft = sweet.as_ref().map(SweetDraft::from_sweet).unwrap_or_default();
    let editing_id = sweet.as_ref().map(|s| s.id.clone());
    let is_edit = editing_id.is_some();

    let (name, set_name) = signal(draft.name);
    let (category, set_category) = signal(draft.category);
    let (price, set_price) = signal(draft.price);
    let (quantity, set_quantity) = signal(draft.quantity);
    let (description, set_description) = signal(draft.description);
    let (form_error, set_form_error) = signal(String::new());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = SweetDraft {
            name: name.get(),
            category: category.get(),
            price: price.get(),
            quantity: quantity.get(),
            description: description.get(),
        };
        let payload = match draft.into_payload() {
            Ok(payload) => payload,
            Err(err) => {
                set_form_error.set(err);
                return;
            }
        };
        set_form_error.set(String::new());
        let Some(token) = session.token() else { return };
        let editing_id = editing_id.clone();

        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_sweet(&token, id, &payload)
                    .await
                    .map(|_| "Sweet updated successfully!"),
                None => api::create_sweet(&token, &payload)
                    .await
                    .map(|_| "Sweet added successfully!"),
            };
            match result {
                Ok(message) => {
                    ctx.show_message(message);
                    ctx.reload();
                    on_close.run(());
                }
                // Keep the form open so the input is not lost.
                Err(err) => ctx.show_message(err),
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-card">
                <h2>{if is_edit { "Edit Sweet" } else { "Add New Sweet" }}</h2>

                <Show when=move || !form_error.get().is_empty()>
                    <div class="error-box">{move || form_error.get()}</div>
                </Show>

                <form class="sweet-form" on:submit=save>
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label>"Category"</label>
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />

                    <div class="form-grid">
                        <div>
                            <label>"Price"</label>
                            <input
                                type="number"
                                step="0.01"
                                prop:value=move || price.get()
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>"Quantity"</label>
                            <input
                                type="number"
                                prop:value=move || quantity.get()
                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label>"Description"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <div class="form-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
