//! Sweet Card Component
//!
//! One catalog entry with purchase controls, plus edit/delete/restock
//! for admins. Quantity changes happen server-side only; every action
//! ends in a catalog reload rather than patching the card locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Sweet;
use crate::session::use_session;

#[component]
pub fn SweetCard(sweet: Sweet, #[prop(into)] on_edit: Callback<Sweet>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (purchase_amount, set_purchase_amount) = signal(1u32);
    let (restock_amount, set_restock_amount) = signal(10u32);
    let (show_restock, set_show_restock) = signal(false);

    let in_stock = sweet.is_in_stock;
    let quantity = sweet.quantity;
    let price = sweet.price;

    let purchase_id = sweet.id.clone();
    let on_purchase = move |_| {
        let Some(token) = session.token() else { return };
        let id = purchase_id.clone();
        let amount = purchase_amount.get();
        spawn_local(async move {
            match api::purchase_sweet(&token, &id, amount).await {
                Ok(resp) => {
                    ctx.show_message(resp.message);
                    ctx.reload();
                }
                // e.g. "Insufficient stock"; displayed quantity stays
                // as-is until the next reload.
                Err(err) => ctx.show_message(err),
            }
        });
    };

    let restock_id = sweet.id.clone();
    let on_restock = Callback::new(move |_| {
        set_show_restock.set(false);
        let Some(token) = session.token() else { return };
        let id = restock_id.clone();
        let amount = restock_amount.get();
        spawn_local(async move {
            match api::restock_sweet(&token, &id, amount).await {
                Ok(resp) => {
                    ctx.show_message(resp.message);
                    ctx.reload();
                }
                Err(err) => ctx.show_message(err),
            }
        });
    });

    let delete_id = sweet.id.clone();
    let on_delete = Callback::new(move |_| {
        let Some(token) = session.token() else { return };
        let id = delete_id.clone();
        spawn_local(async move {
            // The backend signals delete success by status only.
            match api::delete_sweet(&token, &id).await {
                Ok(true) => {
                    ctx.show_message("Sweet deleted successfully!");
                    ctx.reload();
                }
                Ok(false) => {
                    ctx.show_message("Failed to delete sweet");
                    ctx.reload();
                }
                Err(_) => ctx.show_message("Failed to delete sweet"),
            }
        });
    });

    let edit_sweet = sweet.clone();
    let on_edit_click = move |_| on_edit.run(edit_sweet.clone());

    view! {
        <div class="sweet-card">
            <div class="sweet-card-header">
                <div class="sweet-card-title">
                    <h3>{sweet.name.clone()}</h3>
                    <span class="category-pill">{sweet.category.clone()}</span>
                </div>
                <Show when=move || session.is_admin()>
                    <div class="admin-actions">
                        <button class="edit-btn" on:click=on_edit_click.clone()>
                            "Edit"
                        </button>
                        <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                    </div>
                </Show>
            </div>

            {sweet
                .description
                .clone()
                .filter(|text| !text.is_empty())
                .map(|text| view! { <p class="sweet-description">{text}</p> })}

            <div class="sweet-card-stats">
                <span class="price">{format!("₹{price}")}</span>
                <span class=if in_stock { "stock in-stock" } else { "stock out-of-stock" }>
                    {format!("{quantity} in stock")}
                </span>
            </div>

            <div class="purchase-row">
                <input
                    type="number"
                    min="1"
                    max=quantity.to_string()
                    disabled=!in_stock
                    prop:value=move || purchase_amount.get().to_string()
                    on:input=move |ev| {
                        set_purchase_amount.set(event_target_value(&ev).parse().unwrap_or(1))
                    }
                />
                <button class="purchase-btn" disabled=!in_stock on:click=on_purchase>
                    "Purchase"
                </button>
            </div>

            <Show when=move || session.is_admin()>
                {move || {
                    if show_restock.get() {
                        view! {
                            <div class="restock-row">
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || restock_amount.get().to_string()
                                    on:input=move |ev| {
                                        set_restock_amount
                                            .set(event_target_value(&ev).parse().unwrap_or(1))
                                    }
                                />
                                <button class="restock-btn" on:click=move |_| on_restock.run(())>
                                    "Confirm"
                                </button>
                                <button
                                    class="cancel-btn"
                                    on:click=move |_| set_show_restock.set(false)
                                >
                                    "Cancel"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="restock-btn full"
                                on:click=move |_| set_show_restock.set(true)
                            >
                                "Restock"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
