//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Sweet;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog snapshot: the last successful fetch or search result.
    /// Only ever replaced wholesale after a server round trip, never
    /// patched locally.
    pub sweets: Vec<Sweet>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the catalog snapshot with a fresh server response
pub fn store_set_sweets(store: &AppStore, sweets: Vec<Sweet>) {
    *store.sweets().write() = sweets;
}
