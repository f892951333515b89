//! Sweet Shop Frontend App
//!
//! Top-level component: builds the session, store and context once,
//! then gates between the auth screens and the catalog dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, LoginPage, RegisterPage};
use crate::context::AppContext;
use crate::session::Session;
use crate::store::AppState;

/// Which auth screen is shown while logged out
#[derive(Clone, Copy, PartialEq)]
enum AuthView {
    Login,
    Register,
}

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new();
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (message, set_message) = signal(String::new());
    let (auth_view, set_auth_view) = signal(AuthView::Login);

    // Provide shared state to all children
    provide_context(session);
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (message, set_message),
    ));

    let to_register = Callback::new(move |_| set_auth_view.set(AuthView::Register));
    let to_login = Callback::new(move |_| set_auth_view.set(AuthView::Login));

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    <Show
                        when=move || auth_view.get() == AuthView::Register
                        fallback=move || {
                            view! { <LoginPage on_switch_to_register=to_register /> }
                        }
                    >
                        <RegisterPage on_switch_to_login=to_login />
                    </Show>
                }
            }
        >
            <Dashboard />
        </Show>
    }
}
