//! Register Page Component
//!
//! Account creation form. A successful registration logs straight in
//! with the returned token pair. Validation failures arrive as a
//! field-keyed structure and are shown as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;

#[component]
pub fn RegisterPage(#[prop(into)] on_switch_to_login: Callback<()>) -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);
        let username = username.get();
        let email = email.get();
        let password = password.get();

        spawn_local(async move {
            match api::register(&username, &email, &password).await {
                Ok(auth) => session.log_in(auth.user, auth.tokens),
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join Sweet Shop"</h1>
                <p class="auth-subtitle">"Create your account"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="error-box small">{move || error.get()}</div>
                </Show>

                <form class="auth-form" on:submit=submit>
                    <label>"Username"</label>
                    <input
                        type="text"
                        placeholder="Choose a username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />

                    <label>"Email"</label>
                    <input
                        type="email"
                        placeholder="your.email@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="Create a password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <button type="button" on:click=move |_| on_switch_to_login.run(())>
                        "Login"
                    </button>
                </p>
            </div>
        </div>
    }
}
