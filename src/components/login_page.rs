//! Login Page Component
//!
//! Username/password form; hands the returned identity and token
//! pair to the session store on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;

#[component]
pub fn LoginPage(#[prop(into)] on_switch_to_register: Callback<()>) -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    // Form submit also fires on Enter in either input.
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);
        let username = username.get();
        let password = password.get();

        spawn_local(async move {
            match api::login(&username, &password).await {
                Ok(auth) => session.log_in(auth.user, auth.tokens),
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sweet Shop"</h1>
                <p class="auth-subtitle">"Welcome back!"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="error-box">{move || error.get()}</div>
                </Show>

                <form class="auth-form" on:submit=submit>
                    <label>"Username"</label>
                    <input
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />

                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <button type="button" on:click=move |_| on_switch_to_register.run(())>
                        "Register"
                    </button>
                </p>
            </div>
        </div>
    }
}
