//! Login Page
//!
//! Credential form. On success the session store is updated and persisted,
//! and the user lands on the chat view. All failure kinds collapse to one
//! generic message.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::session::{Credentials, SessionStore};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials::new(username.get(), password.get());

        set_submitting.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(()) => {
                    session.log_in(credentials);
                    navigate("/chat", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Login failed: {}", e).into());
                    set_error.set(Some("Invalid credentials or login error.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-16 bg-gray-800 rounded-xl p-8">
            <div class="text-center mb-6">
                <div class="text-4xl mb-2">"🧠"</div>
                <h1 class="text-2xl font-bold">"Log in"</h1>
            </div>

            {move || {
                error.get().map(|msg| view! {
                    <p class="mb-4 text-sm text-red-400">{msg}</p>
                })
            }}

            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="mt-6 text-sm text-gray-400 text-center">
                "No account yet? "
                <a href="/register" class="text-primary-400 hover:underline">"Register"</a>
            </p>
        </div>
    }
}
