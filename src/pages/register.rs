//! Register Page
//!
//! Account creation form. On success a confirmation is shown and the user is
//! sent to the login page after a short delay.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::session::Credentials;

/// Delay before redirecting to the login page after a successful registration
const REDIRECT_DELAY_MS: u32 = 2000;

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials::new(username.get(), password.get());

        set_submitting.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&credentials).await {
                Ok(()) => {
                    set_success.set(Some(
                        "Account created. You can log in now.".to_string(),
                    ));
                    gloo_timers::callback::Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate("/login", Default::default());
                    })
                    .forget();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Registration failed: {}", e).into());
                    set_error.set(Some(
                        "Registration failed. The username may already exist.".to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-16 bg-gray-800 rounded-xl p-8">
            <div class="text-center mb-6">
                <div class="text-4xl mb-2">"🧠"</div>
                <h1 class="text-2xl font-bold">"Welcome to EmotionAI"</h1>
            </div>

            {move || {
                success.get().map(|msg| view! {
                    <p class="mb-4 text-sm text-green-400">{msg}</p>
                })
            }}
            {move || {
                error.get().map(|msg| view! {
                    <p class="mb-4 text-sm text-red-400">{msg}</p>
                })
            }}

            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="password"
                    placeholder="Choose a password"
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
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </form>

            <p class="mt-6 text-sm text-gray-400 text-center">
                "Already have an account? "
                <a href="/login" class="text-primary-400 hover:underline">"Log in"</a>
            </p>
        </div>
    }
}
