//! Navigation Component
//!
//! Header navigation bar. A pure function of session state: feature links and
//! a logout control when authenticated, login/register links otherwise.

use leptos::*;
use leptos_router::*;

use crate::state::session::SessionStore;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    let navigate = use_navigate();
    let on_logout = move |_| {
        session.log_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold text-white">"EmotionAI"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            if session.is_authenticated() {
                                let on_logout = on_logout.clone();
                                view! {
                                    <NavLink href="/chat" label="Chatbot" />
                                    <NavLink href="/journal" label="Journal" />
                                    <NavLink href="/profile" label="Profile" />
                                    <NavLink href="/goals" label="Goals" />
                                    <button
                                        on:click=on_logout
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        "Log out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Log in" />
                                    <NavLink href="/register" label="Register" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
