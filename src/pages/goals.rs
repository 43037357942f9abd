//! Goals Page
//!
//! Read-only list of server-generated personal goals.

use leptos::*;

use crate::api;
use crate::components::ListSkeleton;
use crate::state::session::SessionStore;

/// Goals page component
#[component]
pub fn Goals() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    let (goals, set_goals) = create_signal(Vec::<String>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let credentials = session.credentials();
        spawn_local(async move {
            match api::fetch_goals(&credentials).await {
                Ok(list) => set_goals.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch goals: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Personal Goals"</h1>
                <p class="text-gray-400 mt-1">"Generated from your profile"</p>
            </div>

            <div class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else {
                        let list = goals.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-gray-400 text-center py-8">
                                    "No personal goals have been generated yet."
                                </p>
                            }
                            .into_view()
                        } else {
                            view! {
                                <ul class="space-y-3">
                                    {list.into_iter().map(|goal| view! {
                                        <li class="flex items-start space-x-3">
                                            <span class="text-primary-400">"•"</span>
                                            <span>{goal}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }
                            .into_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}
