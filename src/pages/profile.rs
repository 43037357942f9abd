//! Profile Page
//!
//! Read-only view over the server-computed personality profile: emotion
//! scores, Big Five traits, a tendency label and an enneagram summary. Each
//! panel degrades on its own when its field is absent from the response.

use leptos::*;

use crate::api;
use crate::api::client::Profile as ProfileData;
use crate::components::{EmotionBarChart, Loading, TraitRadarChart};
use crate::state::session::SessionStore;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    let (profile, set_profile) = create_signal(None::<ProfileData>);
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let credentials = session.credentials();
        spawn_local(async move {
            match api::fetch_profile(&credentials).await {
                Ok(perfil) => set_profile.set(perfil),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-4xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Personality Profile"</h1>
                <p class="text-gray-400 mt-1">"Computed by EmotionAI from your conversations and journal"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(profile) = profile.get() {
                    view! { <ProfilePanels profile=profile /> }.into_view()
                } else {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 text-center text-gray-400">
                            "No profile found yet. Keep chatting and journaling."
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// The four independent profile panels
#[component]
fn ProfilePanels(profile: ProfileData) -> impl IntoView {
    view! {
        <div class="space-y-6">
            // Tendency label
            <div class="bg-gray-800 rounded-xl p-6 text-center">
                <h2 class="text-sm text-gray-400 uppercase tracking-wide mb-2">"Tendency"</h2>
                <p class="text-2xl font-semibold">
                    {profile.tendencia.unwrap_or_else(|| "Unknown".to_string())}
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                // Emotion bar chart
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Emotional Profile"</h2>
                    {match profile.perfil_emocional {
                        Some(scores) => view! { <EmotionBarChart scores=scores /> }.into_view(),
                        None => not_available("Emotion scores not available yet."),
                    }}
                </section>

                // Big Five radar chart
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Big Five"</h2>
                    {match profile.big_five {
                        Some(traits) => view! { <TraitRadarChart traits=traits /> }.into_view(),
                        None => not_available("Trait scores not available yet."),
                    }}
                </section>
            </div>

            // Enneagram summary
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Enneagram"</h2>
                {match profile.eneagrama {
                    Some(enneagram) => view! {
                        <div class="space-y-3">
                            <p>
                                <span class="font-semibold">"Type: "</span>
                                {enneagram.enneagram_type}
                            </p>
                            <p>
                                <span class="font-semibold">"Description: "</span>
                                {enneagram.description}
                            </p>
                            <p>
                                <span class="font-semibold">"Recommendation: "</span>
                                {enneagram.recommendation}
                            </p>
                        </div>
                    }
                    .into_view(),
                    None => not_available("The enneagram has not been calculated yet."),
                }}
            </section>
        </div>
    }
}

fn not_available(message: &'static str) -> View {
    view! {
        <p class="text-gray-400 py-8 text-center">{message}</p>
    }
    .into_view()
}
