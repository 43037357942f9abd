//! App Root Component
//!
//! Routing, session/notice providers and route guards. Protected routes
//! resolve to the login view whenever the session is unauthenticated.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Chat, Goals, Journal, Login, Profile, Register};
use crate::state::session::SessionStore;
use crate::state::{provide_notices, provide_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Restore the session from localStorage and provide the stores to all
    // components before any route renders
    provide_session();
    provide_notices();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=HomeRedirect />
                        <Route path="/login" view=Login />
                        <Route path="/register" view=Register />
                        <Route path="/chat" view=|| view! { <Protected><Chat /></Protected> } />
                        <Route path="/journal" view=|| view! { <Protected><Journal /></Protected> } />
                        <Route path="/profile" view=|| view! { <Protected><Profile /></Protected> } />
                        <Route path="/goals" view=|| view! { <Protected><Goals /></Protected> } />
                        <Route path="/*any" view=HomeRedirect />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Redirect target for a protected route, if the session may not see it
fn guard_redirect(authenticated: bool) -> Option<&'static str> {
    if authenticated {
        None
    } else {
        Some("/login")
    }
}

/// Where `/` and unknown paths land for the current session state
fn home_target(authenticated: bool) -> &'static str {
    if authenticated {
        "/chat"
    } else {
        "/login"
    }
}

/// Gate for routes that require an authenticated session
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    view! {
        {move || {
            match guard_redirect(session.is_authenticated()) {
                None => children().into_view(),
                Some(path) => view! { <Redirect path=path /> }.into_view(),
            }
        }}
    }
}

/// Landing and catch-all: chat when authenticated, login otherwise
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    view! {
        {move || {
            let path = home_target(session.is_authenticated());
            view! { <Redirect path=path /> }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route_resolves_to_login_when_unauthenticated() {
        let runtime = create_runtime();

        let store = SessionStore::new();
        assert_eq!(guard_redirect(store.is_authenticated()), Some("/login"));

        store.log_in(crate::state::session::Credentials::new("ana", "secret"));
        assert_eq!(guard_redirect(store.is_authenticated()), None);

        // Logging out closes the gate again
        store.log_out();
        assert_eq!(guard_redirect(store.is_authenticated()), Some("/login"));

        runtime.dispose();
    }

    #[test]
    fn test_home_follows_session_state() {
        assert_eq!(home_target(false), "/login");
        assert_eq!(home_target(true), "/chat");
    }
}
