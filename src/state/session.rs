//! Session Store
//!
//! Reactive authentication state shared by every view. The store is the only
//! state that outlives a single page load: it is written to localStorage on
//! every change and read back once at startup.

use leptos::*;

/// localStorage key for the authentication flag
const LOGGED_IN_KEY: &str = "emotionai_logged_in";
/// localStorage key for the credentials record (JSON)
const CREDENTIALS_KEY: &str = "emotionai_credentials";

/// Username and password pair used to scope backend calls.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// Session state provided to all components.
///
/// Invariant: when `authenticated` is false the credentials are empty. All
/// writes go through [`log_in`](SessionStore::log_in) and
/// [`log_out`](SessionStore::log_out), which maintain it.
#[derive(Clone, Copy)]
pub struct SessionStore {
    authenticated: RwSignal<bool>,
    credentials: RwSignal<Credentials>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            authenticated: create_rw_signal(false),
            credentials: create_rw_signal(Credentials::default()),
        }
    }

    /// Reactive read of the authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Reactive read of the current credentials.
    pub fn credentials(&self) -> Credentials {
        self.credentials.get()
    }

    /// Mark the session authenticated with the supplied credentials.
    pub fn log_in(&self, credentials: Credentials) {
        self.credentials.set(credentials);
        self.authenticated.set(true);
    }

    /// Reset to unauthenticated with empty credentials.
    pub fn log_out(&self) {
        self.authenticated.set(false);
        self.credentials.set(Credentials::default());
    }

    /// Restore session state from localStorage, if present.
    ///
    /// A stored flag without a parseable credentials record counts as
    /// unauthenticated.
    fn load(&self) {
        let Some(storage) = local_storage() else {
            return;
        };

        let logged_in = matches!(storage.get_item(LOGGED_IN_KEY), Ok(Some(v)) if v == "true");
        let credentials = storage
            .get_item(CREDENTIALS_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str::<Credentials>(&json).ok());

        match credentials {
            Some(creds) if logged_in && !creds.is_empty() => self.log_in(creds),
            _ => self.log_out(),
        }
    }

    /// Write the current state to localStorage.
    fn persist(&self, logged_in: bool, credentials: &Credentials) {
        let Some(storage) = local_storage() else {
            return;
        };

        let flag = if logged_in { "true" } else { "false" };
        let _ = storage.set_item(LOGGED_IN_KEY, flag);

        if let Ok(json) = serde_json::to_string(credentials) {
            let _ = storage.set_item(CREDENTIALS_KEY, &json);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Create the session store, restore it from localStorage and provide it to
/// the component tree. An effect persists every subsequent change.
pub fn provide_session() {
    let store = SessionStore::new();
    store.load();
    provide_context(store);

    create_effect(move |_| {
        let logged_in = store.authenticated.get();
        let credentials = store.credentials.get();
        store.persist(logged_in, &credentials);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_authenticated_state() {
        let runtime = create_runtime();

        let store = SessionStore::new();
        assert!(!store.is_authenticated());

        store.log_in(Credentials::new("ana", "secret"));
        assert!(store.is_authenticated());
        assert_eq!(store.credentials().username, "ana");
        assert_eq!(store.credentials().password, "secret");

        runtime.dispose();
    }

    #[test]
    fn test_logout_always_clears_credentials() {
        let runtime = create_runtime();

        let store = SessionStore::new();
        store.log_in(Credentials::new("ana", "secret"));
        store.log_out();

        assert!(!store.is_authenticated());
        assert!(store.credentials().is_empty());

        // Logout from an already clean session stays clean
        store.log_out();
        assert!(!store.is_authenticated());
        assert!(store.credentials().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_credentials_roundtrip_json() {
        let creds = Credentials::new("ana", "secret");
        let json = serde_json::to_string(&creds).unwrap();
        let back: Credentials = serde_json::from_str(&json).unwrap();
        assert_eq!(creds, back);
    }
}
