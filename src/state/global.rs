//! Global Application State
//!
//! One `AppState` is created at startup and provided through Leptos context.
//! The session store sits inside a signal so every view and the navbar
//! re-render when it is mutated through the store's own entry points.

use leptos::*;

use crate::api::ApiClient;
use crate::config::Config;
use crate::state::session::{Session, SessionStore};

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Client for the Quiz Master server
    pub api: ApiClient,
    /// Session store; mutate only via `set_user` / `persist_login` / `logout`
    pub store: RwSignal<SessionStore>,
    /// Error message to display
    pub error: ToastSlot,
    /// Success message (for toasts)
    pub success: ToastSlot,
}

/// One toast message plus the generation of its latest post.
///
/// A timer only clears the message it was started for.
#[derive(Clone, Copy)]
pub struct ToastSlot {
    pub message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            generation: store_value(0),
        }
    }

    /// Replace the message, returning its generation
    pub fn post(&self, message: &str) -> u64 {
        self.generation.update_value(|generation| *generation += 1);
        self.message.set(Some(message.to_string()));
        self.generation.get_value()
    }

    /// Clear the message if nothing was posted after `issued`
    pub fn expire(&self, issued: u64) {
        if self.generation.get_value() == issued {
            self.message.set(None);
        }
    }

    /// Post a message that clears itself after `timeout_ms`
    pub fn show(&self, message: &str, timeout_ms: u32) {
        let issued = self.post(message);
        let slot = *self;
        gloo_timers::callback::Timeout::new(timeout_ms, move || slot.expire(issued)).forget();
    }
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the state from configuration and provide it to the component tree
pub fn provide_app_state(config: &Config) {
    let mut store = SessionStore::open_browser(config.session.storage_key.clone());
    store.set_user();

    let state = AppState {
        api: ApiClient::from_config(config),
        store: create_rw_signal(store),
        error: ToastSlot::new(),
        success: ToastSlot::new(),
    };

    provide_context(state);
}

/// Fetch the state provided by [`provide_app_state`]
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    /// Snapshot of the current session (tracked)
    pub fn session(&self) -> Session {
        self.store.with(|store| store.session().clone())
    }

    /// Current token, for authenticated requests (untracked)
    pub fn auth_token(&self) -> Option<String> {
        self.store
            .with_untracked(|store| store.session().auth_token.clone())
    }

    /// End the session
    pub fn logout(&self) {
        self.store.update(|store| store.logout());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.show(message, 3000);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.show(message, 5000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{MemoryStorage, SessionStorage};
    use std::rc::Rc;

    #[test]
    fn test_logout_through_signal() {
        let runtime = create_runtime();

        let storage = Rc::new(MemoryStorage::default());
        storage.set_item("user", r#"{"token":"abc","role":"admin","id":1}"#).unwrap();
        let mut store = SessionStore::new(storage.clone(), "user");
        store.set_user();

        let state = AppState {
            api: ApiClient::new("", "Authentication-Token"),
            store: create_rw_signal(store),
            error: ToastSlot::new(),
            success: ToastSlot::new(),
        };
        assert!(state.session().is_logged_in);
        assert_eq!(state.auth_token().as_deref(), Some("abc"));

        state.logout();
        assert_eq!(state.session(), Session::default());
        assert_eq!(storage.get_item("user").unwrap(), None);

        runtime.dispose();
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        let runtime = create_runtime();
        let slot = ToastSlot::new();

        let first = slot.post("Invalid Password");
        let second = slot.post("Invalid Email");
        assert_ne!(first, second);

        slot.expire(first);
        assert_eq!(slot.message.get_untracked().as_deref(), Some("Invalid Email"));

        slot.expire(second);
        assert_eq!(slot.message.get_untracked(), None);

        runtime.dispose();
    }
}
