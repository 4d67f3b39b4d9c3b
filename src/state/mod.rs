//! State Management
//!
//! Global application state and the session store.

pub mod global;
pub mod session;

pub use global::{provide_app_state, use_app_state, AppState, ToastSlot};
pub use session::{Session, SessionRecord, SessionStorage, SessionStore, UserId};
