//! Session Store
//!
//! The authenticated user's session and its single serialized record in
//! browser session storage. The record is the source of truth across page
//! reloads; the in-memory [`Session`] is only re-derived from it through
//! [`SessionStore::set_user`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Current authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub auth_token: Option<String>,
    pub is_logged_in: bool,
    pub role: Option<String>,
    pub user_id: Option<UserId>,
}

impl Session {
    fn from_record(record: &SessionRecord) -> Self {
        Self {
            auth_token: Some(record.token.clone()),
            is_logged_in: true,
            role: record.role.clone(),
            user_id: record.id.clone(),
        }
    }
}

/// User id as the server sent it; numeric ids and string ids are both kept
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Num(u64),
    Str(String),
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId::Num(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Num(id) => write!(f, "{}", id),
            UserId::Str(id) => f.write_str(id),
        }
    }
}

/// Persisted login record, as returned by `POST /login`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SessionRecord {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub id: Option<UserId>,
    /// Everything else the server sent (e.g. `email`), kept verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionRecord {
    /// Validate a login response body, keeping it verbatim for persistence
    pub fn from_json(body: &str) -> AppResult<(Self, String)> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let record: SessionRecord = serde_json::from_value(value.clone())
            .map_err(|e| AppError::Parse(format!("Invalid login response: {}", e)))?;
        Ok((record, value.to_string()))
    }
}

/// Key/value storage holding the session record
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// The browser's tab-scoped `window.sessionStorage`
pub struct BrowserSessionStorage {
    storage: web_sys::Storage,
}

impl BrowserSessionStorage {
    /// `None` when there is no window or the browser denies access
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.session_storage().ok()??;
        Some(Self { storage })
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.storage.get_item(key).map_err(AppError::storage)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage.set_item(key, value).map_err(AppError::storage)
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.storage.remove_item(key).map_err(AppError::storage)
    }
}

/// In-memory storage; used when `sessionStorage` is unavailable
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Owns the session and the storage it is synchronized with
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
    key: String,
    session: Session,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            session: Session::default(),
        }
    }

    /// Store backed by `sessionStorage`, or memory if the browser refuses
    pub fn open_browser(key: impl Into<String>) -> Self {
        let storage: Rc<dyn SessionStorage> = match BrowserSessionStorage::open() {
            Some(storage) => Rc::new(storage),
            None => {
                tracing::warn!("sessionStorage unavailable, session will not survive a reload");
                Rc::new(MemoryStorage::default())
            }
        };
        Self::new(storage, key)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Re-derive the session from the persisted record.
    ///
    /// Absent record: nothing changes. Unreadable record: nothing changes and
    /// a warning is logged. Returns whether a session was restored.
    pub fn set_user(&mut self) -> bool {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!("Not logged in: {}", e);
                return false;
            }
        };

        match serde_json::from_str::<Option<SessionRecord>>(&raw) {
            Ok(Some(record)) => {
                self.session = Session::from_record(&record);
                tracing::info!(user_id = ?record.id, role = ?record.role, "Session restored");
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Not logged in: {}", e);
                false
            }
        }
    }

    /// Persist a login record verbatim, then re-derive the session from it
    pub fn persist_login(&mut self, serialized: &str) -> AppResult<()> {
        self.storage.set_item(&self.key, serialized)?;
        if self.set_user() {
            Ok(())
        } else {
            Err(AppError::Parse("Stored login record is unreadable".to_string()))
        }
    }

    /// Clear the session and delete the persisted record
    pub fn logout(&mut self) {
        self.session = Session::default();
        if let Err(e) = self.storage.remove_item(&self.key) {
            tracing::warn!("Failed to remove session record: {}", e);
        }
        tracing::info!("Logged out");
    }
}
