use std::{cell::RefCell, collections::HashMap, rc::Rc};
use web_sys::{Storage, Window};

use crate::api::SessionUser;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Host builds (tests) have no browser; touching `web_sys::window` there aborts.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Persistent string storage for the session token and cached user.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every call so it is safe to construct off-browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn persist_session(
    store: &dyn KeyValueStore,
    token: &str,
    user: &SessionUser,
) -> Result<(), String> {
    let serialized =
        serde_json::to_string(user).map_err(|e| format!("Failed to serialize user: {}", e))?;
    store.set(TOKEN_KEY, token)?;
    store.set(USER_KEY, &serialized)
}

pub fn stored_token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
