//! Client-side key-value storage holding the persisted session record.
//!
//! The login flow writes the record; this client only reads it. Storage
//! access stays here so the router itself never touches ambient state: the
//! caller loads a [`SessionRecord`] and passes it in explicitly.

use rim_auth::SessionRecord;

/// Read side of string key-value storage (browser `localStorage` semantics).
pub trait SessionStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
}

/// Load the session context stored under `key`.
///
/// Storage failures, absence and malformed records all mean "no session".
pub fn load_session(store: &dyn SessionStore, key: &str) -> Option<SessionRecord> {
    match store.get_item(key) {
        Ok(raw) => SessionRecord::from_stored(raw.as_deref()),
        Err(err) => {
            tracing::warn!(error = %err, key, "session storage unavailable; treating as signed out");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use anyhow::anyhow;
    use web_sys::Storage;

    use super::SessionStore;

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserSessionStore;

    impl BrowserSessionStore {
        fn storage(&self) -> anyhow::Result<Storage> {
            let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
            window
                .local_storage()
                .map_err(|e| anyhow!("localStorage unavailable: {:?}", e))?
                .ok_or_else(|| anyhow!("localStorage unavailable"))
        }
    }

    impl SessionStore for BrowserSessionStore {
        fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.storage()?
                .get_item(key)
                .map_err(|e| anyhow!("localStorage.getItem failed: {:?}", e))
        }
    }
}
