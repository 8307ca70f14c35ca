use web_sys::window;

pub const YOUTUBE_KEY_NAME: &str = "yt_api_key";
pub const GEMINI_KEY_NAME: &str = "gemini_api_key";

/// The two user-supplied credentials, passed explicitly into every API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiKeys {
    pub youtube: String,
    pub gemini: String,
}

impl ApiKeys {
    pub fn has_youtube(&self) -> bool {
        !self.youtube.trim().is_empty()
    }

    pub fn has_gemini(&self) -> bool {
        !self.gemini.trim().is_empty()
    }
}

/// Durable string storage for the API keys.
pub trait KeyStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str) -> Result<(), String>;
}

pub fn load_api_keys(store: &impl KeyStore) -> ApiKeys {
    ApiKeys {
        youtube: store.get(YOUTUBE_KEY_NAME).unwrap_or_default(),
        gemini: store.get(GEMINI_KEY_NAME).unwrap_or_default(),
    }
}

pub fn store_api_keys(store: &impl KeyStore, keys: &ApiKeys) {
    for (name, value) in [(YOUTUBE_KEY_NAME, &keys.youtube), (GEMINI_KEY_NAME, &keys.gemini)] {
        if let Err(e) = store.set(name, value) {
            log::warn!("Could not persist {name}: {e}");
        }
    }
}

/// `window.localStorage`, so keys survive page reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalKeyStore;

impl LocalKeyStore {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyStore for LocalKeyStore {
    fn get(&self, name: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(name).ok().flatten())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), String> {
        match Self::storage() {
            Some(storage) => storage
                .set_item(name, value)
                .map_err(|_| format!("Failed to store {name}")),
            None => Err("Local storage is not available".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyStore for MemoryStore {
        fn get(&self, name: &str) -> Option<String> {
            self.0.borrow().get(name).cloned()
        }

        fn set(&self, name: &str, value: &str) -> Result<(), String> {
            self.0.borrow_mut().insert(name.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_keys_load_as_empty() {
        let keys = load_api_keys(&MemoryStore::default());
        assert_eq!(keys, ApiKeys::default());
        assert!(!keys.has_youtube());
        assert!(!keys.has_gemini());
    }

    #[test]
    fn stored_keys_use_fixed_names_and_reload() {
        let store = MemoryStore::default();
        let keys = ApiKeys {
            youtube: "yt-123".to_string(),
            gemini: "gm-456".to_string(),
        };
        store_api_keys(&store, &keys);

        assert_eq!(store.get("yt_api_key").as_deref(), Some("yt-123"));
        assert_eq!(store.get("gemini_api_key").as_deref(), Some("gm-456"));
        assert_eq!(load_api_keys(&store), keys);
    }

    #[test]
    fn whitespace_only_key_counts_as_missing() {
        let keys = ApiKeys {
            youtube: "   ".to_string(),
            gemini: "x".to_string(),
        };
        assert!(!keys.has_youtube());
        assert!(keys.has_gemini());
    }
}
