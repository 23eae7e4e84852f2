//! Persisted theme preference

use std::collections::HashMap;

use super::Theme;
use crate::error::BackdropError;

/// Key-value store holding page preferences (`localStorage` in the browser)
pub trait PreferenceStore {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), BackdropError>;
}

/// In-memory store for tests and hosts without storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackdropError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme preference persisted under a single key
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Create a preference backed by `store`
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Saved theme, tactical when nothing (or something unknown) is stored
    pub fn load(&self) -> Theme {
        Theme::from_attribute(self.store.get(&self.key).as_deref())
    }

    /// Flip `current`, persist the result and return it
    pub fn toggle(&mut self, current: Theme) -> Result<Theme, BackdropError> {
        let next = current.toggled();
        self.store.set(&self.key, next.id())?;
        Ok(next)
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            Some("light".to_string())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), BackdropError> {
            Err(BackdropError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_defaults_to_tactical() {
        let pref = ThemePreference::new(MemoryStore::new(), "theme");
        assert_eq!(pref.load(), Theme::Tactical);
    }

    #[test]
    fn test_toggle_persists() {
        let mut pref = ThemePreference::new(MemoryStore::new(), "theme");
        let theme = pref.toggle(pref.load()).unwrap();
        assert_eq!(theme, Theme::Light);
        assert_eq!(pref.store().get("theme").as_deref(), Some("light"));
        assert_eq!(pref.load(), Theme::Light);

        let theme = pref.toggle(theme).unwrap();
        assert_eq!(theme, Theme::Tactical);
        assert_eq!(pref.store().get("theme").as_deref(), Some("tactical"));
    }

    #[test]
    fn test_unknown_stored_value() {
        let mut store = MemoryStore::new();
        store.set("theme", "sepia").unwrap();
        let pref = ThemePreference::new(store, "theme");
        assert_eq!(pref.load(), Theme::Tactical);
    }

    #[test]
    fn test_toggle_storage_failure() {
        let mut pref = ThemePreference::new(ReadOnlyStore, "theme");
        assert_eq!(pref.load(), Theme::Light);
        let err = pref.toggle(Theme::Light).unwrap_err();
        assert!(matches!(err, BackdropError::Storage(_)));
    }
}
