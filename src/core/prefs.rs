//! Preference storage abstraction.
//!
//! Persistence is injected rather than reached for ambiently, so the theme
//! logic can be exercised in native tests against an in-memory store. The
//! browser-backed implementation lives in the component layer.

use crate::core::error::PreferenceError;

/// A tiny key/value store for user preferences.
pub trait PreferenceStore {
    /// Read a stored value, `None` when absent or storage is unreachable.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store used by tests.
#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// A `PreferenceStore` over a `HashMap`, with a write counter so tests
    /// can assert how often a preference was persisted.
    #[derive(Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::new();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub fn write_count(&self) -> usize {
            *self.writes.borrow()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }
}
