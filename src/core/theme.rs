//! Theme resolution and toggling.
//!
//! The effective theme is a pure function of the stored preference and the
//! system dark-mode signal: an explicit preference always wins, absence
//! means "follow the system". The store is written only by explicit
//! toggles; system-theme changes never persist anything.

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::PreferenceError;
use crate::core::prefs::PreferenceStore;
use crate::models::{Theme, ThemePreference};

/// Read the stored preference, if any.
pub fn load_preference(store: &dyn PreferenceStore) -> Option<ThemePreference> {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|token| ThemePreference::from_token(&token))
}

/// Persist an explicit preference.
pub fn save_preference(
    store: &dyn PreferenceStore,
    preference: ThemePreference,
) -> Result<(), PreferenceError> {
    store.set(THEME_STORAGE_KEY, preference.as_token())
}

/// Resolve the effective theme from the stored preference and the sampled
/// system signal.
pub fn resolve(stored: Option<ThemePreference>, system_dark: bool) -> Theme {
    match stored {
        Some(preference) => preference.theme(),
        None if system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Flip the current theme and persist the result as an explicit
/// preference. Returns the new effective theme; a failed write still
/// applies the new theme for this page view.
pub fn toggle(store: &dyn PreferenceStore, current: Theme) -> Theme {
    let next = current.flipped();
    let _ = save_preference(store, next.into());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::memory::MemoryStore;

    #[test]
    fn test_stored_preference_wins_over_system() {
        assert_eq!(
            resolve(Some(ThemePreference::Light), true),
            Theme::Light
        );
        assert_eq!(
            resolve(Some(ThemePreference::Dark), false),
            Theme::Dark
        );
    }

    #[test]
    fn test_absent_preference_follows_system() {
        assert_eq!(resolve(None, true), Theme::Dark);
        assert_eq!(resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_load_ignores_unknown_tokens() {
        let store = MemoryStore::with(THEME_STORAGE_KEY, "sepia");
        assert_eq!(load_preference(&store), None);
    }

    #[test]
    fn test_toggle_persists_one_write() {
        let store = MemoryStore::new();
        let next = toggle(&store, Theme::Light);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.write_count(), 1);
        assert_eq!(load_preference(&store), Some(ThemePreference::Dark));

        let back = toggle(&store, next);
        assert_eq!(back, Theme::Light);
        assert_eq!(store.write_count(), 2);
        assert_eq!(load_preference(&store), Some(ThemePreference::Light));
    }
}
