//! Theme wiring: persistence, system signal, and the toggle button.
//!
//! The effective theme is resolved once at startup from the stored
//! preference and the sampled media query, then kept current by two
//! listeners: the toggle button (which persists an explicit preference)
//! and the system-theme change signal (applied only while no explicit
//! preference is stored, and never persisted).

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{MediaQueryListEvent, MouseEvent};

use crate::config::{DARK_SCHEME_QUERY, css_classes, element_ids};
use crate::core::error::PreferenceError;
use crate::core::prefs::PreferenceStore;
use crate::core::theme;
use crate::models::Theme;
use crate::utils::dom;

/// [`PreferenceStore`] backed by localStorage.
///
/// Degrades to "nothing stored" when storage is unreachable, which leaves
/// the page following the system theme.
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| PreferenceError::SaveFailed)
    }
}

/// Resolve and apply the startup theme, then wire the toggle button and
/// the system-theme subscription.
pub fn init() {
    let store = Rc::new(LocalStore);
    let media = dom::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
    let system_dark = media.as_ref().is_some_and(|m| m.matches());

    let current = Rc::new(Cell::new(theme::resolve(
        theme::load_preference(&*store),
        system_dark,
    )));
    apply(current.get());

    if let Some(button) = dom::element_by_id(element_ids::THEME_TOGGLE) {
        let store = store.clone();
        let current = current.clone();
        dom::listen::<MouseEvent>(button.as_ref(), "click", move |_| {
            let next = theme::toggle(&*store, current.get());
            current.set(next);
            apply(next);
        });
    }

    if let Some(media) = media {
        dom::listen::<MediaQueryListEvent>(media.as_ref(), "change", move |event| {
            // An explicit preference pins the theme; only preference-less
            // visitors follow live system changes.
            if theme::load_preference(&*store).is_none() {
                let next = if event.matches() {
                    Theme::Dark
                } else {
                    Theme::Light
                };
                current.set(next);
                apply(next);
            }
        });
    }
}

/// Mirror a theme into the body class and the toggle icon.
fn apply(theme: Theme) {
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        if theme.is_dark() {
            dom::add_classes(body.as_ref(), &[css_classes::DARK_THEME]);
        } else {
            dom::remove_classes(body.as_ref(), &[css_classes::DARK_THEME]);
        }
    }

    if let Some(icon) = dom::element_by_id(element_ids::THEME_ICON) {
        let (off, on) = if theme.is_dark() {
            (css_classes::ICON_MOON, css_classes::ICON_SUN)
        } else {
            (css_classes::ICON_SUN, css_classes::ICON_MOON)
        };
        dom::remove_classes(&icon, &[off]);
        dom::add_classes(&icon, &[on]);
    }
}
