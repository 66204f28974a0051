//! Browser enhancement layer for the stash file-storage pages.
//!
//! Loaded alongside the server-rendered markup, this crate wires the
//! interactive behavior the pages need: drag-and-drop file intake with
//! client-side validation, search/sort/category filtering over the file
//! table, a cosmetic upload progress bar, theme persistence, and small UX
//! affordances (notifications, clipboard copy, button loading states).
//!
//! The crate owns no markup. Every controller looks up its elements by the
//! fixed ids in [`config`] and quietly does nothing on pages where they
//! are absent, so one bundle serves every page of the site.

mod components;
mod config;
mod core;
mod models;
mod utils;

pub use components::clipboard::copy_to_clipboard;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point, invoked by the module loader once the WASM instance is
/// ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    components::theme::init();
    let _ = components::dropzone::init();
    let _ = components::file_table::init();
    components::upload_form::init();
}
