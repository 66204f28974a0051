//! Form handling and page glue.
//!
//! The upload form gets the full treatment: a submit-time validation gate,
//! a spinner loading state, the cosmetic progress simulation, a short
//! delay before the native submission, and an unconditional fallback that
//! restores the button (and cancels the simulation) if nothing else does.
//! Every other form only gets the loading state and fallback. Also wires
//! the delete-confirmation guard and dismisses server-rendered flash
//! messages.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, MouseEvent};

use crate::components::dropzone::candidate_from;
use crate::components::notify::{self, NotificationKind};
use crate::components::progress::ProgressDriver;
use crate::config::{
    CONFIRM_SELECTOR, FLASH_ALERT_SELECTOR, UPLOAD_POLICY, element_ids, timing,
};
use crate::core::validate::{self, ValidationResult};
use crate::utils::dom;

/// Wire every form on the page, the confirmation guards, and the flash
/// dismissal timer.
pub fn init() {
    for form in dom::query_all("form") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        if form.id() == element_ids::UPLOAD_FORM {
            wire_upload_form(form);
        } else {
            wire_plain_form(form);
        }
    }

    wire_confirm_guards();
    dismiss_flash_messages();
}

/// The upload form intercepts submission: validate the selected file,
/// enter the loading state, start the simulation, and trigger the native
/// submission after a short delay.
fn wire_upload_form(form: HtmlFormElement) {
    let progress = ProgressDriver::new();

    dom::listen::<Event>(form.as_ref(), "submit", {
        let form = form.clone();
        move |event| {
            event.prevent_default();

            let Some(button) = submit_button(&form) else {
                return;
            };
            if !selected_file_passes() {
                return;
            }

            let idle_label = engage_loading(&button, "Uploading...");
            progress.start();

            // Let the loading state paint before the page starts
            // navigating. A programmatic submit does not refire this
            // handler.
            let pending = form.clone();
            Timeout::new(timing::SUBMIT_DELAY_MS, move || {
                let _ = pending.submit();
            })
            .forget();

            // Unconditional fallback against a wedged submission: restore
            // the button and cancel the cosmetic ticker.
            let progress = progress.clone();
            Timeout::new(timing::BUTTON_RESET_MS, move || {
                progress.stop();
                restore_button(&button, &idle_label);
            })
            .forget();
        }
    });
}

/// Plain forms submit natively; they only get the loading state and the
/// fallback reset.
fn wire_plain_form(form: HtmlFormElement) {
    dom::listen::<Event>(form.as_ref(), "submit", {
        let form = form.clone();
        move |_| {
            let Some(button) = submit_button(&form) else {
                return;
            };
            let idle_label = engage_loading(&button, "Loading...");
            Timeout::new(timing::BUTTON_RESET_MS, move || {
                restore_button(&button, &idle_label);
            })
            .forget();
        }
    });
}

/// Submit-time validation gate. A missing file blocks silently (the
/// picker is right there); a failing file raises the rejection
/// notification.
fn selected_file_passes() -> bool {
    let Some(input) = dom::typed_element_by_id::<HtmlInputElement>(element_ids::FILE_INPUT) else {
        return false;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return false;
    };

    match validate::validate(&candidate_from(&file), &UPLOAD_POLICY) {
        ValidationResult::Accepted => true,
        ValidationResult::Rejected(reason) => {
            notify::notify(reason.message(), NotificationKind::Error);
            false
        }
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector("button[type='submit']")
        .ok()
        .flatten()?
        .dyn_into::<HtmlButtonElement>()
        .ok()
}

/// Swap a button to its spinner label and disable it, returning the idle
/// markup for the eventual restore.
fn engage_loading(button: &HtmlButtonElement, label: &str) -> String {
    let idle = button.inner_html();
    button.set_inner_html(&format!(
        r#"<span class="spinner-border spinner-border-sm me-2"></span>{label}"#
    ));
    button.set_disabled(true);
    idle
}

fn restore_button(button: &HtmlButtonElement, idle_label: &str) {
    button.set_inner_html(idle_label);
    button.set_disabled(false);
}

/// Click guard for destructive controls: cancel unless the user confirms.
fn wire_confirm_guards() {
    for element in dom::query_all(CONFIRM_SELECTOR) {
        let message = element
            .get_attribute("data-confirm")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Are you sure you want to delete this file?".to_string());

        dom::listen::<MouseEvent>(element.as_ref(), "click", move |event| {
            let confirmed = dom::window()
                .and_then(|w| w.confirm_with_message(&message).ok())
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
                event.stop_propagation();
            }
        });
    }
}

/// Server-rendered flash alerts are removed shortly after load.
fn dismiss_flash_messages() {
    let alerts = dom::query_all(FLASH_ALERT_SELECTOR);
    if alerts.is_empty() {
        return;
    }
    Timeout::new(timing::FLASH_DISMISS_MS, move || {
        for alert in alerts {
            alert.remove();
        }
    })
    .forget();
}
