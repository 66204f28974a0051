//! Transient, non-blocking notifications.
//!
//! Each call appends an independent fixed-position alert to the body;
//! alerts stack, are dismissible by click, and remove themselves after a
//! fixed interval regardless of interaction.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::timing;
use crate::utils::dom;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
        }
    }
}

/// Show a transient notification. Multiple calls stack independently; no
/// deduplication is attempted.
pub fn notify(message: &str, kind: NotificationKind) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(alert) = document.create_element("div") else {
        return;
    };

    alert.set_class_name(&format!(
        "alert {} alert-dismissible fade show position-fixed",
        kind.css_class()
    ));
    if let Some(style) = alert.dyn_ref::<HtmlElement>().map(|a| a.style()) {
        let _ = style.set_property("top", "20px");
        let _ = style.set_property("right", "20px");
        let _ = style.set_property("z-index", "9999");
    }
    alert.set_text_content(Some(message));

    if let Ok(close) = document.create_element("button") {
        close.set_class_name("btn-close");
        let _ = close.set_attribute("type", "button");
        let _ = close.set_attribute("aria-label", "Close");
        let dismissed: Element = alert.clone();
        dom::listen::<MouseEvent>(close.as_ref(), "click", move |_| dismissed.remove());
        let _ = alert.append_child(&close);
    }

    let _ = body.append_child(&alert);

    let expired = alert;
    Timeout::new(timing::NOTIFICATION_DISMISS_MS, move || expired.remove()).forget();
}
