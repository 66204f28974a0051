//! Drag-and-drop file intake.
//!
//! Governs the drop zone's highlight state, routes dropped files into the
//! native file input (so the eventual form submission carries exactly what
//! the user dropped), and runs the shared intake path: preview the first
//! file, validate it, and surface a rejection as an error notification.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{DragEvent, Element, Event, File, FileList, HtmlInputElement, MouseEvent};

use crate::components::notify::{self, NotificationKind};
use crate::config::{UPLOAD_POLICY, css_classes, element_ids};
use crate::core::validate::{self, ValidationResult};
use crate::models::CandidateFile;
use crate::utils::{dom, format};

/// Visual state of the drop zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DropZoneState {
    #[default]
    Idle,
    Highlighted,
}

impl DropZoneState {
    /// State after a drag event reaches the zone. Entering or hovering
    /// highlights (re-entry while highlighted is idempotent); leaving or
    /// dropping returns to idle unconditionally.
    fn after(event: &str) -> Self {
        match event {
            "dragenter" | "dragover" => Self::Highlighted,
            _ => Self::Idle,
        }
    }
}

const DRAG_EVENTS: &[&str] = &["dragenter", "dragover", "dragleave", "drop"];

/// Wire the drop zone and the native input's change event.
///
/// No-op unless both the zone and the input exist.
pub fn init() -> Option<()> {
    let zone = dom::element_by_id(element_ids::DROP_ZONE)?;
    let input = dom::typed_element_by_id::<HtmlInputElement>(element_ids::FILE_INPUT)?;
    let body = dom::document()?.body()?;

    // A stray drop anywhere on the page must never navigate away: default
    // handling and propagation are suppressed on the zone and the body for
    // every drag event.
    for event in DRAG_EVENTS {
        dom::listen::<DragEvent>(zone.as_ref(), event, |event| {
            event.prevent_default();
            event.stop_propagation();
        });
        dom::listen::<DragEvent>(body.as_ref(), event, |event| {
            event.prevent_default();
            event.stop_propagation();
        });
    }

    let state = Rc::new(Cell::new(DropZoneState::Idle));

    for event in DRAG_EVENTS {
        let zone_ref = zone.clone();
        let state = state.clone();
        let next = DropZoneState::after(event);
        dom::listen::<DragEvent>(zone.as_ref(), event, move |_| {
            state.set(next);
            match next {
                DropZoneState::Highlighted => {
                    dom::add_classes(&zone_ref, css_classes::DROP_HIGHLIGHT)
                }
                DropZoneState::Idle => dom::remove_classes(&zone_ref, css_classes::DROP_HIGHLIGHT),
            }
        });
    }

    // Drop: hand the file list to the native input, then run the intake
    // path once. No synthetic change event is dispatched; dispatching one
    // would run the intake a second time through the listener below.
    {
        let input = input.clone();
        dom::listen::<DragEvent>(zone.as_ref(), "drop", move |event| {
            let Some(files) = event.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            input.set_files(Some(&files));
            handle_selection(&files);
        });
    }

    // A plain click on the zone opens the native picker.
    {
        let input = input.clone();
        dom::listen::<MouseEvent>(zone.as_ref(), "click", move |_| input.click());
    }

    // Files picked through the native dialog take the same intake path as
    // dropped ones.
    {
        let picker = input.clone();
        dom::listen::<Event>(input.as_ref(), "change", move |_| {
            if let Some(files) = picker.files() {
                handle_selection(&files);
            }
        });
    }

    Some(())
}

/// Build a validation candidate from a browser `File`.
pub(crate) fn candidate_from(file: &File) -> CandidateFile {
    CandidateFile {
        name: file.name(),
        size_bytes: file.size() as u64,
        mime_type: file.type_(),
    }
}

/// Shared intake path: inspect the first file of a selection, render the
/// preview, validate, and notify on rejection. An empty selection does
/// nothing.
fn handle_selection(files: &FileList) {
    let Some(file) = files.get(0) else {
        return;
    };
    let candidate = candidate_from(&file);

    render_preview(&candidate);

    if let ValidationResult::Rejected(reason) = validate::validate(&candidate, &UPLOAD_POLICY) {
        notify::notify(reason.message(), NotificationKind::Error);
    }
}

/// Fill in and reveal the preview panel. Skipped unless the panel and its
/// text fields are all present; the icon slot is optional.
fn render_preview(candidate: &CandidateFile) {
    let Some(panel) = dom::element_by_id(element_ids::FILE_PREVIEW) else {
        return;
    };
    let Some(name) = dom::element_by_id(element_ids::FILE_NAME) else {
        return;
    };
    let Some(size) = dom::element_by_id(element_ids::FILE_SIZE) else {
        return;
    };
    let Some(kind) = dom::element_by_id(element_ids::FILE_TYPE) else {
        return;
    };

    name.set_text_content(Some(&candidate.name));
    size.set_text_content(Some(&format::human_size(candidate.size_bytes)));
    kind.set_text_content(Some(if candidate.mime_type.is_empty() {
        "Unknown"
    } else {
        &candidate.mime_type
    }));

    if let Some(icon) = dom::element_by_id(element_ids::FILE_ICON) {
        set_icon(&icon, format::icon_for_name(&candidate.name));
    }

    dom::show(&panel);
}

fn set_icon(slot: &Element, icon_classes: &str) {
    slot.set_inner_html("");
    if let Some(document) = dom::document()
        && let Ok(icon) = document.create_element("i")
    {
        icon.set_class_name(icon_classes);
        let _ = icon.set_attribute("style", "font-size: 3rem;");
        let _ = slot.append_child(&icon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_event_transitions() {
        assert_eq!(DropZoneState::after("dragenter"), DropZoneState::Highlighted);
        // Hovering while already highlighted lands in the same state.
        assert_eq!(DropZoneState::after("dragover"), DropZoneState::Highlighted);
        assert_eq!(DropZoneState::after("dragleave"), DropZoneState::Idle);
        assert_eq!(DropZoneState::after("drop"), DropZoneState::Idle);
    }
}
