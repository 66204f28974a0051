//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling, plus the event-listener registration helper used by every
//! component.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, EventTarget, Storage, Window};

use crate::config::css_classes;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Look up an element by id and cast it to a concrete element type.
///
/// Returns `None` when the element is missing or of an unexpected type,
/// letting each enhancement degrade to a no-op on pages without its
/// markup.
pub fn typed_element_by_id<T: JsCast>(id: &str) -> Option<T> {
    element_by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching a selector.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching a selector.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i)
            && let Ok(element) = node.dyn_into::<Element>()
        {
            elements.push(element);
        }
    }
    elements
}

/// Add a set of classes to an element.
pub fn add_classes(element: &Element, classes: &[&str]) {
    for class in classes {
        let _ = element.class_list().add_1(class);
    }
}

/// Remove a set of classes from an element.
pub fn remove_classes(element: &Element, classes: &[&str]) {
    for class in classes {
        let _ = element.class_list().remove_1(class);
    }
}

/// Reveal an element hidden with the utility class.
pub fn show(element: &Element) {
    remove_classes(element, &[css_classes::HIDDEN]);
}

/// Hide an element with the utility class.
pub fn hide(element: &Element) {
    add_classes(element, &[css_classes::HIDDEN]);
}

/// Register a persistent event listener on a target.
///
/// # Note
/// The closure is intentionally leaked using `forget()`: listeners wired at
/// startup live for the lifetime of the page, and the page is torn down by
/// navigation, not by Rust.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl Fn(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_elements_resolve_to_none() {
        assert!(element_by_id("not-part-of-the-test-page").is_none());
        assert!(query("#not-part-of-the-test-page").is_none());
        assert!(query_all(".not-part-of-the-test-page").is_empty());
    }
}
