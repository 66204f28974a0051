//! Progress bar driver for the upload form.
//!
//! Runs the cosmetic progress machine on a fixed browser interval and
//! mirrors its state into the bar, percentage text, and status line. The
//! interval is cleared once the machine reaches its cap or the driver is
//! stopped. The simulated value never completes; the real submission
//! supersedes it by navigating away.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlElement;

use crate::config::{PROGRESS_MAX_INCREMENT, element_ids, timing};
use crate::core::progress::{Phase, ProgressSimulator};
use crate::utils::dom;

/// Cancellable handle over a running simulation.
///
/// Cloning shares the underlying state, so the form controller can keep
/// one handle for starting and another inside its fallback reset.
#[derive(Clone, Default)]
pub struct ProgressDriver {
    inner: Rc<RefCell<DriverState>>,
}

#[derive(Default)]
struct DriverState {
    simulator: ProgressSimulator,
    interval_id: Option<i32>,
}

impl ProgressDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the progress container and start ticking. Restarting an
    /// already-running driver resets the simulation.
    pub fn start(&self) {
        let Some(container) = dom::element_by_id(element_ids::UPLOAD_PROGRESS) else {
            return;
        };
        let Some(window) = dom::window() else {
            return;
        };
        dom::show(&container);

        let mut state = self.inner.borrow_mut();
        clear_interval(&mut state);
        state.simulator.begin();
        render(&state.simulator);

        let driver = self.clone();
        let tick = Closure::wrap(Box::new(move || driver.tick()) as Box<dyn Fn()>);
        if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            timing::PROGRESS_TICK_MS as i32,
        ) {
            state.interval_id = Some(id);
        }
        // Leaked like every other page-lifetime callback; the interval id
        // is what gets cancelled.
        tick.forget();
    }

    fn tick(&self) {
        let mut state = self.inner.borrow_mut();
        state
            .simulator
            .advance(js_sys::Math::random() * PROGRESS_MAX_INCREMENT);
        render(&state.simulator);

        if state.simulator.phase() == Phase::Finalizing {
            clear_interval(&mut state);
        }
    }

    /// Cancel the tick. Idempotent; safe to call from any terminal path.
    pub fn stop(&self) {
        let mut state = self.inner.borrow_mut();
        state.simulator.halt();
        clear_interval(&mut state);
    }
}

fn clear_interval(state: &mut DriverState) {
    if let Some(id) = state.interval_id.take()
        && let Some(window) = dom::window()
    {
        window.clear_interval_with_handle(id);
    }
}

/// Mirror the machine into the bar width, percent text, and status line.
fn render(simulator: &ProgressSimulator) {
    let percent = simulator.display_percent();

    if let Some(bar) = dom::typed_element_by_id::<HtmlElement>(element_ids::PROGRESS_BAR) {
        let _ = bar.style().set_property("width", &format!("{percent}%"));
    }
    if let Some(text) = dom::element_by_id(element_ids::PROGRESS_TEXT) {
        text.set_text_content(Some(&format!("{percent}%")));
    }
    if let Some(status) = dom::element_by_id(element_ids::UPLOAD_STATUS) {
        status.set_text_content(Some(&simulator.status_text()));
    }
}
