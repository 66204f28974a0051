//! Simulated upload progress.
//!
//! The displayed percentage has no relationship to actual transfer bytes;
//! it exists purely as feedback while the native submission runs. The
//! machine is tick-driven with the increment supplied by the caller, so
//! tests advance it deterministically without timers.

use crate::config::PROGRESS_CAP_PERCENT;

/// Lifecycle of the simulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not started.
    #[default]
    Idle,
    /// Ticking upward.
    Running,
    /// Clamped at the cap; waiting for the real submission to finish.
    Finalizing,
    /// Cancelled.
    Stopped,
}

/// Cosmetic progress state machine.
///
/// `begin -> advance* -> (Finalizing | halt)`. The value never passes the
/// cap; the remaining span is filled by the page navigating away when the
/// real upload completes.
#[derive(Clone, Debug, Default)]
pub struct ProgressSimulator {
    percent: f64,
    phase: Phase,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the simulation at zero.
    pub fn begin(&mut self) {
        self.percent = 0.0;
        self.phase = Phase::Running;
    }

    /// Advance by `increment` percentage points.
    ///
    /// Hitting the cap clamps the value and moves to [`Phase::Finalizing`];
    /// once finalizing (or stopped), further ticks are ignored.
    pub fn advance(&mut self, increment: f64) {
        if self.phase != Phase::Running {
            return;
        }
        self.percent += increment;
        if self.percent > PROGRESS_CAP_PERCENT {
            self.percent = PROGRESS_CAP_PERCENT;
            self.phase = Phase::Finalizing;
        }
    }

    /// Cancel the simulation. Idempotent from every phase.
    pub fn halt(&mut self) {
        self.phase = Phase::Stopped;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current value in percent, rounded for display.
    pub fn display_percent(&self) -> u32 {
        self.percent.round() as u32
    }

    /// Status line matching the current phase.
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::Finalizing => "Finalizing upload...".to_string(),
            _ => format!("Uploading... {}%", self.display_percent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_starts_at_zero() {
        let mut sim = ProgressSimulator::new();
        sim.begin();
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.display_percent(), 0);
    }

    #[test]
    fn test_advances_until_cap() {
        let mut sim = ProgressSimulator::new();
        sim.begin();
        sim.advance(40.0);
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.display_percent(), 40);
        sim.advance(40.0);
        assert_eq!(sim.phase(), Phase::Running);
        // 80 + 11 crosses the 90% cap.
        sim.advance(11.0);
        assert_eq!(sim.phase(), Phase::Finalizing);
        assert_eq!(sim.display_percent(), 90);
    }

    #[test]
    fn test_exact_cap_keeps_running() {
        let mut sim = ProgressSimulator::new();
        sim.begin();
        sim.advance(90.0);
        // The clamp triggers only when the cap is exceeded.
        assert_eq!(sim.phase(), Phase::Running);
        sim.advance(0.1);
        assert_eq!(sim.phase(), Phase::Finalizing);
    }

    #[test]
    fn test_ticks_ignored_after_finalizing() {
        let mut sim = ProgressSimulator::new();
        sim.begin();
        sim.advance(100.0);
        assert_eq!(sim.phase(), Phase::Finalizing);
        sim.advance(50.0);
        assert_eq!(sim.display_percent(), 90);
        assert_eq!(sim.phase(), Phase::Finalizing);
    }

    #[test]
    fn test_halt_is_idempotent() {
        let mut sim = ProgressSimulator::new();
        sim.halt();
        assert_eq!(sim.phase(), Phase::Stopped);
        sim.begin();
        sim.advance(10.0);
        sim.halt();
        sim.halt();
        assert_eq!(sim.phase(), Phase::Stopped);
        // Stopped machines ignore ticks.
        sim.advance(10.0);
        assert_eq!(sim.display_percent(), 10);
    }

    #[test]
    fn test_status_text() {
        let mut sim = ProgressSimulator::new();
        sim.begin();
        sim.advance(41.6);
        assert_eq!(sim.status_text(), "Uploading... 42%");
        sim.advance(100.0);
        assert_eq!(sim.status_text(), "Finalizing upload...");
    }
}
