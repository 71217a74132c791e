//! Timer state machine.
//!
//! `TimerState` holds the countdown data and implements every transition as a
//! plain mutation. It performs no scheduling and raises no signals itself;
//! the [`Countdown`](super::Countdown) controller watches the fields it
//! changes and drives the tick scheduler and the alerter from them.

use super::error::StateError;

/// Full circle in degrees.
///
pub const FULL_SWEEP_DEGREES: f64 = 360.0;

/// Whether the completion alert is currently signalling.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AlertState {
    #[default]
    Idle,
    Alerting,
}

/// Coarse phase of the timer, derived from its fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Complete,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Complete => "complete",
        }
    }
}

/// Result of a single countdown tick.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TickOutcome {
    /// The timer was not running.
    Ignored,
    Decremented,
    Completed,
}

/// Countdown data.
///
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TimerState {
    remaining_seconds: u64,
    is_running: bool,
    is_complete: bool,
    arc_sweep_degrees: f64,
    alert: AlertState,
}

impl TimerState {
    pub fn new() -> Self {
        TimerState::default()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Degrees of arc represented by one second, fixed when the countdown
    /// starts.
    ///
    pub fn arc_sweep_degrees(&self) -> f64 {
        self.arc_sweep_degrees
    }

    pub fn alert(&self) -> AlertState {
        self.alert
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else if self.is_running {
            Phase::Running
        } else if self.arc_sweep_degrees > 0.0 && self.remaining_seconds > 0 {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    /// Visual sweep of the progress arc in degrees.
    ///
    pub fn sweep_degrees(&self) -> f64 {
        (self.remaining_seconds as f64 * self.arc_sweep_degrees).min(FULL_SWEEP_DEGREES)
    }

    /// Whether the progress arc should use the alert color.
    ///
    pub fn is_arc_urgent(&self, threshold: u64) -> bool {
        self.is_running && self.remaining_seconds < threshold
    }

    /// Whether the time text should use the alert color.
    ///
    pub fn is_text_urgent(&self, threshold: u64) -> bool {
        self.remaining_seconds > 0 && self.remaining_seconds < threshold
    }

    pub fn can_start(&self) -> bool {
        self.remaining_seconds > 0
    }

    /// Add `delta_seconds` to the countdown.
    ///
    /// While stopped this clears completion, silences the alert and drops the
    /// per-second angle so the next start measures the new total. While
    /// running the per-second angle is re-based on the new total, refilling
    /// the arc and keeping it in step with the remaining fraction.
    ///
    pub fn add_time(&mut self, delta_seconds: u64) {
        self.remaining_seconds = self.remaining_seconds.saturating_add(delta_seconds);
        if self.is_running {
            self.arc_sweep_degrees = per_second_degrees(self.remaining_seconds);
        } else {
            self.is_complete = false;
            self.arc_sweep_degrees = 0.0;
            self.alert = AlertState::Idle;
        }
    }

    /// Start or resume the countdown.
    ///
    pub fn start(&mut self) -> Result<(), StateError> {
        if !self.can_start() {
            return Err(StateError::NothingToCount);
        }
        if self.arc_sweep_degrees == 0.0 {
            self.arc_sweep_degrees = per_second_degrees(self.remaining_seconds);
        }
        self.is_running = true;
        self.is_complete = false;
        self.alert = AlertState::Idle;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    pub fn reset(&mut self) {
        *self = TimerState::default();
    }

    pub fn dismiss(&mut self) {
        self.is_complete = false;
        self.alert = AlertState::Idle;
    }

    /// Advance the countdown by one second.
    ///
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Ignored;
        }
        if self.remaining_seconds >= 1 {
            self.remaining_seconds -= 1;
            if self.remaining_seconds > 0 {
                return TickOutcome::Decremented;
            }
        }
        self.complete();
        TickOutcome::Completed
    }

    fn complete(&mut self) {
        self.is_running = false;
        self.is_complete = true;
        self.alert = AlertState::Alerting;
    }
}

fn per_second_degrees(total_seconds: u64) -> f64 {
    if total_seconds == 0 {
        0.0
    } else {
        FULL_SWEEP_DEGREES / total_seconds as f64
    }
}
