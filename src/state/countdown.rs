//! Countdown controller.
//!
//! Owns the [`TimerState`] together with its two external effects: the
//! pending tick and the alert signal. Every operation mutates the timer and
//! then reconciles the effects with the new fields:
//!
//! - whenever `remaining_seconds` or `is_running` changes, the pending tick
//!   is cancelled and, if still running, replaced by a fresh one;
//! - entering the alerting state starts the alerter, leaving it cancels it.

use super::error::StateError;
use super::timer::{AlertState, TickOutcome, TimerState};
use crate::events::alert::{Alerter, VibrationPattern};
use crate::events::countdown::{Scheduler, TickHandle, TickId};
use log::*;
use std::time::Duration;

/// Default delay between countdown ticks.
///
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Countdown timing and alert settings.
///
#[derive(Debug, Clone)]
pub struct CountdownSettings {
    pub tick_interval: Duration,
    pub pattern: VibrationPattern,
    pub repeat_alert: bool,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        CountdownSettings {
            tick_interval: DEFAULT_TICK_INTERVAL,
            pattern: VibrationPattern::default(),
            repeat_alert: true,
        }
    }
}

/// Timer state plus its scheduled tick and alert signal.
///
pub struct Countdown {
    timer: TimerState,
    settings: CountdownSettings,
    scheduler: Box<dyn Scheduler>,
    alerter: Box<dyn Alerter>,
    pending: Option<TickHandle>,
    next_tick_id: u64,
}

impl Countdown {
    pub fn new(
        scheduler: Box<dyn Scheduler>,
        alerter: Box<dyn Alerter>,
        settings: CountdownSettings,
    ) -> Self {
        Countdown {
            timer: TimerState::new(),
            settings,
            scheduler,
            alerter,
            pending: None,
            next_tick_id: 0,
        }
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Id of the tick currently armed, if any.
    ///
    pub fn pending_tick(&self) -> Option<TickId> {
        self.pending.as_ref().map(TickHandle::id)
    }

    pub fn add_time(&mut self, delta_seconds: u64) {
        debug!("Adding {}s to countdown", delta_seconds);
        self.transition(|timer| timer.add_time(delta_seconds));
    }

    pub fn start(&mut self) -> Result<(), StateError> {
        let result = self.transition(TimerState::start);
        if result.is_ok() {
            info!(
                "Countdown started with {}s remaining",
                self.timer.remaining_seconds()
            );
        }
        result
    }

    pub fn pause(&mut self) {
        info!(
            "Countdown paused with {}s remaining",
            self.timer.remaining_seconds()
        );
        self.transition(TimerState::pause);
    }

    /// Pause when running, start otherwise.
    ///
    pub fn toggle(&mut self) -> Result<(), StateError> {
        if self.timer.is_running() {
            self.pause();
            Ok(())
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) {
        info!("Countdown reset");
        let was_alerting = self.timer.alert() == AlertState::Alerting;
        self.transition(TimerState::reset);
        if !was_alerting {
            self.alerter.cancel();
        }
    }

    /// Silence the alert and clear completion. Without a completion this only
    /// cancels a stray signal.
    ///
    pub fn dismiss(&mut self) {
        debug!("Dismissing completion alert");
        let was_alerting = self.timer.alert() == AlertState::Alerting;
        self.transition(TimerState::dismiss);
        if !was_alerting {
            self.alerter.cancel();
        }
    }

    /// Handle a delivered tick. Returns `false` when the tick was stale.
    ///
    pub fn on_tick(&mut self, id: TickId) -> bool {
        if self.pending_tick() != Some(id) {
            trace!("Dropping stale countdown tick {:?}", id);
            return false;
        }
        // Fired; release the handle before re-arming
        self.pending = None;
        if self.transition(TimerState::tick) == TickOutcome::Completed {
            info!("Countdown complete");
        }
        true
    }

    /// Cancel the pending tick and any alert. Called when the screen goes away.
    ///
    pub fn shutdown(&mut self) {
        self.pending = None;
        self.alerter.cancel();
    }

    fn transition<R>(&mut self, mutate: impl FnOnce(&mut TimerState) -> R) -> R {
        let before = (
            self.timer.remaining_seconds(),
            self.timer.is_running(),
            self.timer.alert(),
        );
        let result = mutate(&mut self.timer);
        let after = (
            self.timer.remaining_seconds(),
            self.timer.is_running(),
            self.timer.alert(),
        );

        match (before.2, after.2) {
            (AlertState::Idle, AlertState::Alerting) => self
                .alerter
                .vibrate(&self.settings.pattern, self.settings.repeat_alert),
            (AlertState::Alerting, AlertState::Idle) => self.alerter.cancel(),
            _ => (),
        }

        if (before.0, before.1) != (after.0, after.1) || (after.1 && self.pending.is_none()) {
            self.rearm();
        }
        result
    }

    fn rearm(&mut self) {
        self.pending = None;
        if self.timer.is_running() {
            self.next_tick_id += 1;
            let id = TickId(self.next_tick_id);
            self.pending = Some(self.scheduler.schedule(id, self.settings.tick_interval));
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.shutdown();
    }
}
