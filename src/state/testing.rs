//! Recording fakes for the countdown's external effects.

use super::countdown::{Countdown, CountdownSettings};
use crate::events::alert::{Alerter, VibrationPattern};
use crate::events::countdown::{Scheduler, TickHandle, TickId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AlertCall {
    Vibrate { repeat: bool },
    Cancel,
}

#[derive(Default)]
struct Log {
    armed: Vec<TickId>,
    live: usize,
    alerts: Vec<AlertCall>,
}

/// Shared view onto everything the fakes recorded.
///
#[derive(Clone, Default)]
pub struct Probe(Rc<RefCell<Log>>);

impl Probe {
    pub fn armed(&self) -> Vec<TickId> {
        self.0.borrow().armed.clone()
    }

    /// Ticks scheduled and not yet cancelled or released.
    pub fn live_ticks(&self) -> usize {
        self.0.borrow().live
    }

    pub fn alert_calls(&self) -> Vec<AlertCall> {
        self.0.borrow().alerts.clone()
    }
}

pub struct RecordingScheduler(Probe);

impl Scheduler for RecordingScheduler {
    fn schedule(&self, id: TickId, _delay: Duration) -> TickHandle {
        {
            let mut log = (self.0).0.borrow_mut();
            log.armed.push(id);
            log.live += 1;
        }
        let probe = self.0.clone();
        TickHandle::new(id, move || probe.0.borrow_mut().live -= 1)
    }
}

pub struct RecordingAlerter(Probe);

impl Alerter for RecordingAlerter {
    fn vibrate(&mut self, _pattern: &VibrationPattern, repeat: bool) {
        (self.0).0.borrow_mut().alerts.push(AlertCall::Vibrate { repeat });
    }

    fn cancel(&mut self) {
        (self.0).0.borrow_mut().alerts.push(AlertCall::Cancel);
    }
}

pub fn recording_countdown() -> (Countdown, Probe) {
    let probe = Probe::default();
    let countdown = Countdown::new(
        Box::new(RecordingScheduler(probe.clone())),
        Box::new(RecordingAlerter(probe.clone())),
        CountdownSettings::default(),
    );
    (countdown, probe)
}
