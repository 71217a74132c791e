//! Completion alert signal.
//!
//! The alert mimics a vibration motor: a pattern of alternating wait and buzz
//! segments, optionally repeated until cancelled. The terminal implementation
//! turns buzz segments into [`Event::AlertPulse`] events; the render loop
//! flashes the dismiss panel and rings the bell on each pulse.

use crate::events::terminal::{Event, EventSender};
use log::*;
use std::time::Duration;
use tokio::runtime::Handle as RuntimeHandle;
use tokio::task::JoinHandle;

/// Default pattern step in milliseconds.
///
pub const DEFAULT_PULSE_MS: u64 = 400;

/// Alternating wait/buzz durations, starting with a wait.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VibrationPattern(Vec<Duration>);

impl VibrationPattern {
    pub fn new(segments: Vec<Duration>) -> Self {
        VibrationPattern(segments)
    }

    /// Pattern of `[1, 2, 3] * step`: wait one step, buzz two, wait three.
    ///
    pub fn from_step(step_ms: u64) -> Self {
        VibrationPattern(
            (1..=3)
                .map(|n| Duration::from_millis(n * step_ms))
                .collect(),
        )
    }

    pub fn segments(&self) -> &[Duration] {
        &self.0
    }

    /// Odd segments buzz, even segments wait.
    ///
    pub fn is_buzz(index: usize) -> bool {
        index % 2 == 1
    }

    pub fn cycle_length(&self) -> Duration {
        self.0.iter().sum()
    }
}

impl Default for VibrationPattern {
    fn default() -> Self {
        VibrationPattern::from_step(DEFAULT_PULSE_MS)
    }
}

/// Haptic signal source.
///
pub trait Alerter {
    /// Begin signalling with `pattern`, looping while `repeat` is set.
    fn vibrate(&mut self, pattern: &VibrationPattern, repeat: bool);
    /// Stop any signal in progress. Cancelling an idle alerter is a no-op.
    fn cancel(&mut self);
}

/// Alerter that emits pulse events on the terminal event channel.
///
pub struct TerminalAlerter {
    runtime: RuntimeHandle,
    sender: EventSender,
    task: Option<JoinHandle<()>>,
}

impl TerminalAlerter {
    pub fn new(runtime: RuntimeHandle, sender: EventSender) -> Self {
        TerminalAlerter {
            runtime,
            sender,
            task: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }
}

impl Alerter for TerminalAlerter {
    fn vibrate(&mut self, pattern: &VibrationPattern, repeat: bool) {
        self.cancel();
        if pattern.segments().is_empty() {
            warn!("Ignoring empty alert pattern");
            return;
        }
        info!("Starting alert signal (repeat: {})", repeat);
        let sender = self.sender.clone();
        let segments = pattern.segments().to_vec();
        self.task = Some(self.runtime.spawn(async move {
            loop {
                for (index, segment) in segments.iter().enumerate() {
                    let buzzing = VibrationPattern::is_buzz(index);
                    if sender.send(Event::AlertPulse(buzzing)).is_err() {
                        return;
                    }
                    tokio::time::sleep(*segment).await;
                }
                if !repeat {
                    let _ = sender.send(Event::AlertPulse(false));
                    return;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Cancelling alert signal...");
            task.abort();
            let _ = self.sender.send(Event::AlertPulse(false));
        }
    }
}

impl Drop for TerminalAlerter {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Alerter used when alerts are disabled in the configuration.
///
#[derive(Debug, Default)]
pub struct SilentAlerter;

impl Alerter for SilentAlerter {
    fn vibrate(&mut self, _pattern: &VibrationPattern, _repeat: bool) {
        debug!("Alert signal suppressed by configuration");
    }

    fn cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn drain(rx: &mpsc::Receiver<Event>) -> Vec<bool> {
        rx.try_iter()
            .filter_map(|event| match event {
                Event::AlertPulse(on) => Some(on),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_pattern() {
        let pattern = VibrationPattern::default();
        assert_eq!(
            pattern.segments(),
            &[
                Duration::from_millis(400),
                Duration::from_millis(800),
                Duration::from_millis(1200)
            ]
        );
        assert_eq!(pattern.cycle_length(), Duration::from_millis(2400));
    }

    #[test]
    fn test_buzz_segments_alternate() {
        assert!(!VibrationPattern::is_buzz(0));
        assert!(VibrationPattern::is_buzz(1));
        assert!(!VibrationPattern::is_buzz(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_alerter_repeats_until_cancelled() {
        let (tx, rx) = mpsc::channel();
        let mut alerter = TerminalAlerter::new(RuntimeHandle::current(), tx);
        alerter.vibrate(&VibrationPattern::default(), true);
        assert!(alerter.is_active());

        // Two full cycles plus the start of a third
        tokio::time::sleep(Duration::from_millis(4_900)).await;
        tokio::task::yield_now().await;
        let pulses = drain(&rx);
        assert_eq!(pulses.iter().filter(|on| **on).count(), 2);

        alerter.cancel();
        assert!(!alerter.is_active());
        assert_eq!(drain(&rx), vec![false]);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        tokio::task::yield_now().await;
        assert!(drain(&rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_alerter_single_shot() {
        let (tx, rx) = mpsc::channel();
        let mut alerter = TerminalAlerter::new(RuntimeHandle::current(), tx);
        alerter.vibrate(&VibrationPattern::from_step(10), false);

        tokio::time::sleep(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert_eq!(drain(&rx), vec![false, true, false, false]);
        assert!(!alerter.is_active());
    }

    #[test]
    fn test_cancel_idle_is_noop() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel();
        let mut alerter = TerminalAlerter::new(runtime.handle().clone(), tx);
        alerter.cancel();
        assert!(rx.try_recv().is_err());
    }
}
