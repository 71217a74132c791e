//! Countdown tick scheduling.
//!
//! Each countdown step is a one-shot task armed on the tokio runtime. The
//! caller owns the returned [`TickHandle`]; dropping or cancelling it aborts
//! the task, so replacing the handle is how a tick gets re-armed.

use crate::events::terminal::{Event, EventSender};
use log::*;
use std::time::Duration;
use tokio::runtime::Handle as RuntimeHandle;

/// Identifies one armed tick. Ticks arriving with an id other than the one
/// currently pending are stale and must be ignored.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TickId(pub u64);

/// Owned handle to a pending tick.
///
pub struct TickHandle {
    id: TickId,
    canceller: Option<Box<dyn FnOnce()>>,
}

impl TickHandle {
    pub fn new<F: FnOnce() + 'static>(id: TickId, canceller: F) -> Self {
        TickHandle {
            id,
            canceller: Some(Box::new(canceller)),
        }
    }

    pub fn id(&self) -> TickId {
        self.id
    }

    /// Cancel the tick. Equivalent to dropping the handle.
    ///
    pub fn cancel(self) {}
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.canceller.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickHandle").field("id", &self.id).finish()
    }
}

/// Source of delayed countdown ticks.
///
pub trait Scheduler {
    /// Arm a tick that delivers `id` once `delay` has elapsed.
    fn schedule(&self, id: TickId, delay: Duration) -> TickHandle;
}

/// Scheduler delivering ticks as [`Event::Countdown`] on the terminal event
/// channel.
///
pub struct TokioScheduler {
    runtime: RuntimeHandle,
    sender: EventSender,
}

impl TokioScheduler {
    pub fn new(runtime: RuntimeHandle, sender: EventSender) -> Self {
        TokioScheduler { runtime, sender }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, id: TickId, delay: Duration) -> TickHandle {
        trace!("Arming countdown tick {:?} in {:?}...", id, delay);
        let sender = self.sender.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(Event::Countdown(id)).is_err() {
                debug!("Event channel closed before tick {:?} fired", id);
            }
        });
        TickHandle::new(id, move || task.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::mpsc;

    #[test]
    fn test_handle_drop_cancels() {
        let cancelled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&cancelled);
        let handle = TickHandle::new(TickId(7), move || flag.set(true));
        assert_eq!(handle.id(), TickId(7));
        assert!(!cancelled.get());
        drop(handle);
        assert!(cancelled.get());
    }

    #[test]
    fn test_handle_cancel_runs_once() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let handle = TickHandle::new(TickId(1), move || counter.set(counter.get() + 1));
        handle.cancel();
        assert_eq!(count.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_delivers_tick() {
        let (tx, rx) = mpsc::channel();
        let scheduler = TokioScheduler::new(RuntimeHandle::current(), tx);
        let _handle = scheduler.schedule(TickId(3), Duration::from_millis(1000));

        tokio::time::sleep(Duration::from_millis(999)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(matches!(rx.try_recv(), Ok(Event::Countdown(TickId(3)))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_cancelled_tick_never_fires() {
        let (tx, rx) = mpsc::channel();
        let scheduler = TokioScheduler::new(RuntimeHandle::current(), tx);
        let handle = scheduler.schedule(TickId(4), Duration::from_millis(1000));
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
