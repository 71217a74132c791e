//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Terminal events: user input, the render tick, and everything the
//!   background tasks post to the event channel
//! - Countdown ticks: cancellable one-shot scheduling of the next second
//! - Alerts: the repeating signal raised when a countdown completes

pub mod alert;
pub mod countdown;
pub mod terminal;
