//! A countdown timer for the terminal.
//!
//! Time is added with preset buttons, counted down one second per tick, and
//! shown as a circular progress arc around the remaining `HH:MM:SS`. When the
//! countdown reaches zero a repeating alert pulses until it is dismissed.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
