//! Application state management module.
//!
//! This module contains the state behind the timer screen, including:
//! - Main `State` struct holding the countdown and everything the UI needs
//! - The `Countdown` controller and its `TimerState` data
//! - Control props for the preset and rounded buttons
//! - Arc animation and state error handling

mod animation;
mod controls;
mod countdown;
mod error;
mod timer;

#[cfg(test)]
pub(crate) mod testing;

pub use animation::{ease_in_out_quad, ArcAnimation, ARC_ANIMATION_DURATION};
pub use controls::{ButtonVariant, Control, Glyph, RoundedButton, TimePickerButton, TimeUnit};
pub use countdown::{Countdown, CountdownSettings, DEFAULT_TICK_INTERVAL};
pub use error::StateError;
pub use timer::{AlertState, Phase, TickOutcome, TimerState, FULL_SWEEP_DEGREES};

// State struct, methods and tests live in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, MAX_LOG_ENTRIES};
