//! Presentational control types.
//!
//! These are the props of the two leaf components on the timer screen. They
//! carry no state of their own: the renderer draws them and the event handler
//! taps them, and every tap is routed back into the countdown through the
//! callback supplied by the caller.

use serde::{Deserialize, Serialize};

/// Visual variant of a rounded button.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ButtonVariant {
    Normal,
    Disabled,
    Dismiss,
}

/// Glyph drawn in the middle of a rounded button.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Glyph {
    Play,
    Pause,
    Undo,
    Close,
}

impl Glyph {
    /// Return the terminal symbol for the glyph.
    ///
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Play => "▶",
            Glyph::Pause => "❚❚",
            Glyph::Undo => "↺",
            Glyph::Close => "✕",
        }
    }
}

/// Circular glyph button.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RoundedButton {
    pub variant: ButtonVariant,
    pub glyph: Glyph,
}

impl RoundedButton {
    pub fn new(glyph: Glyph, variant: ButtonVariant) -> Self {
        RoundedButton { variant, glyph }
    }

    pub fn is_disabled(&self) -> bool {
        self.variant == ButtonVariant::Disabled
    }

    /// Forward a tap to `on_activate`. Taps on a disabled button are dropped.
    ///
    pub fn tap<F: FnOnce()>(&self, on_activate: F) -> bool {
        if self.is_disabled() {
            return false;
        }
        on_activate();
        true
    }
}

/// Unit of a time preset.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minute,
    Second,
}

impl TimeUnit {
    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Minute => 60,
            TimeUnit::Second => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Minute => "min",
            TimeUnit::Second => "sec",
        }
    }
}

/// Preset button adding a fixed amount of time, e.g. "+ 10 min".
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct TimePickerButton {
    pub amount: u64,
    pub unit: TimeUnit,
}

impl TimePickerButton {
    pub fn new(amount: u64, unit: TimeUnit) -> Self {
        TimePickerButton { amount, unit }
    }

    /// Seconds reported on activation.
    ///
    pub fn seconds(&self) -> u64 {
        self.amount.saturating_mul(self.unit.seconds())
    }

    pub fn label(&self) -> String {
        format!("+ {}", self.amount)
    }

    /// Report the preset's delta in seconds to `on_activate`.
    ///
    pub fn tap<F: FnOnce(u64)>(&self, on_activate: F) {
        on_activate(self.seconds());
    }
}

/// Identifies one activatable control on screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Preset(usize),
    PlayPause,
    Reset,
    Dismiss,
}
