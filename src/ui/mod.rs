//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout for the timer face, presets, controls and footer
//! - Theme management
//! - Widget components (progress arc, rounded and preset buttons, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
