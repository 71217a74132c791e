//! Reusable UI widget components.
//!
//! This module contains the progress arc, the two button widgets and the
//! shared styling helpers.

pub mod arc;
pub mod buttons;
pub mod styling;
