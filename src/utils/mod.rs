//! Small helpers shared across the application.

pub mod time_format;
