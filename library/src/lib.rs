//! Wayrest settings host
//!
//! Opens the advanced settings window in an eframe viewport. The window
//! itself lives in `wayrest-core`; this crate renders it, forwards input and
//! applies display mode switches to the viewport.

pub mod app;
pub mod display;
pub mod ui;
