//! Settings UI model
//!
//! Headless widgets and the advanced settings window built from them.

pub mod settings;
pub mod widgets;

pub use settings::{FormCommand, SettingsAction, SettingsWindow};
pub use widgets::{Checkbox, ColorPicker, Control, ControlId, Indicator, Slider, TextBox};
