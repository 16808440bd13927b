//! Settings framework: persisted configuration, display backends,
//! localized text and the advanced settings window.

pub mod color;
pub mod config;
pub mod display;
pub mod localization;
pub mod store;
pub mod ui;
pub mod window_stack;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use display::{COMMON_RESOLUTIONS, DisplayBackend, QUALITY_LEVELS, Resolution};
pub use localization::{GAME_SETTINGS_TABLE, TextManager};
pub use store::{
    FileSettingsStore, MemorySettingsStore, SettingKey, SettingValue, SettingsStore, StoreError,
    ValueKind,
};
pub use ui::{FormCommand, SettingsAction, SettingsWindow};
pub use window_stack::{UiManager, WindowKind, WindowStack};
