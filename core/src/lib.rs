//! Wayrest Core - advanced settings for the Wayrest engine
//!
//! This crate holds everything the settings window needs that does not
//! depend on a renderer.
//!
//! # Architecture
//!
//! - [`SettingsStore`] - Typed access to the persisted [`Config`]
//! - [`DisplayBackend`] - Resolutions, quality levels and mode switches
//! - [`SettingsWindow`] - Paginated form that saves on close
//! - [`UiManager`] - Window stack the settings window pops itself from

pub mod app;
#[cfg(test)]
pub mod test_utils;

pub use app::{
    Color, Config, ConfigError, DisplayBackend, FileSettingsStore, FormCommand,
    MemorySettingsStore, Resolution, SettingKey, SettingValue, SettingsAction, SettingsStore,
    SettingsWindow, StoreError, TextManager, UiManager, WindowKind, WindowStack,
};
