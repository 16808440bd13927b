//! Shared test doubles for the settings window

use crate::app::config::{Config, ConfigError};
use crate::app::display::{COMMON_RESOLUTIONS, DisplayBackend, QUALITY_LEVELS, Resolution};
use crate::app::store::{MemorySettingsStore, SettingKey, SettingValue, SettingsStore, StoreError};

// ============================================================================
// Display
// ============================================================================

/// Display backend that records every mode switch.
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    pub resolutions: Vec<Resolution>,
    pub quality_names: Vec<String>,
    pub texture_arrays: bool,
    /// `(width, height, fullscreen)` per `set_resolution` call
    pub resolution_calls: Vec<(i32, i32, bool)>,
    pub quality_calls: Vec<i32>,
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self {
            resolutions: COMMON_RESOLUTIONS.to_vec(),
            quality_names: QUALITY_LEVELS.iter().map(|s| s.to_string()).collect(),
            texture_arrays: true,
            resolution_calls: Vec::new(),
            quality_calls: Vec::new(),
        }
    }
}

impl DisplayBackend for RecordingDisplay {
    fn resolutions(&self) -> Vec<Resolution> {
        self.resolutions.clone()
    }

    fn quality_names(&self) -> Vec<String> {
        self.quality_names.clone()
    }

    fn supports_texture_arrays(&self) -> bool {
        self.texture_arrays
    }

    fn set_resolution(&mut self, width: i32, height: i32, fullscreen: bool) {
        self.resolution_calls.push((width, height, fullscreen));
    }

    fn set_quality_level(&mut self, level: i32) {
        self.quality_calls.push(level);
    }
}

// ============================================================================
// Store
// ============================================================================

/// Store whose `persist` always fails.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemorySettingsStore,
}

impl FailingStore {
    pub fn new(config: Config) -> Self {
        Self {
            inner: MemorySettingsStore::new(config),
        }
    }
}

impl SettingsStore for FailingStore {
    fn get(&self, key: SettingKey) -> SettingValue {
        self.inner.get(key)
    }

    fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), StoreError> {
        self.inner.set(key, value)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        Err(ConfigError::NoConfigDir.into())
    }
}
