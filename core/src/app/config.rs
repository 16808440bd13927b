//! Configuration management (~/.config/Wayrest/config.toml)
//!
//! Handles loading, saving, and providing defaults for game settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::color::{self, Color};

/// Name of the settings file inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Lower bound of the movement acceleration slider.
pub const MIN_ACCELERATION: f32 = 1.0;
/// Upper bound of the movement acceleration slider.
pub const MAX_ACCELERATION: f32 = 10.0;

/// Errors raised while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Game settings.
///
/// Contains all user-configurable settings organized into the same sections
/// as the advanced settings window. Serialized to/from TOML for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gameplay: GameplayConfig,
    #[serde(default)]
    pub interface: InterfaceConfig,
    #[serde(default)]
    pub enhancements: EnhancementsConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

/// Gameplay, controls, audio and spell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub start_in_dungeon: bool,
    /// Index into the dungeon texture modes (classic, climate, ...)
    pub random_dungeon_textures: i32,
    /// Index into the recoil strengths (off .. 100%)
    pub camera_recoil_strength: i32,
    pub mouse_look_sensitivity: f32,
    pub weapon_sensitivity: f32,
    pub move_speed_acceleration: f32,
    /// Minimum mouse travel to trigger an attack (range: 0.001-1.0)
    pub weapon_attack_threshold: f32,
    /// Active sound font file, empty for the built-in one
    pub sound_font: String,
    pub sound_volume: f32,
    pub music_volume: f32,
    pub enable_spell_lighting: bool,
    pub enable_spell_shadows: bool,
}

/// Tooltip, HUD and GUI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    pub enable_tool_tips: bool,
    pub tool_tip_delay_in_seconds: f32,
    #[serde(with = "color::hex")]
    pub tool_tip_text_color: Color,
    #[serde(with = "color::hex")]
    pub tool_tip_background_color: Color,
    pub crosshair: bool,
    pub enable_vitals_indicators: bool,
    /// Interaction mode icon style, stored by name (e.g. "classic")
    pub interaction_mode_icon: String,
    pub free_scaling: bool,
    pub show_quest_journal_clocks_as_countdown: bool,
    pub enable_inventory_info_panel: bool,
    pub enable_enhanced_item_lists: bool,
    pub enable_modern_conversation_style_in_talk_window: bool,
    pub helm_and_shield_material_display: i32,
}

/// Mod system, gameplay enhancement and lighting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementsConfig {
    pub mod_system: bool,
    pub mesh_and_texture_replacement: bool,
    pub compress_modded_textures: bool,
    pub game_console: bool,
    pub near_death_warning: bool,
    pub alternate_random_enemy_selection: bool,
    pub advanced_climbing: bool,
    pub combat_voices: bool,
    pub enemy_infighting: bool,
    pub enhanced_combat_ai: bool,
    pub dungeon_ambient_light_scale: f32,
    pub night_ambient_light_scale: f32,
    pub player_torch_light_scale: f32,
}

/// Display mode, filtering and rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub resolution_width: i32,
    pub resolution_height: i32,
    pub fullscreen: bool,
    pub quality_level: i32,
    pub main_filter_mode: i32,
    pub gui_filter_mode: i32,
    pub video_filter_mode: i32,
    /// Field of view in degrees (range: 60-80)
    pub field_of_view: i32,
    /// Terrain streaming distance (range: 1-4)
    pub terrain_distance: i32,
    pub shadow_resolution_mode: i32,
    pub dungeon_light_shadows: bool,
    pub interior_light_shadows: bool,
    pub use_legacy_deferred: bool,
    pub enable_texture_arrays: bool,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            start_in_dungeon: true,
            random_dungeon_textures: 0,
            camera_recoil_strength: 2,
            mouse_look_sensitivity: 1.0,
            weapon_sensitivity: 1.0,
            move_speed_acceleration: 5.0,
            weapon_attack_threshold: 0.05,
            sound_font: String::new(),
            sound_volume: 1.0,
            music_volume: 0.5,
            enable_spell_lighting: true,
            enable_spell_shadows: false,
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            enable_tool_tips: true,
            tool_tip_delay_in_seconds: 0.0,
            tool_tip_text_color: Color::rgba(0xC0, 0xC0, 0xC0, 0xFF),
            tool_tip_background_color: Color::rgba(0x00, 0x00, 0x00, 0xC8),
            crosshair: false,
            enable_vitals_indicators: true,
            interaction_mode_icon: "classic".to_string(),
            free_scaling: false,
            show_quest_journal_clocks_as_countdown: false,
            enable_inventory_info_panel: true,
            enable_enhanced_item_lists: true,
            enable_modern_conversation_style_in_talk_window: true,
            helm_and_shield_material_display: 0,
        }
    }
}

impl Default for EnhancementsConfig {
    fn default() -> Self {
        Self {
            mod_system: true,
            mesh_and_texture_replacement: true,
            compress_modded_textures: false,
            game_console: true,
            near_death_warning: true,
            alternate_random_enemy_selection: true,
            advanced_climbing: false,
            combat_voices: true,
            enemy_infighting: false,
            enhanced_combat_ai: false,
            dungeon_ambient_light_scale: 0.6,
            night_ambient_light_scale: 0.6,
            player_torch_light_scale: 1.0,
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            resolution_width: 1280,
            resolution_height: 720,
            fullscreen: false,
            quality_level: 5,
            main_filter_mode: 0,
            gui_filter_mode: 0,
            video_filter_mode: 0,
            field_of_view: 65,
            terrain_distance: 3,
            shadow_resolution_mode: 2,
            dungeon_light_shadows: true,
            interior_light_shadows: true,
            use_legacy_deferred: false,
            enable_texture_arrays: true,
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Wayrest\config`
/// On macOS: `~/Library/Application Support/io.wayrest.Wayrest`
/// On Linux: `~/.config/Wayrest`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.wayrest", "", "Wayrest")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Full path of the default settings file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Loads the configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the configuration to an explicit file, creating parent directories.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(io_err)
}
