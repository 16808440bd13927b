//! Typed key-value access to the settings, and the stores that persist them
//!
//! The settings window never touches [`Config`] fields directly. Every control
//! is bound to a [`SettingKey`] and reads/writes through a [`SettingsStore`],
//! which lets hosts inject whatever backing they like.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::color::Color;
use crate::app::config::{self, Config, ConfigError};

/// Type of a settings property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Color,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Text => write!(f, "string"),
            ValueKind::Color => write!(f, "color"),
        }
    }
}

/// A value read from or written to a settings property.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Text(String),
    Color(Color),
}

impl SettingValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Bool(_) => ValueKind::Bool,
            SettingValue::Int(_) => ValueKind::Int,
            SettingValue::Float(_) => ValueKind::Float,
            SettingValue::Text(_) => ValueKind::Text,
            SettingValue::Color(_) => ValueKind::Color,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            SettingValue::Color(v) => Some(*v),
            _ => None,
        }
    }
}

/// Errors raised by a [`SettingsStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("setting '{key}' holds a {expected} value, got {found}")]
    TypeMismatch {
        key: SettingKey,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Declares every settings property once: its key, where it lives in
/// [`Config`], and its value type.
macro_rules! settings_table {
    ($($variant:ident => $section:ident . $field:ident : $kind:ident),* $(,)?) => {
        /// Named property of the settings store.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SettingKey {
            $($variant,)*
        }

        impl SettingKey {
            /// Every property, in declaration order.
            pub const ALL: &'static [SettingKey] = &[$(SettingKey::$variant,)*];

            /// Dotted TOML path of the property (e.g. `video.fullscreen`).
            pub fn path(self) -> &'static str {
                match self {
                    $(SettingKey::$variant => {
                        concat!(stringify!($section), ".", stringify!($field))
                    })*
                }
            }

            pub fn kind(self) -> ValueKind {
                match self {
                    $(SettingKey::$variant => ValueKind::$kind,)*
                }
            }
        }

        impl Config {
            /// Read a property by key.
            #[allow(clippy::clone_on_copy)]
            pub fn get(&self, key: SettingKey) -> SettingValue {
                match key {
                    $(SettingKey::$variant => SettingValue::$kind(self.$section.$field.clone()),)*
                }
            }

            /// Write a property by key. The value must match the property's type.
            pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), StoreError> {
                match (key, value) {
                    $((SettingKey::$variant, SettingValue::$kind(v)) => self.$section.$field = v,)*
                    (key, value) => {
                        return Err(StoreError::TypeMismatch {
                            key,
                            expected: key.kind(),
                            found: value.kind(),
                        });
                    }
                }
                Ok(())
            }
        }
    };
}

settings_table! {
    // Gameplay
    StartInDungeon => gameplay.start_in_dungeon: Bool,
    RandomDungeonTextures => gameplay.random_dungeon_textures: Int,
    CameraRecoilStrength => gameplay.camera_recoil_strength: Int,
    MouseLookSensitivity => gameplay.mouse_look_sensitivity: Float,
    WeaponSensitivity => gameplay.weapon_sensitivity: Float,
    MoveSpeedAcceleration => gameplay.move_speed_acceleration: Float,
    WeaponAttackThreshold => gameplay.weapon_attack_threshold: Float,
    SoundFont => gameplay.sound_font: Text,
    SoundVolume => gameplay.sound_volume: Float,
    MusicVolume => gameplay.music_volume: Float,
    EnableSpellLighting => gameplay.enable_spell_lighting: Bool,
    EnableSpellShadows => gameplay.enable_spell_shadows: Bool,

    // Interface
    EnableToolTips => interface.enable_tool_tips: Bool,
    ToolTipDelayInSeconds => interface.tool_tip_delay_in_seconds: Float,
    ToolTipTextColor => interface.tool_tip_text_color: Color,
    ToolTipBackgroundColor => interface.tool_tip_background_color: Color,
    Crosshair => interface.crosshair: Bool,
    EnableVitalsIndicators => interface.enable_vitals_indicators: Bool,
    InteractionModeIcon => interface.interaction_mode_icon: Text,
    FreeScaling => interface.free_scaling: Bool,
    ShowQuestJournalClocksAsCountdown => interface.show_quest_journal_clocks_as_countdown: Bool,
    EnableInventoryInfoPanel => interface.enable_inventory_info_panel: Bool,
    EnableEnhancedItemLists => interface.enable_enhanced_item_lists: Bool,
    EnableModernConversationStyleInTalkWindow =>
        interface.enable_modern_conversation_style_in_talk_window: Bool,
    HelmAndShieldMaterialDisplay => interface.helm_and_shield_material_display: Int,

    // Enhancements
    ModSystem => enhancements.mod_system: Bool,
    MeshAndTextureReplacement => enhancements.mesh_and_texture_replacement: Bool,
    CompressModdedTextures => enhancements.compress_modded_textures: Bool,
    GameConsole => enhancements.game_console: Bool,
    NearDeathWarning => enhancements.near_death_warning: Bool,
    AlternateRandomEnemySelection => enhancements.alternate_random_enemy_selection: Bool,
    AdvancedClimbing => enhancements.advanced_climbing: Bool,
    CombatVoices => enhancements.combat_voices: Bool,
    EnemyInfighting => enhancements.enemy_infighting: Bool,
    EnhancedCombatAi => enhancements.enhanced_combat_ai: Bool,
    DungeonAmbientLightScale => enhancements.dungeon_ambient_light_scale: Float,
    NightAmbientLightScale => enhancements.night_ambient_light_scale: Float,
    PlayerTorchLightScale => enhancements.player_torch_light_scale: Float,

    // Video
    ResolutionWidth => video.resolution_width: Int,
    ResolutionHeight => video.resolution_height: Int,
    Fullscreen => video.fullscreen: Bool,
    QualityLevel => video.quality_level: Int,
    MainFilterMode => video.main_filter_mode: Int,
    GuiFilterMode => video.gui_filter_mode: Int,
    VideoFilterMode => video.video_filter_mode: Int,
    FieldOfView => video.field_of_view: Int,
    TerrainDistance => video.terrain_distance: Int,
    ShadowResolutionMode => video.shadow_resolution_mode: Int,
    DungeonLightShadows => video.dungeon_light_shadows: Bool,
    InteriorLightShadows => video.interior_light_shadows: Bool,
    UseLegacyDeferred => video.use_legacy_deferred: Bool,
    EnableTextureArrays => video.enable_texture_arrays: Bool,
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Synchronous typed property store backing the settings window.
pub trait SettingsStore {
    /// Current value of a property.
    fn get(&self, key: SettingKey) -> SettingValue;

    /// Replace the value of a property. Nothing reaches durable storage until
    /// [`persist`](Self::persist) is called.
    fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), StoreError>;

    /// Commit all properties to durable storage.
    fn persist(&mut self) -> Result<(), StoreError>;
}

/// Store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    config: Config,
    path: PathBuf,
}

impl FileSettingsStore {
    /// Open the store at `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match config::load_from(&path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Config::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings: {}", e);
                Config::default()
            }
        };
        Self { config, path }
    }

    /// Open the store at the platform's default location.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::open(config::config_path()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: SettingKey) -> SettingValue {
        self.config.get(key)
    }

    fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), StoreError> {
        self.config.set(key, value)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        config::save_to(&self.config, &self.path)?;
        tracing::info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store that counts how often it was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    config: Config,
    persist_count: usize,
}

impl MemorySettingsStore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            persist_count: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn persist_count(&self) -> usize {
        self.persist_count
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: SettingKey) -> SettingValue {
        self.config.get(key)
    }

    fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), StoreError> {
        self.config.set(key, value)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.persist_count += 1;
        Ok(())
    }
}
