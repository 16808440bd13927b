//! Page contents of the advanced settings window

use crate::app::config::{MAX_ACCELERATION, MIN_ACCELERATION};
use crate::app::display::{DisplayBackend, Resolution, find_resolution};
use crate::app::localization::{GAME_SETTINGS_TABLE, TextManager};
use crate::app::store::{SettingKey, SettingsStore};
use crate::app::ui::widgets::{Checkbox, ColorPicker, Control, ControlId, Slider, TextBox};

use super::binding::{BindingKind, InteractionModeIcon};
use super::types::{Column, ITEM_SPACING, Item, SECTION_SPACING, SLIDER_LABEL_SPACING};

/// Bounds applied to the typed weapon attack threshold.
pub const ATTACK_THRESHOLD_RANGE: (f32, f32) = (0.001, 1.0);
/// Characters accepted by settings text boxes.
pub const TEXT_BOX_MAX_CHARACTERS: usize = 5;

const FILTER_MODES: [&str; 3] = ["Point", "Bilinear", "Trilinear"];

/// Fills the left and right column of one page.
pub(super) type PageFn = fn(&mut FormBuilder<'_>, &mut Column, &mut Column);

/// Pages in display order, by title key.
pub(super) const PAGES: [(&str, PageFn); 4] = [
    ("gamePlay", gameplay),
    ("interface", interface),
    ("enhancements", enhancements),
    ("video", video),
];

/// A control plus what it is bound to.
#[derive(Debug, Clone)]
pub(super) struct BoundControl {
    pub control: Control,
    /// Text key the control was created with
    pub key: &'static str,
    pub binding: Option<BindingKind>,
}

/// Creates controls pre-populated from the store and lays them out.
pub(super) struct FormBuilder<'a> {
    pub text: &'a TextManager,
    pub store: &'a dyn SettingsStore,
    pub display: &'a dyn DisplayBackend,
    pub resolutions: &'a [Resolution],
    pub controls: &'a mut Vec<BoundControl>,
}

impl FormBuilder<'_> {
    pub fn get_text(&self, key: &str) -> String {
        self.text.get_text(GAME_SETTINGS_TABLE, key)
    }

    fn get_info(&self, key: &str) -> String {
        self.get_text(&format!("{}Info", key))
    }

    /// Localize options that have an entry; keep the rest verbatim.
    fn localize_options<S: AsRef<str>>(&self, options: &[S]) -> Vec<String> {
        options
            .iter()
            .map(|option| {
                let option = option.as_ref();
                if self.text.has_text(GAME_SETTINGS_TABLE, option) {
                    self.get_text(option)
                } else {
                    option.to_string()
                }
            })
            .collect()
    }

    fn push(
        &mut self,
        column: &mut Column,
        key: &'static str,
        control: Control,
        binding: Option<BindingKind>,
    ) -> ControlId {
        let id = ControlId(self.controls.len());
        self.controls.push(BoundControl {
            control,
            key,
            binding,
        });
        column.items.push(Item::Control { id, y: column.y });
        id
    }

    fn section_title(&self, column: &mut Column, key: &str) {
        column.items.push(Item::SectionTitle {
            text: self.get_text(key),
            y: column.y,
        });
        column.y += SECTION_SPACING;
    }

    fn label(&self, column: &mut Column, key: &str) {
        column.items.push(Item::Label {
            text: self.get_text(key),
            tooltip: self.get_info(key),
            y: column.y,
        });
    }

    fn info(&self, column: &mut Column, text: String, description: &str) {
        column.items.push(Item::Info {
            text,
            tooltip: description.to_string(),
            y: column.y,
        });
        column.y += ITEM_SPACING;
    }

    fn checkbox_bound(
        &mut self,
        column: &mut Column,
        key: &'static str,
        checked: bool,
        binding: BindingKind,
    ) -> ControlId {
        let checkbox = Checkbox::new(self.get_text(key), self.get_info(key), checked);
        let id = self.push(column, key, Control::Checkbox(checkbox), Some(binding));
        column.y += ITEM_SPACING;
        id
    }

    fn checkbox(
        &mut self,
        column: &mut Column,
        key: &'static str,
        setting: SettingKey,
    ) -> ControlId {
        let checked = self.store.get(setting).as_bool().unwrap_or_default();
        self.checkbox_bound(column, key, checked, BindingKind::Direct(setting))
    }

    fn slider_bound(
        &mut self,
        column: &mut Column,
        key: &'static str,
        slider: Slider,
        binding: BindingKind,
    ) -> ControlId {
        self.label(column, key);
        column.y += SLIDER_LABEL_SPACING;
        let id = self.push(column, key, Control::Slider(slider), Some(binding));
        column.y += ITEM_SPACING;
        id
    }

    fn float_slider(
        &mut self,
        column: &mut Column,
        key: &'static str,
        min: f32,
        max: f32,
        setting: SettingKey,
    ) -> ControlId {
        let start = self.store.get(setting).as_float().unwrap_or(min);
        self.slider_bound(column, key, Slider::float(min, max, start), BindingKind::Direct(setting))
    }

    fn int_slider(
        &mut self,
        column: &mut Column,
        key: &'static str,
        min: i32,
        max: i32,
        setting: SettingKey,
    ) -> ControlId {
        let start = self.store.get(setting).as_int().unwrap_or(min);
        self.slider_bound(column, key, Slider::int(min, max, start), BindingKind::Direct(setting))
    }

    fn choice_slider_bound<S: AsRef<str>>(
        &mut self,
        column: &mut Column,
        key: &'static str,
        selected: i32,
        options: &[S],
        binding: BindingKind,
    ) -> ControlId {
        let options = self.localize_options(options);
        self.slider_bound(column, key, Slider::choices(options, selected), binding)
    }

    fn choice_slider(
        &mut self,
        column: &mut Column,
        key: &'static str,
        setting: SettingKey,
        options: &[&str],
    ) -> ControlId {
        let selected = self.store.get(setting).as_int().unwrap_or_default();
        self.choice_slider_bound(column, key, selected, options, BindingKind::Direct(setting))
    }

    fn text_box(
        &mut self,
        column: &mut Column,
        key: &'static str,
        text_box: TextBox,
        binding: Option<BindingKind>,
    ) -> ControlId {
        self.label(column, key);
        let id = self.push(column, key, Control::TextBox(text_box), binding);
        column.y += ITEM_SPACING;
        id
    }

    fn color_picker(
        &mut self,
        column: &mut Column,
        key: &'static str,
        setting: SettingKey,
    ) -> ControlId {
        let color = self.store.get(setting).as_color().unwrap_or_default();
        self.label(column, key);
        let id = self.push(
            column,
            key,
            Control::ColorPicker(ColorPicker::new(color)),
            Some(BindingKind::Direct(setting)),
        );
        column.y += ITEM_SPACING;
        id
    }
}

fn gameplay(b: &mut FormBuilder<'_>, left: &mut Column, right: &mut Column) {
    b.section_title(left, "game");
    b.checkbox(left, "startInDungeon", SettingKey::StartInDungeon);
    b.choice_slider(
        left,
        "randomDungeonTextures",
        SettingKey::RandomDungeonTextures,
        &["classic", "climate", "climateOnly", "random", "randomOnly"],
    );
    b.choice_slider(
        left,
        "cameraRecoilStrength",
        SettingKey::CameraRecoilStrength,
        &["Off", "Low (25%)", "Medium (50%)", "High (75%)", "V. High(100%)"],
    );

    b.section_title(left, "controls");
    b.float_slider(left, "mouseSensitivity", 0.1, 4.0, SettingKey::MouseLookSensitivity);
    b.float_slider(left, "weaponSensitivity", 0.1, 10.0, SettingKey::WeaponSensitivity);
    b.float_slider(
        left,
        "moveSpeedAcceleration",
        MIN_ACCELERATION,
        MAX_ACCELERATION,
        SettingKey::MoveSpeedAcceleration,
    );
    let threshold = b
        .store
        .get(SettingKey::WeaponAttackThreshold)
        .as_float()
        .unwrap_or(ATTACK_THRESHOLD_RANGE.0);
    let (min, max) = ATTACK_THRESHOLD_RANGE;
    b.text_box(
        left,
        "weaponAttackThreshold",
        TextBox::new(threshold.to_string(), TEXT_BOX_MAX_CHARACTERS),
        Some(BindingKind::ClampedFloat {
            key: SettingKey::WeaponAttackThreshold,
            min,
            max,
        }),
    );

    b.section_title(right, "audio");
    let sound_font = b
        .store
        .get(SettingKey::SoundFont)
        .as_text()
        .filter(|s| !s.is_empty())
        .unwrap_or("default")
        .to_string();
    let mut sound_font_box = TextBox::new(sound_font, TEXT_BOX_MAX_CHARACTERS);
    sound_font_box.read_only = true;
    b.text_box(right, "soundFont", sound_font_box, None);
    b.float_slider(right, "soundVolume", 0.0, 1.0, SettingKey::SoundVolume);
    b.float_slider(right, "musicVolume", 0.0, 1.0, SettingKey::MusicVolume);

    b.section_title(right, "spells");
    b.checkbox(right, "spellLighting", SettingKey::EnableSpellLighting);
    b.checkbox(right, "spellShadows", SettingKey::EnableSpellShadows);
}

fn interface(b: &mut FormBuilder<'_>, left: &mut Column, right: &mut Column) {
    b.section_title(left, "tooltips");
    b.checkbox(left, "toolTips", SettingKey::EnableToolTips);
    b.float_slider(left, "toolTipDelayInSeconds", 0.0, 10.0, SettingKey::ToolTipDelayInSeconds);
    b.color_picker(left, "toolTipTextColor", SettingKey::ToolTipTextColor);
    b.color_picker(left, "toolTipBackgroundColor", SettingKey::ToolTipBackgroundColor);

    b.section_title(left, "hud");
    b.checkbox(left, "crosshair", SettingKey::Crosshair);
    b.checkbox(left, "vitalsIndicators", SettingKey::EnableVitalsIndicators);
    let icon = b
        .store
        .get(SettingKey::InteractionModeIcon)
        .as_text()
        .and_then(InteractionModeIcon::from_name)
        .unwrap_or_default();
    b.choice_slider_bound(
        left,
        "interactionModeIcon",
        icon.index() as i32,
        &InteractionModeIcon::names(),
        BindingKind::IconMode(SettingKey::InteractionModeIcon),
    );

    b.section_title(right, "gui");
    b.checkbox(right, "freeScaling", SettingKey::FreeScaling);
    b.checkbox(
        right,
        "showQuestJournalClocksAsCountdown",
        SettingKey::ShowQuestJournalClocksAsCountdown,
    );
    b.checkbox(right, "inventoryInfoPanel", SettingKey::EnableInventoryInfoPanel);
    b.checkbox(right, "enhancedItemLists", SettingKey::EnableEnhancedItemLists);
    b.checkbox(
        right,
        "enableModernConversationStyleInTalkWindow",
        SettingKey::EnableModernConversationStyleInTalkWindow,
    );
    b.choice_slider(
        right,
        "helmAndShieldMaterialDisplay",
        SettingKey::HelmAndShieldMaterialDisplay,
        &["off", "noLeatChai", "noLeat", "on"],
    );
}

fn enhancements(b: &mut FormBuilder<'_>, left: &mut Column, right: &mut Column) {
    b.section_title(left, "modSystem");
    b.checkbox(left, "modSystem", SettingKey::ModSystem);
    b.checkbox(left, "assetImport", SettingKey::MeshAndTextureReplacement);
    b.checkbox(left, "compressModdedTextures", SettingKey::CompressModdedTextures);

    b.section_title(left, "game");
    b.checkbox(left, "gameConsole", SettingKey::GameConsole);
    b.checkbox(left, "nearDeathWarning", SettingKey::NearDeathWarning);
    b.checkbox(
        left,
        "alternateRandomEnemySelection",
        SettingKey::AlternateRandomEnemySelection,
    );
    b.checkbox(left, "advancedClimbing", SettingKey::AdvancedClimbing);
    b.checkbox(left, "combatVoices", SettingKey::CombatVoices);
    b.checkbox(left, "enemyInfighting", SettingKey::EnemyInfighting);
    b.checkbox(left, "enhancedCombatAI", SettingKey::EnhancedCombatAi);

    b.section_title(right, "light");
    b.float_slider(
        right,
        "dungeonAmbientLightScale",
        0.0,
        1.0,
        SettingKey::DungeonAmbientLightScale,
    );
    b.float_slider(right, "nightAmbientLightScale", 0.0, 1.0, SettingKey::NightAmbientLightScale);
    b.float_slider(right, "playerTorchLightScale", 0.0, 1.0, SettingKey::PlayerTorchLightScale);
}

fn video(b: &mut FormBuilder<'_>, left: &mut Column, right: &mut Column) {
    b.section_title(left, "basic");
    let width = b.store.get(SettingKey::ResolutionWidth).as_int().unwrap_or_default();
    let height = b.store.get(SettingKey::ResolutionHeight).as_int().unwrap_or_default();
    let current = find_resolution(b.resolutions, width, height).map_or(0, |i| i as i32);
    let resolution_names: Vec<String> = b.resolutions.iter().map(Resolution::to_string).collect();
    b.choice_slider_bound(left, "resolution", current, &resolution_names, BindingKind::Resolution);

    let fullscreen = b.store.get(SettingKey::Fullscreen).as_bool().unwrap_or_default();
    b.checkbox_bound(left, "fullscreen", fullscreen, BindingKind::Fullscreen);

    let quality = b.store.get(SettingKey::QualityLevel).as_int().unwrap_or_default();
    let quality_names = b.display.quality_names();
    b.choice_slider_bound(left, "qualityLevel", quality, &quality_names, BindingKind::QualityLevel);

    b.choice_slider(left, "mainFilterMode", SettingKey::MainFilterMode, &FILTER_MODES);
    b.choice_slider(left, "guiFilterMode", SettingKey::GuiFilterMode, &FILTER_MODES);
    b.choice_slider(left, "videoFilterMode", SettingKey::VideoFilterMode, &FILTER_MODES);

    b.section_title(right, "advanced");
    b.int_slider(right, "fovSlider", 60, 80, SettingKey::FieldOfView);
    b.int_slider(right, "terrainDistance", 1, 4, SettingKey::TerrainDistance);
    b.choice_slider(
        right,
        "shadowResolutionMode",
        SettingKey::ShadowResolutionMode,
        &["Low", "Medium", "High", "Very High"],
    );
    b.checkbox(right, "dungeonLightShadows", SettingKey::DungeonLightShadows);
    b.checkbox(right, "interiorLightShadows", SettingKey::InteriorLightShadows);
    b.checkbox(right, "useLegacyDeferred", SettingKey::UseLegacyDeferred);

    let texture_arrays = if !b.display.supports_texture_arrays() {
        "Unsupported"
    } else if b
        .store
        .get(SettingKey::EnableTextureArrays)
        .as_bool()
        .unwrap_or_default()
    {
        "Enabled"
    } else {
        "Disabled"
    };
    b.info(
        right,
        format!("Texture Arrays: {}", texture_arrays),
        "Improved implementation of terrain textures, with better performance and modding support",
    );
}
