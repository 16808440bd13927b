//! Tests for SettingsWindow

use winit::keyboard::KeyCode;

use super::*;
use crate::app::color::Color;
use crate::app::config::Config;
use crate::app::localization::{GAME_SETTINGS_TABLE, TextManager};
use crate::app::store::MemorySettingsStore;
use crate::app::ui::widgets::{Control, ControlId, Indicator};
use crate::app::window_stack::{UiManager, WindowKind, WindowStack};
use crate::test_utils::{FailingStore, RecordingDisplay};

type TestWindow = SettingsWindow<MemorySettingsStore, RecordingDisplay>;

fn window_with(config: Config) -> TestWindow {
    let mut window = SettingsWindow::new(
        MemorySettingsStore::new(config),
        RecordingDisplay::default(),
        TextManager::english(),
    );
    window.setup();
    window
}

fn window() -> TestWindow {
    window_with(Config::default())
}

fn stack() -> WindowStack {
    let mut stack = WindowStack::new();
    stack.push_window(WindowKind::AdvancedSettings);
    stack
}

fn id(window: &TestWindow, key: &str) -> ControlId {
    window
        .find_control(key)
        .unwrap_or_else(|| panic!("no control '{}'", key))
}

fn visible_count(window: &TestWindow) -> usize {
    window.pages().iter().filter(|p| p.visible).count()
}

fn send(window: &mut TestWindow, command: FormCommand) -> SettingsAction {
    let mut ui = stack();
    window.dispatch(command, &mut ui)
}

// =============================================================
// Setup
// =============================================================

#[test]
fn test_setup_builds_pages_in_order() {
    let window = window();
    let names: Vec<_> = window.pages().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Gameplay", "Interface", "Enhancements", "Video"]);
    assert_eq!(window.current_page(), 0);
    assert!(window.pages()[0].visible);
    assert_eq!(visible_count(&window), 1);
}

#[test]
fn test_page_buttons_match_pages() {
    let window = window();
    assert_eq!(window.page_buttons().len(), window.pages().len());
    for (i, (button, page)) in window.page_buttons().iter().zip(window.pages()).enumerate() {
        assert_eq!(button.name, page.name);
        assert_eq!(button.selected, page.visible);
        assert!((button.x - i as f32 * PAGE_BUTTON_WIDTH).abs() < f32::EPSILON);
    }
}

#[test]
fn test_setup_is_idempotent() {
    let mut window = window();
    let controls = window.find_control("useLegacyDeferred");
    window.setup();
    assert_eq!(window.pages().len(), 4);
    assert_eq!(window.find_control("useLegacyDeferred"), controls);
}

#[test]
fn test_update_sets_up_lazily() {
    let mut window: TestWindow = SettingsWindow::new(
        MemorySettingsStore::default(),
        RecordingDisplay::default(),
        TextManager::english(),
    );
    assert!(window.pages().is_empty());
    assert_eq!(window.update(&[]), SettingsAction::None);
    assert_eq!(window.pages().len(), 4);
}

#[test]
fn test_controls_start_from_store_values() {
    let mut config = Config::default();
    config.gameplay.start_in_dungeon = false;
    config.video.field_of_view = 77;
    config.gameplay.music_volume = 0.3;
    config.interface.tool_tip_text_color = Color::rgba(1, 2, 3, 4);
    config.video.resolution_width = 1920;
    config.video.resolution_height = 1080;
    let window = window_with(config);

    let checkbox = window.control(id(&window, "startInDungeon")).unwrap();
    assert_eq!(checkbox.as_checkbox().map(|c| c.is_checked()), Some(false));

    let fov = window.control(id(&window, "fovSlider")).unwrap();
    assert_eq!(fov.as_slider().map(|s| s.value()), Some(77));

    let music = window.control(id(&window, "musicVolume")).unwrap();
    let volume = music.as_slider().map(|s| s.float_value()).unwrap();
    assert!((volume - 0.3).abs() < f32::EPSILON);

    let color = window.control(id(&window, "toolTipTextColor")).unwrap();
    assert_eq!(
        color.as_color_picker().map(|c| c.color()),
        Some(Color::rgba(1, 2, 3, 4))
    );

    let resolution = window.control(id(&window, "resolution")).unwrap();
    assert_eq!(
        resolution.as_slider().and_then(|s| s.selected_option()),
        Some("1920x1080")
    );
}

#[test]
fn test_unknown_resolution_selects_first() {
    let mut config = Config::default();
    config.video.resolution_width = 123;
    let window = window_with(config);
    let resolution = window.control(id(&window, "resolution")).unwrap();
    assert_eq!(resolution.as_slider().map(|s| s.scroll_index()), Some(0));
}

#[test]
fn test_options_localized_when_known() {
    let window = window();
    let textures = window.control(id(&window, "randomDungeonTextures")).unwrap();
    let Some(Indicator::Choices { options, .. }) = textures.as_slider().map(|s| s.indicator())
    else {
        panic!("expected a choice slider");
    };
    assert_eq!(options[0], "Classic");
    assert_eq!(options[2], "Climate Only");

    // No text entry for "Off" with a capital O, so it stays as is
    let recoil = window.control(id(&window, "cameraRecoilStrength")).unwrap();
    let Some(Indicator::Choices { options, .. }) = recoil.as_slider().map(|s| s.indicator())
    else {
        panic!("expected a choice slider");
    };
    assert_eq!(options[0], "Off");
}

#[test]
fn test_missing_text_echoes_keys() {
    let mut window: TestWindow = SettingsWindow::new(
        MemorySettingsStore::default(),
        RecordingDisplay::default(),
        TextManager::new(),
    );
    window.setup();
    assert_eq!(window.pages()[3].name, "video");
    let checkbox = window.control(id(&window, "fullscreen")).unwrap();
    let checkbox = checkbox.as_checkbox().unwrap();
    assert_eq!(checkbox.label, "fullscreen");
    assert_eq!(checkbox.tooltip, "fullscreenInfo");
}

#[test]
fn test_column_layout_spacing() {
    let window = window();
    let left = &window.pages()[0].left;
    let in_dungeon = id(&window, "startInDungeon");
    let textures = id(&window, "randomDungeonTextures");

    assert!(matches!(&left.items[0], Item::SectionTitle { y, .. } if *y == 0.0));
    assert!(left
        .items
        .iter()
        .any(|item| matches!(item, Item::Control { id, y } if *id == in_dungeon && *y == 12.0)));
    assert!(left
        .items
        .iter()
        .any(|item| matches!(item, Item::Label { y, .. } if *y == 22.0)));
    assert!(left
        .items
        .iter()
        .any(|item| matches!(item, Item::Control { id, y } if *id == textures && *y == 28.0)));
}

#[test]
fn test_right_column_starts_at_top() {
    let window = window();
    for page in window.pages() {
        assert!(matches!(&page.right.items[0], Item::SectionTitle { y, .. } if *y == 0.0));
    }
}

#[test]
fn test_texture_array_info_line() {
    let window = window();
    let has_line = |w: &TestWindow, text: &str| {
        w.pages()[3]
            .right
            .items
            .iter()
            .any(|item| matches!(item, Item::Info { text: t, .. } if t == text))
    };
    assert!(has_line(&window, "Texture Arrays: Enabled"));

    let mut display = RecordingDisplay::default();
    display.texture_arrays = false;
    let mut unsupported = SettingsWindow::new(
        MemorySettingsStore::default(),
        display,
        TextManager::english(),
    );
    unsupported.setup();
    assert!(has_line(&unsupported, "Texture Arrays: Unsupported"));
}

// =============================================================
// Page navigation
// =============================================================

#[test]
fn test_next_page_full_cycle_returns_to_start() {
    for start in 0..4 {
        let mut window = window();
        for _ in 0..start {
            window.next_page();
        }
        assert_eq!(window.current_page(), start);
        for _ in 0..window.pages().len() {
            window.next_page();
            assert_eq!(visible_count(&window), 1);
        }
        assert_eq!(window.current_page(), start);
        assert!(window.pages()[start].visible);
        assert!(window.page_buttons()[start].selected);
    }
}

#[test]
fn test_next_page_wraps_after_last() {
    let mut window = window();
    window.select_page("Video");
    window.next_page();
    assert_eq!(window.current_page(), 0);
    assert!(!window.pages()[3].visible);
    assert!(!window.page_buttons()[3].selected);
}

#[test]
fn test_select_page_by_name() {
    let mut window = window();
    for name in ["Enhancements", "Gameplay", "Video", "Interface"] {
        assert!(window.select_page(name));
        assert_eq!(visible_count(&window), 1);
        assert_eq!(window.visible_page().map(|p| p.name.as_str()), Some(name));
        let selected: Vec<_> = window.page_buttons().iter().filter(|b| b.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, name);
    }
}

#[test]
fn test_select_unknown_page_keeps_current() {
    let mut window = window();
    window.select_page("Interface");
    assert!(!window.select_page("Nope"));
    assert_eq!(window.current_page(), 1);
    assert_eq!(visible_count(&window), 1);
}

#[test]
fn test_select_page_duplicate_names_last_wins() {
    let mut text = TextManager::english();
    text.insert(GAME_SETTINGS_TABLE, "gamePlay", "Same");
    text.insert(GAME_SETTINGS_TABLE, "video", "Same");
    let mut window: TestWindow =
        SettingsWindow::new(MemorySettingsStore::default(), RecordingDisplay::default(), text);
    window.setup();

    assert!(window.select_page("Same"));
    assert_eq!(window.current_page(), 3);
    assert_eq!(visible_count(&window), 1);
}

#[test]
fn test_page_key_advances_once_per_frame() {
    let mut window = window();
    assert_eq!(
        window.update(&[KeyCode::Tab, KeyCode::Tab]),
        SettingsAction::PageChanged(1)
    );
    assert_eq!(window.update(&[KeyCode::KeyA]), SettingsAction::None);
    assert_eq!(window.current_page(), 1);
}

#[test]
fn test_custom_page_key() {
    let mut window = window().with_next_page_key(KeyCode::PageDown);
    assert_eq!(window.update(&[KeyCode::Tab]), SettingsAction::None);
    assert_eq!(
        window.update(&[KeyCode::PageDown]),
        SettingsAction::PageChanged(1)
    );
}

#[test]
fn test_page_commands() {
    let mut window = window();
    assert_eq!(send(&mut window, FormCommand::NextPage), SettingsAction::PageChanged(1));
    assert_eq!(
        send(&mut window, FormCommand::SelectPage("Video".into())),
        SettingsAction::PageChanged(3)
    );
    assert_eq!(
        send(&mut window, FormCommand::SelectPage("Missing".into())),
        SettingsAction::None
    );
}

// =============================================================
// Editing
// =============================================================

#[test]
fn test_edit_commands_report_changes() {
    let mut window = window();
    let crosshair = id(&window, "crosshair");
    assert_eq!(
        send(&mut window, FormCommand::Toggle(crosshair)),
        SettingsAction::ControlChanged(crosshair)
    );
    // Already checked
    assert_eq!(
        send(&mut window, FormCommand::SetChecked(crosshair, true)),
        SettingsAction::None
    );

    let fov = id(&window, "fovSlider");
    assert_eq!(
        send(&mut window, FormCommand::SetSliderValue(fov, 80.0)),
        SettingsAction::ControlChanged(fov)
    );
    assert_eq!(send(&mut window, FormCommand::Scroll(fov, 1)), SettingsAction::None);
}

#[test]
fn test_mismatched_command_is_ignored() {
    let mut window = window();
    let fov = id(&window, "fovSlider");
    assert_eq!(send(&mut window, FormCommand::Toggle(fov)), SettingsAction::None);
    assert_eq!(
        send(&mut window, FormCommand::Toggle(ControlId(10_000))),
        SettingsAction::None
    );
}

#[test]
fn test_sound_font_is_read_only() {
    let mut window = window();
    let sound_font = id(&window, "soundFont");
    assert_eq!(
        send(&mut window, FormCommand::SetText(sound_font, "x".into())),
        SettingsAction::None
    );
    let text_box = window.control(sound_font).and_then(Control::as_text_box).unwrap();
    assert_eq!(text_box.display_text(), "default");
    assert_eq!(window.binding(sound_font), None);
}

// =============================================================
// Saving
// =============================================================

fn set_threshold_text(window: &mut TestWindow, text: &str) {
    let threshold = id(window, "weaponAttackThreshold");
    send(window, FormCommand::SetText(threshold, text.into()));
}

#[test]
fn test_non_numeric_threshold_keeps_stored_value() {
    let mut window = window();
    set_threshold_text(&mut window, "abc");
    window.save_settings().unwrap();
    let stored = window.store().config().gameplay.weapon_attack_threshold;
    assert!((stored - 0.05).abs() < f32::EPSILON);
}

#[test]
fn test_untouched_threshold_keeps_stored_value() {
    let mut config = Config::default();
    config.gameplay.weapon_attack_threshold = 0.25;
    let mut window = window_with(config);
    window.save_settings().unwrap();
    let stored = window.store().config().gameplay.weapon_attack_threshold;
    assert!((stored - 0.25).abs() < f32::EPSILON);
}

#[test]
fn test_numeric_threshold_is_clamped() {
    let cases = [
        ("5", 1.0),
        ("0", 0.001),
        ("-3", 0.001),
        (" 0.5 ", 0.5),
        ("0.125", 0.125),
    ];
    for (text, expected) in cases {
        let mut window = window();
        set_threshold_text(&mut window, text);
        window.save_settings().unwrap();
        let stored = window.store().config().gameplay.weapon_attack_threshold;
        assert!((stored - expected).abs() < 1e-6, "{:?} -> {}", text, stored);
    }
}

#[test]
fn test_nan_threshold_is_ignored() {
    let mut window = window();
    set_threshold_text(&mut window, "NaN");
    window.save_settings().unwrap();
    let stored = window.store().config().gameplay.weapon_attack_threshold;
    assert!((stored - 0.05).abs() < f32::EPSILON);
}

#[test]
fn test_untouched_screen_settings_are_not_applied() {
    let mut window = window();
    let fov = id(&window, "fovSlider");
    send(&mut window, FormCommand::Scroll(fov, -1));
    window.save_settings().unwrap();

    assert!(!window.applies_screen_changes());
    assert!(window.display().resolution_calls.is_empty());
    assert!(window.display().quality_calls.is_empty());
    assert_eq!(window.store().config().video.field_of_view, 64);
}

#[test]
fn test_fullscreen_toggle_alone_applies_screen_change() {
    let mut window = window();
    let fullscreen = id(&window, "fullscreen");
    send(&mut window, FormCommand::Toggle(fullscreen));
    window.save_settings().unwrap();

    assert!(window.applies_screen_changes());
    assert!(window.store().config().video.fullscreen);
    assert_eq!(window.display().resolution_calls, [(1280, 720, true)]);
    assert_eq!(window.display().quality_calls, [5]);
}

#[test]
fn test_resolution_change_applies_new_size() {
    let mut window = window();
    let resolution = id(&window, "resolution");
    send(&mut window, FormCommand::Scroll(resolution, 1));
    window.save_settings().unwrap();

    let video = &window.store().config().video;
    assert_eq!((video.resolution_width, video.resolution_height), (1280, 1024));
    assert_eq!(window.display().resolution_calls, [(1280, 1024, false)]);
}

#[test]
fn test_quality_change_also_applies_resolution() {
    let mut window = window();
    let quality = id(&window, "qualityLevel");
    send(&mut window, FormCommand::SetSliderIndex(quality, 2));
    window.save_settings().unwrap();

    assert_eq!(window.store().config().video.quality_level, 2);
    assert_eq!(window.display().quality_calls, [2]);
    assert_eq!(window.display().resolution_calls, [(1280, 720, false)]);
}

#[test]
fn test_screen_change_without_resolutions_keeps_size() {
    let mut display = RecordingDisplay::default();
    display.resolutions.clear();
    let mut window = SettingsWindow::new(
        MemorySettingsStore::default(),
        display,
        TextManager::english(),
    );
    window.setup();
    let fullscreen = id(&window, "fullscreen");
    send(&mut window, FormCommand::Toggle(fullscreen));
    window.save_settings().unwrap();

    assert_eq!(window.display().resolution_calls, [(1280, 720, true)]);
    assert!(window.store().config().video.fullscreen);
}

#[test]
fn test_screen_change_without_quality_levels_keeps_level() {
    let mut config = Config::default();
    config.video.quality_level = 4;
    let mut display = RecordingDisplay::default();
    display.quality_names.clear();
    let mut window = SettingsWindow::new(
        MemorySettingsStore::new(config),
        display,
        TextManager::english(),
    );
    window.setup();
    let fullscreen = id(&window, "fullscreen");
    send(&mut window, FormCommand::Toggle(fullscreen));
    window.save_settings().unwrap();

    assert!(window.display().quality_calls.is_empty());
    assert_eq!(window.store().config().video.quality_level, 4);
    assert_eq!(window.display().resolution_calls, [(1280, 720, true)]);
}

#[test]
fn test_unchanged_edit_does_not_set_screen_flag() {
    let mut window = window();
    let fullscreen = id(&window, "fullscreen");
    send(&mut window, FormCommand::SetChecked(fullscreen, false));
    assert!(!window.applies_screen_changes());
}

#[test]
fn test_interaction_mode_icon_round_trip() {
    let mut config = Config::default();
    config.interface.interaction_mode_icon = "large".into();
    let mut window = window_with(config);
    let icon = id(&window, "interactionModeIcon");
    assert_eq!(
        window.control(icon).and_then(Control::as_slider).map(|s| s.scroll_index()),
        Some(2)
    );

    send(&mut window, FormCommand::Scroll(icon, 1));
    window.save_settings().unwrap();
    assert_eq!(window.store().config().interface.interaction_mode_icon, "classic");
}

#[test]
fn test_unknown_interaction_mode_icon_saves_first_option() {
    let mut config = Config::default();
    config.interface.interaction_mode_icon = "sparkly".into();
    let mut window = window_with(config);
    window.save_settings().unwrap();
    assert_eq!(window.store().config().interface.interaction_mode_icon, "none");
}

#[test]
fn test_untouched_save_preserves_config() {
    let config = Config::default();
    let mut window = window_with(config.clone());
    window.save_settings().unwrap();
    assert_eq!(window.store().config(), &config);
}

// =============================================================
// Closing
// =============================================================

#[test]
fn test_close_persists_all_values_once() {
    let mut window = window();
    let mut ui = stack();

    let edits = [
        FormCommand::Toggle(id(&window, "enemyInfighting")),
        FormCommand::SetSliderValue(id(&window, "soundVolume"), 0.4),
        FormCommand::SetSliderIndex(id(&window, "shadowResolutionMode"), 3),
        FormCommand::SetColor(id(&window, "toolTipBackgroundColor"), Color::WHITE),
        FormCommand::Scroll(id(&window, "terrainDistance"), -1),
    ];
    for edit in edits {
        window.dispatch(edit, &mut ui);
    }

    assert_eq!(window.dispatch(FormCommand::Close, &mut ui), SettingsAction::Closed);
    assert!(!window.is_open());
    assert!(ui.is_empty());

    // Further input is ignored and nothing is saved again
    assert_eq!(window.dispatch(FormCommand::Close, &mut ui), SettingsAction::None);
    assert_eq!(window.update(&[KeyCode::Tab]), SettingsAction::None);
    window.close(&mut ui).unwrap();

    let store = window.into_store();
    assert_eq!(store.persist_count(), 1);
    let config = store.config();
    assert!(config.enhancements.enemy_infighting);
    assert!((config.gameplay.sound_volume - 0.4).abs() < f32::EPSILON);
    assert_eq!(config.video.shadow_resolution_mode, 3);
    assert_eq!(config.interface.tool_tip_background_color, Color::WHITE);
    assert_eq!(config.video.terrain_distance, 2);
}

#[test]
fn test_close_pops_even_when_persist_fails() {
    let mut window = SettingsWindow::new(
        FailingStore::default(),
        RecordingDisplay::default(),
        TextManager::english(),
    );
    let mut ui = stack();
    window.setup();
    let crosshair = window.find_control("crosshair").unwrap();
    window.dispatch(FormCommand::Toggle(crosshair), &mut ui);

    let action = window.dispatch(FormCommand::Close, &mut ui);
    assert!(matches!(action, SettingsAction::SaveFailed(_)));
    assert!(ui.is_empty());
    assert!(!window.is_open());
    assert!(window.store().inner.config().interface.crosshair);
}
