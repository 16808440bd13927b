//! Settings host application state and main loop
//!
//! The app owns the window stack and the advanced settings window:
//! - Forwards key presses and rendered edits to the window
//! - Applies queued display mode switches to the viewport
//! - Exits once the window has popped itself

mod init;

pub use init::AppError;

use std::path::PathBuf;

use eframe::egui;
use winit::keyboard::KeyCode;

use crate::display::{DisplayRequest, ViewportDisplay};
use wayrest_core::app::localization::TextManager;
use wayrest_core::app::store::FileSettingsStore;
use wayrest_core::app::ui::{SettingsAction, SettingsWindow};
use wayrest_core::app::window_stack::{UiManager, WindowKind, WindowStack};
use wayrest_core::FormCommand;

/// Startup options from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Settings file to edit instead of the platform default
    pub config_path: Option<PathBuf>,
    /// Start fullscreen regardless of the saved setting
    pub fullscreen: bool,
}

/// Settings host application state
pub struct App {
    settings: SettingsWindow<FileSettingsStore, ViewportDisplay>,
    windows: WindowStack,
}

impl App {
    /// Create the app with the settings window on top of the stack
    pub fn new(store: FileSettingsStore, display: ViewportDisplay) -> Self {
        let mut windows = WindowStack::new();
        windows.push_window(WindowKind::AdvancedSettings);
        let mut settings = SettingsWindow::new(store, display, TextManager::english());
        settings.setup();
        Self { settings, windows }
    }

    fn handle_action(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::None | SettingsAction::ControlChanged(_) => {}
            SettingsAction::PageChanged(index) => {
                tracing::debug!("Showing settings page {}", index);
            }
            SettingsAction::Closed => {
                tracing::info!("Settings saved");
            }
            SettingsAction::SaveFailed(e) => {
                tracing::error!("Failed to save settings: {}", e);
            }
        }
    }

    /// Turn queued display changes into viewport commands
    fn apply_display_requests(&mut self, ctx: &egui::Context) {
        for request in self.settings.display_mut().drain_requests() {
            match request {
                DisplayRequest::Mode {
                    resolution,
                    fullscreen,
                } => {
                    tracing::info!(
                        "Applying display mode {} (fullscreen: {})",
                        resolution,
                        fullscreen
                    );
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
                    if !fullscreen {
                        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                            resolution.width as f32,
                            resolution.height as f32,
                        )));
                    }
                }
                DisplayRequest::Quality(level) => {
                    tracing::info!("Quality level set to {}", level);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.windows.top_window() == Some(WindowKind::AdvancedSettings) {
            let pressed = ctx.input(pressed_keys);
            let action = self.settings.update(&pressed);
            self.handle_action(action);

            let mut commands = crate::ui::settings::show(ctx, &self.settings);
            // Closing the viewport saves like the Close button does
            if ctx.input(|i| i.viewport().close_requested()) {
                commands.push(FormCommand::Close);
            }
            for command in commands {
                let action = self.settings.dispatch(command, &mut self.windows);
                self.handle_action(action);
            }
        }

        self.apply_display_requests(ctx);

        if self.windows.is_empty() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Keys pressed this frame that the settings window understands.
fn pressed_keys(input: &egui::InputState) -> Vec<KeyCode> {
    [
        egui::Key::Tab,
        egui::Key::PageUp,
        egui::Key::PageDown,
        egui::Key::Escape,
        egui::Key::Enter,
    ]
    .into_iter()
    .filter(|key| input.key_pressed(*key))
    .filter_map(key_code)
    .collect()
}

/// Map an egui key to the winit key code used by the settings window.
fn key_code(key: egui::Key) -> Option<KeyCode> {
    match key {
        egui::Key::Tab => Some(KeyCode::Tab),
        egui::Key::PageUp => Some(KeyCode::PageUp),
        egui::Key::PageDown => Some(KeyCode::PageDown),
        egui::Key::Escape => Some(KeyCode::Escape),
        egui::Key::Enter => Some(KeyCode::Enter),
        _ => None,
    }
}

/// Run the settings application
pub fn run(options: RunOptions) -> Result<(), AppError> {
    tracing::info!("Starting Wayrest settings");

    let store = match options.config_path {
        Some(path) => FileSettingsStore::open(path),
        None => FileSettingsStore::open_default()?,
    };
    tracing::info!("Editing settings at {}", store.path().display());

    let video = &store.config().video;
    let fullscreen = options.fullscreen || video.fullscreen;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wayrest Settings")
            .with_inner_size([video.resolution_width as f32, video.resolution_height as f32])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        "Wayrest Settings",
        native_options,
        Box::new(move |cc| {
            let monitor_size = cc
                .egui_ctx
                .input(|i| i.viewport().monitor_size)
                .map(|size| (size.x, size.y));
            Ok(Box::new(App::new(store, ViewportDisplay::new(monitor_size))))
        }),
    )
    .map_err(|e| AppError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}
