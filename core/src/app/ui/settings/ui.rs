//! Settings window state machine: pages, edits and save-on-close

use winit::keyboard::KeyCode;

use crate::app::display::{DisplayBackend, Resolution};
use crate::app::localization::TextManager;
use crate::app::store::{SettingKey, SettingValue, SettingsStore, StoreError, ValueKind};
use crate::app::ui::widgets::{Control, ControlId};
use crate::app::window_stack::UiManager;

use super::binding::{BindingKind, InteractionModeIcon};
use super::pages::{BoundControl, FormBuilder, PAGES};
use super::types::{
    CLOSE_BUTTON_TEXT, Column, FormCommand, PAGE_BUTTON_WIDTH, Page, PageButton, SettingsAction,
};

/// Key that cycles pages while the window is open.
pub const DEFAULT_NEXT_PAGE_KEY: KeyCode = KeyCode::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowState {
    /// Constructed, controls not built yet
    Pending,
    Open,
    /// Saved and popped; accepts no further input
    Closed,
}

/// Advanced settings window.
///
/// Owns the injected settings store while open. Controls are created from
/// the store's current values in [`setup`](Self::setup) and written back in
/// [`save_settings`](Self::save_settings), which runs exactly once when the
/// window closes. There is no cancel.
pub struct SettingsWindow<S, D> {
    store: S,
    display: D,
    text: TextManager,
    pages: Vec<Page>,
    page_buttons: Vec<PageButton>,
    controls: Vec<BoundControl>,
    resolutions: Vec<Resolution>,
    current_page: usize,
    /// Set when resolution, fullscreen or quality was edited this session
    apply_screen_changes: bool,
    next_page_key: KeyCode,
    state: WindowState,
}

impl<S: SettingsStore, D: DisplayBackend> SettingsWindow<S, D> {
    pub fn new(store: S, display: D, text: TextManager) -> Self {
        Self {
            store,
            display,
            text,
            pages: Vec::new(),
            page_buttons: Vec::new(),
            controls: Vec::new(),
            resolutions: Vec::new(),
            current_page: 0,
            apply_screen_changes: false,
            next_page_key: DEFAULT_NEXT_PAGE_KEY,
            state: WindowState::Pending,
        }
    }

    /// Use a different key for page cycling.
    pub fn with_next_page_key(mut self, key: KeyCode) -> Self {
        self.next_page_key = key;
        self
    }

    /// Build the page bar and every page from the store's current values.
    ///
    /// Does nothing once the window has been set up.
    pub fn setup(&mut self) {
        if self.state != WindowState::Pending {
            return;
        }

        self.resolutions = self.display.resolutions();
        let mut builder = FormBuilder {
            text: &self.text,
            store: &self.store,
            display: &self.display,
            resolutions: &self.resolutions,
            controls: &mut self.controls,
        };

        for (title_key, fill) in PAGES {
            let name = builder.get_text(title_key);
            let mut left = Column::default();
            let mut right = Column::default();
            fill(&mut builder, &mut left, &mut right);

            let first = self.pages.is_empty();
            self.page_buttons.push(PageButton {
                name: name.clone(),
                selected: first,
                x: self.pages.len() as f32 * PAGE_BUTTON_WIDTH,
            });
            self.pages.push(Page {
                name,
                visible: first,
                left,
                right,
            });
        }

        self.current_page = 0;
        self.state = WindowState::Open;
        tracing::info!(
            "Advanced settings opened ({} pages, {} controls)",
            self.pages.len(),
            self.controls.len()
        );
    }

    /// Per-frame tick. Sets the window up on first use and cycles pages when
    /// the page key was pressed this frame.
    pub fn update(&mut self, pressed: &[KeyCode]) -> SettingsAction {
        self.setup();
        if self.state != WindowState::Open {
            return SettingsAction::None;
        }
        if pressed.contains(&self.next_page_key) {
            self.next_page();
            return SettingsAction::PageChanged(self.current_page);
        }
        SettingsAction::None
    }

    /// Show the next page, wrapping to the first after the last.
    pub fn next_page(&mut self) {
        if self.pages.is_empty() {
            return;
        }
        self.set_selected(self.current_page, false);
        self.current_page = (self.current_page + 1) % self.pages.len();
        self.set_selected(self.current_page, true);
        tracing::debug!("Settings page -> {}", self.pages[self.current_page].name);
    }

    /// Show the page called `name`.
    ///
    /// Pages are searched from the last to the first, so with duplicate names
    /// the most recently added page wins. Returns `false` and keeps the
    /// current page when no page matches.
    pub fn select_page(&mut self, name: &str) -> bool {
        let Some(index) = self.pages.iter().rposition(|page| page.name == name) else {
            tracing::warn!("No settings page named '{}'", name);
            return false;
        };
        self.set_selected(self.current_page, false);
        self.current_page = index;
        self.set_selected(index, true);
        tracing::debug!("Settings page -> {}", name);
        true
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(page) = self.pages.get_mut(index) {
            page.visible = selected;
        }
        if let Some(button) = self.page_buttons.get_mut(index) {
            button.selected = selected;
        }
    }

    /// Apply a host command.
    pub fn dispatch(&mut self, command: FormCommand, ui: &mut dyn UiManager) -> SettingsAction {
        self.setup();
        if self.state != WindowState::Open {
            return SettingsAction::None;
        }

        match command {
            FormCommand::NextPage => {
                self.next_page();
                SettingsAction::PageChanged(self.current_page)
            }
            FormCommand::SelectPage(name) => {
                if self.select_page(&name) {
                    SettingsAction::PageChanged(self.current_page)
                } else {
                    SettingsAction::None
                }
            }
            FormCommand::Close => match self.close(ui) {
                Ok(()) => SettingsAction::Closed,
                Err(e) => SettingsAction::SaveFailed(e.to_string()),
            },
            edit => self.edit(edit),
        }
    }

    fn edit(&mut self, command: FormCommand) -> SettingsAction {
        let id = match &command {
            FormCommand::Toggle(id)
            | FormCommand::SetChecked(id, _)
            | FormCommand::Scroll(id, _)
            | FormCommand::SetSliderIndex(id, _)
            | FormCommand::SetSliderValue(id, _)
            | FormCommand::SetText(id, _)
            | FormCommand::SetColor(id, _) => *id,
            _ => return SettingsAction::None,
        };
        let Some(bound) = self.controls.get_mut(id.index()) else {
            tracing::warn!("Ignoring command for unknown control {:?}", id);
            return SettingsAction::None;
        };

        let changed = match (&mut bound.control, command) {
            (Control::Checkbox(checkbox), FormCommand::Toggle(_)) => {
                checkbox.toggle();
                true
            }
            (Control::Checkbox(checkbox), FormCommand::SetChecked(_, checked)) => {
                let changed = checkbox.is_checked() != checked;
                checkbox.set_checked(checked);
                changed
            }
            (Control::Slider(slider), FormCommand::Scroll(_, steps)) => slider.scroll(steps),
            (Control::Slider(slider), FormCommand::SetSliderIndex(_, index)) => {
                slider.set_scroll_index(index)
            }
            (Control::Slider(slider), FormCommand::SetSliderValue(_, value)) => {
                slider.set_value(value)
            }
            (Control::TextBox(text_box), FormCommand::SetText(_, text)) => text_box.set_text(&text),
            (Control::ColorPicker(picker), FormCommand::SetColor(_, color)) => {
                let changed = picker.color() != color;
                picker.set_color(color);
                changed
            }
            (_, command) => {
                tracing::warn!("Command {:?} does not apply to control '{}'", command, bound.key);
                false
            }
        };

        if !changed {
            return SettingsAction::None;
        }
        if bound.binding.is_some_and(|b| b.is_screen_change()) {
            tracing::debug!("Screen setting '{}' changed", bound.key);
            self.apply_screen_changes = true;
        }
        SettingsAction::ControlChanged(id)
    }

    /// Write every bound control back to the store, apply display changes
    /// when a screen setting was edited, and persist.
    pub fn save_settings(&mut self) -> Result<(), StoreError> {
        for bound in &self.controls {
            let Some(binding) = bound.binding else {
                continue;
            };
            let write = match binding {
                BindingKind::Direct(key) => match control_value(&bound.control, key.kind()) {
                    Some(value) => Some((key, value)),
                    None => {
                        tracing::warn!(
                            "Control '{}' cannot produce a {} value",
                            bound.key,
                            key.kind()
                        );
                        None
                    }
                },
                BindingKind::ClampedFloat { key, min, max } => {
                    parse_clamped(&bound.control, min, max).map(|v| (key, SettingValue::Float(v)))
                }
                BindingKind::IconMode(key) => bound
                    .control
                    .as_slider()
                    .and_then(|slider| InteractionModeIcon::from_index(slider.scroll_index()))
                    .map(|icon| (key, SettingValue::Text(icon.as_str().to_string()))),
                BindingKind::Resolution | BindingKind::Fullscreen | BindingKind::QualityLevel => {
                    None
                }
            };
            if let Some((key, value)) = write
                && let Err(e) = self.store.set(key, value)
            {
                tracing::error!("Failed to write '{}': {}", key, e);
            }
        }

        if self.apply_screen_changes {
            self.apply_screen_settings();
        }

        self.store.persist()
    }

    fn apply_screen_settings(&mut self) {
        let fullscreen = self
            .bound(BindingKind::Fullscreen)
            .and_then(Control::as_checkbox)
            .map(|c| c.is_checked());
        let resolution_index = self
            .bound(BindingKind::Resolution)
            .and_then(Control::as_slider)
            .map(|s| s.scroll_index());
        let quality_index = self
            .bound(BindingKind::QualityLevel)
            .and_then(Control::as_slider)
            .filter(|s| s.total_units() > 0)
            .map(|s| s.value());

        let fullscreen = fullscreen.unwrap_or_else(|| {
            self.store
                .get(SettingKey::Fullscreen)
                .as_bool()
                .unwrap_or_default()
        });
        let resolution = match resolution_index.and_then(|i| self.resolutions.get(i)) {
            Some(resolution) => *resolution,
            None => {
                tracing::warn!("No display resolutions available, keeping the current size");
                Resolution::new(
                    self.store
                        .get(SettingKey::ResolutionWidth)
                        .as_int()
                        .unwrap_or_default(),
                    self.store
                        .get(SettingKey::ResolutionHeight)
                        .as_int()
                        .unwrap_or_default(),
                )
            }
        };

        let writes = [
            (SettingKey::ResolutionWidth, SettingValue::Int(resolution.width)),
            (SettingKey::ResolutionHeight, SettingValue::Int(resolution.height)),
            (SettingKey::Fullscreen, SettingValue::Bool(fullscreen)),
        ];
        for (key, value) in writes {
            if let Err(e) = self.store.set(key, value) {
                tracing::error!("Failed to write '{}': {}", key, e);
            }
        }
        tracing::info!(
            "Switching display to {} (fullscreen: {})",
            resolution,
            fullscreen
        );
        self.display
            .set_resolution(resolution.width, resolution.height, fullscreen);

        match quality_index {
            Some(level) => {
                if let Err(e) = self.store.set(SettingKey::QualityLevel, SettingValue::Int(level)) {
                    tracing::error!("Failed to write '{}': {}", SettingKey::QualityLevel, e);
                }
                self.display.set_quality_level(level);
            }
            None => tracing::warn!("No quality levels available, keeping the current level"),
        }
    }

    /// Save, then pop this window from the host stack. The window closes
    /// even when persisting fails.
    pub fn close(&mut self, ui: &mut dyn UiManager) -> Result<(), StoreError> {
        self.setup();
        if self.state == WindowState::Closed {
            return Ok(());
        }
        let result = self.save_settings();
        if let Err(e) = &result {
            tracing::error!("Failed to save settings: {}", e);
        }
        self.state = WindowState::Closed;
        ui.pop_window();
        tracing::info!("Advanced settings closed");
        result
    }

    fn bound(&self, kind: BindingKind) -> Option<&Control> {
        self.controls
            .iter()
            .find(|bound| bound.binding == Some(kind))
            .map(|bound| &bound.control)
    }

    pub fn is_open(&self) -> bool {
        self.state != WindowState::Closed
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_buttons(&self) -> &[PageButton] {
        &self.page_buttons
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The visible page, once set up.
    pub fn visible_page(&self) -> Option<&Page> {
        self.pages.get(self.current_page)
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.index()).map(|bound| &bound.control)
    }

    /// Find a control by the text key it was created with.
    pub fn find_control(&self, key: &str) -> Option<ControlId> {
        self.controls
            .iter()
            .position(|bound| bound.key == key)
            .map(ControlId)
    }

    /// Binding of a control, if it writes to the store.
    pub fn binding(&self, id: ControlId) -> Option<BindingKind> {
        self.controls.get(id.index()).and_then(|bound| bound.binding)
    }

    pub fn applies_screen_changes(&self) -> bool {
        self.apply_screen_changes
    }

    pub fn close_button_text(&self) -> &'static str {
        CLOSE_BUTTON_TEXT
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give the store back to the host.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Value of `control` as a property of type `kind`.
fn control_value(control: &Control, kind: ValueKind) -> Option<SettingValue> {
    match (control, kind) {
        (Control::Checkbox(checkbox), ValueKind::Bool) => {
            Some(SettingValue::Bool(checkbox.is_checked()))
        }
        (Control::Slider(slider), ValueKind::Int) => Some(SettingValue::Int(slider.value())),
        (Control::Slider(slider), ValueKind::Float) => {
            Some(SettingValue::Float(slider.float_value()))
        }
        (Control::TextBox(text_box), ValueKind::Text) => {
            Some(SettingValue::Text(text_box.text().to_string()))
        }
        (Control::ColorPicker(picker), ValueKind::Color) => {
            Some(SettingValue::Color(picker.color()))
        }
        _ => None,
    }
}

/// Typed text parsed as a float and clamped, or `None` when it is not a number.
fn parse_clamped(control: &Control, min: f32, max: f32) -> Option<f32> {
    let text = control.as_text_box()?.text();
    match text.trim().parse::<f32>() {
        Ok(value) if !value.is_nan() => Some(value.clamp(min, max)),
        _ => {
            tracing::warn!("Ignoring non-numeric attack threshold '{}'", text);
            None
        }
    }
}
