//! Headless widget model for settings forms
//!
//! Widgets hold state only. Hosts render them however they like and feed
//! edits back through the owning form.

use crate::app::color::Color;

/// Number of scroll steps across a float slider's range.
pub const FLOAT_SLIDER_STEPS: i32 = 100;

/// Index of a control inside its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A labeled on/off toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
    pub label: String,
    pub tooltip: String,
    checked: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, tooltip: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
            checked,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// What a slider selects and how it is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum Indicator {
    /// Whole numbers in `min..=max`
    Int { min: i32, max: i32, value: i32 },
    /// Real numbers in `min..=max`, scrolled in [`FLOAT_SLIDER_STEPS`] steps
    Float { min: f32, max: f32, value: f32 },
    /// One of a list of named options
    Choices { options: Vec<String>, index: usize },
}

/// A horizontal slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    indicator: Indicator,
}

impl Slider {
    /// Integer slider. `start` is clamped into range.
    pub fn int(min: i32, max: i32, start: i32) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self {
            indicator: Indicator::Int {
                min,
                max,
                value: start.clamp(min, max),
            },
        }
    }

    /// Float slider. `start` is clamped into range.
    pub fn float(min: f32, max: f32, start: f32) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self {
            indicator: Indicator::Float {
                min,
                max,
                value: start.clamp(min, max),
            },
        }
    }

    /// Multiple-choice slider. Out-of-range or negative selections pick the
    /// first option.
    pub fn choices(options: Vec<String>, selected: i32) -> Self {
        let index = usize::try_from(selected)
            .ok()
            .filter(|&i| i < options.len())
            .unwrap_or(0);
        Self {
            indicator: Indicator::Choices { options, index },
        }
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    /// Number of discrete positions.
    pub fn total_units(&self) -> usize {
        match &self.indicator {
            Indicator::Int { min, max, .. } => (max - min) as usize + 1,
            Indicator::Float { .. } => FLOAT_SLIDER_STEPS as usize + 1,
            Indicator::Choices { options, .. } => options.len(),
        }
    }

    /// Current position, from 0 to `total_units() - 1`.
    pub fn scroll_index(&self) -> usize {
        match &self.indicator {
            Indicator::Int { min, value, .. } => (value - min) as usize,
            Indicator::Float { min, max, value } => {
                if max > min {
                    ((value - min) / (max - min) * FLOAT_SLIDER_STEPS as f32).round() as usize
                } else {
                    0
                }
            }
            Indicator::Choices { index, .. } => *index,
        }
    }

    /// Integer value: the number for int sliders, the rounded number for
    /// float sliders, the option index for choice sliders.
    pub fn value(&self) -> i32 {
        match &self.indicator {
            Indicator::Int { value, .. } => *value,
            Indicator::Float { value, .. } => value.round() as i32,
            Indicator::Choices { index, .. } => *index as i32,
        }
    }

    pub fn float_value(&self) -> f32 {
        match &self.indicator {
            Indicator::Int { value, .. } => *value as f32,
            Indicator::Float { value, .. } => *value,
            Indicator::Choices { index, .. } => *index as f32,
        }
    }

    /// Selected option text for choice sliders.
    pub fn selected_option(&self) -> Option<&str> {
        match &self.indicator {
            Indicator::Choices { options, index } => options.get(*index).map(String::as_str),
            _ => None,
        }
    }

    /// Text shown next to the slider.
    pub fn display_text(&self) -> String {
        match &self.indicator {
            Indicator::Int { value, .. } => value.to_string(),
            Indicator::Float { value, .. } => format!("{:.2}", value),
            Indicator::Choices { .. } => self.selected_option().unwrap_or_default().to_string(),
        }
    }

    /// Move by `steps` positions, clamped to the ends. Returns whether the
    /// value changed.
    pub fn scroll(&mut self, steps: i32) -> bool {
        let before = self.indicator.clone();
        match &mut self.indicator {
            Indicator::Int { min, max, value } => {
                *value = value.saturating_add(steps).clamp(*min, *max);
            }
            Indicator::Float { min, max, value } => {
                let step = (*max - *min) / FLOAT_SLIDER_STEPS as f32;
                *value = (*value + step * steps as f32).clamp(*min, *max);
            }
            Indicator::Choices { options, index } => {
                if let Some(last) = options.len().checked_sub(1) {
                    let target = (*index as i64 + steps as i64).clamp(0, last as i64);
                    *index = target as usize;
                }
            }
        }
        self.indicator != before
    }

    /// Jump to a position. Returns whether the value changed.
    pub fn set_scroll_index(&mut self, position: usize) -> bool {
        // Float positions are lossy, so go straight to the position's value.
        if let Indicator::Float { min, max, value } = &mut self.indicator {
            let before = *value;
            let position = position.min(FLOAT_SLIDER_STEPS as usize) as f32;
            *value = *min + (*max - *min) * position / FLOAT_SLIDER_STEPS as f32;
            return *value != before;
        }
        let current = self.scroll_index() as i64;
        let steps = (position as i64 - current).clamp(i32::MIN as i64, i32::MAX as i64);
        self.scroll(steps as i32)
    }

    /// Set the numeric value directly (clamped). Choice sliders treat the
    /// value as an option index.
    pub fn set_value(&mut self, new_value: f32) -> bool {
        match &mut self.indicator {
            Indicator::Float { min, max, value } => {
                let before = *value;
                *value = new_value.clamp(*min, *max);
                *value != before
            }
            Indicator::Int { min, max, value } => {
                let before = *value;
                *value = (new_value.round() as i32).clamp(*min, *max);
                *value != before
            }
            Indicator::Choices { options, index } => {
                let before = *index;
                let last = options.len().saturating_sub(1);
                *index = (new_value.max(0.0).round() as usize).min(last);
                *index != before
            }
        }
    }
}

/// A single-line text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    text: String,
    /// Shown while `text` is empty
    pub default_text: String,
    pub max_characters: usize,
    pub read_only: bool,
}

impl TextBox {
    pub fn new(default_text: impl Into<String>, max_characters: usize) -> Self {
        Self {
            text: String::new(),
            default_text: default_text.into(),
            max_characters,
            read_only: false,
        }
    }

    /// Text typed by the user (empty until edited).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Typed text, or the default text while nothing has been typed.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.default_text
        } else {
            &self.text
        }
    }

    /// Replace the typed text, truncated to `max_characters`. Read-only
    /// boxes ignore edits. Returns whether the text changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.read_only {
            return false;
        }
        let truncated: String = text.chars().take(self.max_characters).collect();
        if truncated == self.text {
            return false;
        }
        self.text = truncated;
        true
    }
}

/// A color swatch that opens a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    color: Color,
}

impl ColorPicker {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Any interactive widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Checkbox(Checkbox),
    Slider(Slider),
    TextBox(TextBox),
    ColorPicker(ColorPicker),
}

impl Control {
    pub fn as_checkbox(&self) -> Option<&Checkbox> {
        match self {
            Control::Checkbox(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            Control::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text_box(&self) -> Option<&TextBox> {
        match self {
            Control::TextBox(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_color_picker(&self) -> Option<&ColorPicker> {
        match self {
            Control::ColorPicker(c) => Some(c),
            _ => None,
        }
    }
}
