//! Public types for settings window commands, actions and layout

use crate::app::color::Color;
use crate::app::ui::widgets::ControlId;

/// Width of each page selector button.
pub const PAGE_BUTTON_WIDTH: f32 = 60.0;

pub const SECTION_SPACING: f32 = 12.0;
pub const ITEM_SPACING: f32 = 10.0;
/// Extra space between a slider's label and the slider.
pub const SLIDER_LABEL_SPACING: f32 = 6.0;

pub const CLOSE_BUTTON_TEXT: &str = "Close";

/// Commands a host sends to the settings window.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    /// Show the next page, wrapping after the last
    NextPage,
    /// Show the page with this name (page button click)
    SelectPage(String),
    /// Flip a checkbox
    Toggle(ControlId),
    SetChecked(ControlId, bool),
    /// Move a slider by a number of positions
    Scroll(ControlId, i32),
    SetSliderIndex(ControlId, usize),
    SetSliderValue(ControlId, f32),
    SetText(ControlId, String),
    /// Result of a color picker
    SetColor(ControlId, Color),
    /// Save everything and dismiss the window
    Close,
}

/// Actions returned from the settings window
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A different page is now visible
    PageChanged(usize),
    /// A control's value changed
    ControlChanged(ControlId),
    /// Settings were saved and the window popped itself
    Closed,
    /// The window popped itself but persisting failed
    SaveFailed(String),
}

/// Something placed in a page column.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Centered section heading
    SectionTitle { text: String, y: f32 },
    /// Caption above a slider, text box or color picker
    Label { text: String, tooltip: String, y: f32 },
    /// Read-only information line
    Info { text: String, tooltip: String, y: f32 },
    /// An interactive control
    Control { id: ControlId, y: f32 },
}

/// One column of a page, laid out top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub items: Vec<Item>,
    /// Layout cursor for the next item
    pub(crate) y: f32,
}

impl Column {
    /// Controls in this column, in layout order.
    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Control { id, .. } => Some(*id),
            _ => None,
        })
    }
}

/// One tab of settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Localized title; also the name used for page selection
    pub name: String,
    pub visible: bool,
    pub left: Column,
    pub right: Column,
}

/// Page selector in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub struct PageButton {
    pub name: String,
    pub selected: bool,
    /// Horizontal offset inside the bar
    pub x: f32,
}
