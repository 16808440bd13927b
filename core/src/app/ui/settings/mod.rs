//! Advanced settings window
//!
//! A paginated form of checkboxes, sliders, text boxes and color pickers bound
//! to a [`SettingsStore`](crate::app::store::SettingsStore). The window is
//! headless: hosts render [`SettingsWindow::pages`] and feed edits back as
//! [`FormCommand`]s.

mod binding;
mod pages;
mod types;
mod ui;

#[cfg(test)]
mod tests;

pub use binding::{BindingKind, InteractionModeIcon};
pub use pages::{ATTACK_THRESHOLD_RANGE, TEXT_BOX_MAX_CHARACTERS};
pub use types::{
    CLOSE_BUTTON_TEXT, Column, FormCommand, ITEM_SPACING, Item, PAGE_BUTTON_WIDTH, Page,
    PageButton, SECTION_SPACING, SLIDER_LABEL_SPACING, SettingsAction,
};
pub use ui::{DEFAULT_NEXT_PAGE_KEY, SettingsWindow};
