//! egui rendering of the advanced settings window
//!
//! The window model owns all state; this module only draws it and reports
//! edits back as [`FormCommand`]s for the caller to dispatch.

use eframe::egui::{self, Context, Ui};
use wayrest_core::app::color::Color;
use wayrest_core::app::display::DisplayBackend;
use wayrest_core::app::store::SettingsStore;
use wayrest_core::app::ui::settings::{Column, FormCommand, Item, SettingsWindow};
use wayrest_core::app::ui::widgets::{Control, ControlId, Indicator, Slider, TextBox};

/// Width of settings text boxes in points.
const TEXT_BOX_WIDTH: f32 = 60.0;

/// Draw the settings window and return the edits made this frame.
pub fn show<S: SettingsStore, D: DisplayBackend>(
    ctx: &Context,
    window: &SettingsWindow<S, D>,
) -> Vec<FormCommand> {
    let mut commands = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        // Page bar
        ui.horizontal(|ui| {
            for button in window.page_buttons() {
                let clicked = ui.selectable_label(button.selected, &button.name).clicked();
                if clicked && !button.selected {
                    commands.push(FormCommand::SelectPage(button.name.clone()));
                }
            }
        });

        ui.separator();

        if let Some(page) = window.visible_page() {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    show_column(&mut columns[0], window, &page.left, &mut commands);
                    show_column(&mut columns[1], window, &page.right, &mut commands);
                });
            });
        }

        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(window.close_button_text()).clicked() {
                commands.push(FormCommand::Close);
            }
        });
    });

    commands
}

fn show_column<S: SettingsStore, D: DisplayBackend>(
    ui: &mut Ui,
    window: &SettingsWindow<S, D>,
    column: &Column,
    commands: &mut Vec<FormCommand>,
) {
    for item in &column.items {
        match item {
            Item::SectionTitle { text, .. } => {
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    ui.strong(text);
                });
            }
            Item::Label { text, tooltip, .. } | Item::Info { text, tooltip, .. } => {
                with_tooltip(ui.label(text), tooltip);
            }
            Item::Control { id, .. } => match window.control(*id) {
                Some(control) => show_control(ui, *id, control, commands),
                None => tracing::warn!("Page refers to missing control {:?}", id),
            },
        }
    }
}

fn show_control(ui: &mut Ui, id: ControlId, control: &Control, commands: &mut Vec<FormCommand>) {
    match control {
        Control::Checkbox(checkbox) => {
            let mut checked = checkbox.is_checked();
            let response = ui.checkbox(&mut checked, &checkbox.label);
            let response = with_tooltip(response, &checkbox.tooltip);
            if response.changed() {
                commands.push(FormCommand::SetChecked(id, checked));
            }
        }
        Control::Slider(slider) => show_slider(ui, id, slider, commands),
        Control::TextBox(text_box) => show_text_box(ui, id, text_box, commands),
        Control::ColorPicker(picker) => {
            let color = picker.color();
            let mut rgba = [color.r, color.g, color.b, color.a];
            if ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed() {
                let [r, g, b, a] = rgba;
                commands.push(FormCommand::SetColor(id, Color::rgba(r, g, b, a)));
            }
        }
    }
}

fn show_slider(ui: &mut Ui, id: ControlId, slider: &Slider, commands: &mut Vec<FormCommand>) {
    match slider.indicator() {
        Indicator::Int { min, max, value } => {
            let mut value = *value;
            if ui.add(egui::Slider::new(&mut value, *min..=*max)).changed() {
                commands.push(FormCommand::SetSliderValue(id, value as f32));
            }
        }
        Indicator::Float { min, max, value } => {
            let mut value = *value;
            let widget = egui::Slider::new(&mut value, *min..=*max).fixed_decimals(2);
            if ui.add(widget).changed() {
                commands.push(FormCommand::SetSliderValue(id, value));
            }
        }
        Indicator::Choices { options, index } => {
            let Some(last) = options.len().checked_sub(1) else {
                ui.weak("-");
                return;
            };
            let mut index = *index;
            ui.horizontal(|ui| {
                let response = ui.add(egui::Slider::new(&mut index, 0..=last).show_value(false));
                ui.label(slider.display_text());
                if response.changed() {
                    commands.push(FormCommand::SetSliderIndex(id, index));
                }
            });
        }
    }
}

fn show_text_box(ui: &mut Ui, id: ControlId, text_box: &TextBox, commands: &mut Vec<FormCommand>) {
    let mut text = text_box.text().to_string();
    let edit = egui::TextEdit::singleline(&mut text)
        .hint_text(text_box.default_text.as_str())
        .char_limit(text_box.max_characters)
        .desired_width(TEXT_BOX_WIDTH);
    if ui.add_enabled(!text_box.read_only, edit).changed() {
        commands.push(FormCommand::SetText(id, text));
    }
}

fn with_tooltip(response: egui::Response, tooltip: &str) -> egui::Response {
    if tooltip.is_empty() {
        response
    } else {
        response.on_hover_text(tooltip)
    }
}
