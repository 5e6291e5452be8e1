//! Manual overrides for the suggested styling. Only shown once a code is ready.

use egui::color_picker::color_edit_button_srgb;
use egui::{ComboBox, DragValue, Ui};
use qrstudio_business::{ErrorCorrectionLevel, MAX_MARGIN, format_hex_color, parse_hex_color};

use crate::state::State;

pub fn customization(state: &mut State, ui: &mut Ui) {
    let settings = state.session.settings().clone();

    ui.heading("Customize");
    ui.add_space(4.0);

    egui::Grid::new("customization_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Label");
            let mut label = settings.label.clone();
            if ui.text_edit_singleline(&mut label).changed() {
                state.session.edit_label(label);
            }
            ui.end_row();

            ui.label("Foreground");
            if let Some(hex) = color_button(ui, &settings.primary_color) {
                state.session.edit_primary_color(hex);
            }
            ui.end_row();

            ui.label("Background");
            if let Some(hex) = color_button(ui, &settings.secondary_color) {
                state.session.edit_secondary_color(hex);
            }
            ui.end_row();

            ui.label("Error correction");
            let mut level = settings.error_correction_level;
            ComboBox::from_id_salt("error_correction_level")
                .selected_text(level.label())
                .show_ui(ui, |ui| {
                    for option in ErrorCorrectionLevel::ALL {
                        ui.selectable_value(&mut level, option, option.label());
                    }
                });
            if level != settings.error_correction_level {
                state.session.edit_error_correction_level(level);
            }
            ui.end_row();

            ui.label("Margin");
            let mut margin = settings.margin;
            if ui
                .add(DragValue::new(&mut margin).range(0..=MAX_MARGIN).suffix(" modules"))
                .changed()
            {
                state.session.edit_margin(margin);
            }
            ui.end_row();
        });
}

/// Color swatch plus its hex code. Returns the new hex when the user picks a color.
fn color_button(ui: &mut Ui, current: &str) -> Option<String> {
    let mut rgb = parse_hex_color(current).unwrap_or_default();
    let mut picked = None;
    ui.horizontal(|ui| {
        if color_edit_button_srgb(ui, &mut rgb).changed() {
            picked = Some(format_hex_color(rgb));
        }
        ui.monospace(current);
    });
    picked
}
