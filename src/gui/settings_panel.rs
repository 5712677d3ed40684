use eframe::egui::{self, Color32, Slider};

use crate::settings::{
    self, OverlayConfig, FONT_MAX, FONT_MIN, OPACITY_MAX, OPACITY_MIN,
};

pub const FONT_CHOICES: [&str; 4] = ["Consolas", "Courier New", "Segoe UI", "Arial"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    Saved,
    Cancelled,
}

/// Working copy of the appearance settings. Edits preview live; the stored
/// config only changes on Save.
pub struct SettingsPanel {
    pub opacity: f32,
    pub font_family: String,
    pub font_size: f32,
    pub font_color: Color32,
    pub bg_color: Color32,
}

impl SettingsPanel {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            opacity: config.opacity,
            font_family: config.font_family.clone(),
            font_size: config.font_size,
            font_color: settings::parse_hex_color(&config.font_color)
                .unwrap_or(Color32::WHITE),
            bg_color: settings::parse_hex_color(&config.bg_color)
                .unwrap_or(Color32::from_rgb(0x2d, 0x2d, 0x2d)),
        }
    }

    pub fn apply_to(&self, config: &mut OverlayConfig) {
        config.opacity = self.opacity;
        config.font_family = self.font_family.clone();
        config.font_size = self.font_size;
        config.font_color = settings::color_to_hex(self.font_color);
        config.bg_color = settings::color_to_hex(self.bg_color);
        config.sanitize();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<SettingsOutcome> {
        let mut outcome = None;

        ui.label(egui::RichText::new("Settings").strong());
        ui.separator();

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Opacity");
                ui.add(Slider::new(&mut self.opacity, OPACITY_MIN..=OPACITY_MAX));
                ui.end_row();

                ui.label("Font");
                egui::ComboBox::from_id_source("font_family")
                    .selected_text(self.font_family.clone())
                    .show_ui(ui, |ui| {
                        for choice in FONT_CHOICES {
                            ui.selectable_value(
                                &mut self.font_family,
                                choice.to_string(),
                                choice,
                            );
                        }
                    });
                ui.end_row();

                ui.label("Font size");
                ui.add(Slider::new(&mut self.font_size, FONT_MIN..=FONT_MAX).step_by(1.0));
                ui.end_row();

                ui.label("Text color");
                ui.color_edit_button_srgba(&mut self.font_color);
                ui.end_row();

                ui.label("Background");
                ui.color_edit_button_srgba(&mut self.bg_color);
                ui.end_row();
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                outcome = Some(SettingsOutcome::Saved);
            }
            if ui.button("Cancel").clicked() {
                outcome = Some(SettingsOutcome::Cancelled);
            }
        });

        outcome
    }
}
