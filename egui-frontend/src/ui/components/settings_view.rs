//! # Settings View
//!
//! Delivery zones, default GST and working days. Edits stay in a local draft;
//! "Save Changes" only acknowledges them.

use eframe::egui;

use backend::domain::WorkingDays;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{card_frame, page_heading, primary_button, status_badge};
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_settings_view(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Settings", "Business configuration");
        ui.add_space(12.0);

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Delivery Zones").size(16.0).strong());
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for zone in self.backend.settings.featured_zones() {
                    status_badge(ui, zone.as_str(), CURRENT_THEME.interactive.accent);
                }
                let hidden = self.backend.settings.delivery_zones.len() - self.backend.settings.featured_zones().len();
                if hidden > 0 {
                    ui.label(egui::RichText::new(format!("+{} more", hidden)).color(CURRENT_THEME.typography.secondary));
                }
            });
        });
        ui.add_space(12.0);

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Billing & Schedule").size(16.0).strong());
            ui.add_space(6.0);
            egui::Grid::new("settings_fields")
                .num_columns(2)
                .spacing([16.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Default GST (%)");
                    ui.add(egui::TextEdit::singleline(&mut self.settings_draft.default_gst_text).desired_width(80.0));
                    ui.end_row();

                    ui.label("Working Days");
                    egui::ComboBox::from_id_source("settings_working_days")
                        .selected_text(self.settings_draft.working_days.as_str())
                        .show_ui(ui, |ui| {
                            for days in WorkingDays::ALL {
                                ui.selectable_value(&mut self.settings_draft.working_days, days, days.as_str());
                            }
                        });
                    ui.end_row();
                });
        });
        ui.add_space(12.0);

        if primary_button(ui, "Save Changes").clicked() {
            self.queue(AppAction::SaveSettings);
        }
    }
}
