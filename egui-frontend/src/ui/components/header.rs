//! # Header
//!
//! Top bar with the current view's title and today's date in long form, plus
//! the success and error banner shown under it.

use eframe::egui;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::theme::CURRENT_THEME;

/// e.g. "Wednesday, 15 November 2023"
pub const LONG_DATE_FORMAT: &str = "%A, %-d %B %Y";

impl AdminDashboardApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.current_view.label())
                    .size(18.0)
                    .strong()
                    .color(CURRENT_THEME.typography.heading),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let today = self.backend.today().format(LONG_DATE_FORMAT).to_string();
                ui.label(egui::RichText::new(today).color(CURRENT_THEME.typography.secondary));
            });
        });
        ui.add_space(8.0);
    }

    /// Success or error banner with a dismiss button
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismiss = false;

        if let Some(error) = &self.ui.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(CURRENT_THEME.status.negative, format!("❌ {}", error));
                dismiss = ui.small_button("✖").clicked();
            });
        }
        if let Some(success) = &self.ui.success_message {
            ui.horizontal(|ui| {
                ui.colored_label(CURRENT_THEME.status.positive, format!("✅ {}", success));
                dismiss = ui.small_button("✖").clicked();
            });
        }

        if dismiss {
            self.queue(AppAction::DismissMessages);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_long_date_format() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        assert_eq!(date.format(LONG_DATE_FORMAT).to_string(), "Sunday, 5 November 2023");
    }
}
