//! # Sidebar
//!
//! Brand block and the navigation list. Clicking an item queues a
//! `Navigate` action.

use eframe::egui;

use crate::ui::actions::AppAction;
use crate::ui::app_state::{AdminDashboardApp, MainView};
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.label(
            egui::RichText::new(&self.backend.config.business_name)
                .size(20.0)
                .strong()
                .color(CURRENT_THEME.interactive.accent),
        );
        ui.label(
            egui::RichText::new("Admin Console")
                .size(12.0)
                .color(CURRENT_THEME.typography.on_dark),
        );
        ui.add_space(24.0);

        for view in MainView::ALL {
            let selected = self.current_view == view;
            let text_color = if selected {
                CURRENT_THEME.interactive.accent
            } else {
                CURRENT_THEME.typography.on_dark
            };

            let button = egui::Button::new(
                egui::RichText::new(format!("{}  {}", view.icon(), view.label())).color(text_color),
            )
            .fill(if selected {
                CURRENT_THEME.interactive.accent_soft
            } else {
                egui::Color32::TRANSPARENT
            })
            .min_size(egui::vec2(ui.available_width(), 36.0));

            if ui.add(button).clicked() && !selected {
                self.queue(AppAction::Navigate(view));
            }
        }
    }
}
