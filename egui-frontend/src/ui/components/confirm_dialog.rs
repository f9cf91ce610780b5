//! # Confirm Dialog
//!
//! The only guard on destructive actions: a delete stays pending until the
//! user confirms it here.

use eframe::egui;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending_confirmation else {
            return;
        };
        let prompt = pending.prompt();
        let target = format!("{} {}", pending.kind, pending.id);

        let mut should_confirm = false;
        let mut should_cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(prompt).size(15.0));
                ui.label(egui::RichText::new(target).size(12.0).color(CURRENT_THEME.typography.secondary));
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let delete = egui::Button::new(egui::RichText::new("Delete").color(egui::Color32::WHITE))
                        .fill(CURRENT_THEME.interactive.danger);
                    if ui.add(delete).clicked() {
                        should_confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        should_cancel = true;
                    }
                });
            });

        if should_confirm {
            self.queue(AppAction::ConfirmDelete);
        } else if should_cancel {
            self.queue(AppAction::CancelDelete);
        }
    }
}
