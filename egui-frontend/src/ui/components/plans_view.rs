//! # Plans View
//!
//! One card per subscription plan.

use eframe::egui;
use shared::Plan;

use backend::io::forms::EntityKind;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{card_frame, page_heading, primary_button, status_badge};
use crate::ui::components::theme::CURRENT_THEME;

const CARDS_PER_ROW: usize = 3;

impl AdminDashboardApp {
    pub fn render_plans_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| page_heading(ui, "Subscription Plans", "What customers can subscribe to"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, "+ Add Plan").clicked() {
                    self.queue(AppAction::OpenEditor {
                        kind: EntityKind::Plan,
                        editing_id: None,
                    });
                }
            });
        });
        ui.add_space(12.0);

        let plans = match self.backend.plan_service.list_plans() {
            Ok(plans) => plans,
            Err(e) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load plans: {}", e));
                return;
            }
        };
        if plans.is_empty() {
            ui.label("No plans yet.");
            return;
        }

        let mut actions = Vec::new();
        for chunk in plans.chunks(CARDS_PER_ROW) {
            ui.columns(CARDS_PER_ROW, |columns| {
                for (column, plan) in columns.iter_mut().zip(chunk) {
                    self.render_plan_card(column, plan, &mut actions);
                }
            });
            ui.add_space(12.0);
        }
        self.pending_actions.extend(actions);
    }

    fn render_plan_card(&self, ui: &mut egui::Ui, plan: &Plan, actions: &mut Vec<AppAction>) {
        card_frame().show(ui, |ui| {
            ui.set_min_height(170.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&plan.name).size(16.0).strong());
                if !plan.is_active {
                    status_badge(ui, "Inactive", CURRENT_THEME.status.neutral);
                }
            });
            ui.label(
                egui::RichText::new(format!(
                    "{} / {}",
                    self.backend.config.format_currency(plan.price),
                    plan.billing_type
                ))
                .size(20.0)
                .strong()
                .color(CURRENT_THEME.interactive.accent),
            );
            ui.label(format!("🍽 {} meals per week", plan.meals_per_week));
            ui.label(egui::RichText::new(&plan.description).color(CURRENT_THEME.typography.secondary));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("✏ Edit").clicked() {
                    actions.push(AppAction::OpenEditor {
                        kind: EntityKind::Plan,
                        editing_id: Some(plan.id.clone()),
                    });
                }
                if ui.button("🗑 Delete").clicked() {
                    actions.push(AppAction::RequestDelete {
                        kind: EntityKind::Plan,
                        id: plan.id.clone(),
                    });
                }
            });
        });
    }
}
