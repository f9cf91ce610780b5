//! # Customers View
//!
//! Table of customers with their resolved plan name, status badge and dues.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::CustomerRow;

use backend::io::forms::EntityKind;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{card_frame, page_heading, primary_button, status_badge};
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_customers_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| page_heading(ui, "Customers", "Subscribers, their plans and dues"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, "+ Add Customer").clicked() {
                    self.queue(AppAction::OpenEditor {
                        kind: EntityKind::Customer,
                        editing_id: None,
                    });
                }
            });
        });
        ui.add_space(12.0);

        let rows = match self.backend.customer_service.customer_rows(&self.backend.config) {
            Ok(rows) => rows,
            Err(e) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load customers: {}", e));
                return;
            }
        };

        let mut actions = Vec::new();
        card_frame().show(ui, |ui| {
            if rows.is_empty() {
                ui.label("No customers yet.");
                return;
            }
            render_customer_table(ui, &rows, &mut actions);
        });
        self.pending_actions.extend(actions);
    }
}

fn render_customer_table(ui: &mut egui::Ui, rows: &[CustomerRow], actions: &mut Vec<AppAction>) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(200.0).at_least(140.0))
        .column(Column::initial(130.0))
        .column(Column::initial(200.0))
        .column(Column::initial(120.0))
        .column(Column::initial(90.0))
        .column(Column::initial(90.0))
        .column(Column::remainder())
        .header(32.0, |mut header| {
            for title in ["CUSTOMER", "PHONE", "PLAN", "AREA", "STATUS", "DUES", "ACTIONS"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).size(12.0).strong().color(CURRENT_THEME.typography.secondary));
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(40.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&row.name).strong());
                            ui.label(egui::RichText::new(&row.id).size(11.0).color(CURRENT_THEME.typography.secondary));
                        });
                    });
                    table_row.col(|ui| {
                        ui.label(row.phone.as_str());
                    });
                    table_row.col(|ui| {
                        ui.label(row.plan_name.as_str());
                    });
                    table_row.col(|ui| {
                        ui.label(row.area.as_str());
                    });
                    table_row.col(|ui| {
                        status_badge(ui, row.status.as_str(), CURRENT_THEME.subscription_color(row.status));
                    });
                    table_row.col(|ui| {
                        let color = if row.has_due {
                            CURRENT_THEME.status.negative
                        } else {
                            CURRENT_THEME.status.positive
                        };
                        ui.label(egui::RichText::new(&row.due_label).color(color).strong());
                    });
                    table_row.col(|ui| {
                        if ui.small_button("✏ Edit").clicked() {
                            actions.push(AppAction::OpenEditor {
                                kind: EntityKind::Customer,
                                editing_id: Some(row.id.clone()),
                            });
                        }
                        if ui.small_button("🗑 Delete").clicked() {
                            actions.push(AppAction::RequestDelete {
                                kind: EntityKind::Customer,
                                id: row.id.clone(),
                            });
                        }
                    });
                });
            }
        });
}
