//! # Orders View
//!
//! Today's orders with search and area filtering, driver assignment and the
//! status-transition buttons. Delivered orders show no transition buttons.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{DeliveryStatus, Driver, OrderRow, Zone};

use backend::domain::commands::order::AreaFilter;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{avatar, card_frame, page_heading, primary_button, status_badge};
use crate::ui::components::theme::CURRENT_THEME;

/// Transitions offered for any order that is not yet delivered
const TRANSITIONS: [DeliveryStatus; 3] = [
    DeliveryStatus::Delivered,
    DeliveryStatus::OutForDelivery,
    DeliveryStatus::Skipped,
];

impl AdminDashboardApp {
    pub fn render_orders_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| page_heading(ui, "Orders & Delivery", "Track and dispatch today's meals"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, "🔀 Auto Assign Drivers").clicked() {
                    self.queue(AppAction::AutoAssignDrivers);
                }
            });
        });
        ui.add_space(12.0);

        self.render_order_filters(ui);
        ui.add_space(12.0);

        let rows = self
            .backend
            .order_service
            .order_rows(&self.orders.query, &self.backend.config);
        let drivers = self.backend.driver_service.list_drivers();
        let (rows, drivers) = match (rows, drivers) {
            (Ok(rows), Ok(drivers)) => (rows, drivers),
            (Err(e), _) | (_, Err(e)) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load orders: {}", e));
                return;
            }
        };

        let mut actions = Vec::new();
        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("Today's Orders ({})", rows.len()))
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(8.0);
            if rows.is_empty() {
                ui.label("No orders match the current filters.");
                return;
            }
            render_order_table(ui, &rows, &drivers, &mut actions);
        });
        self.pending_actions.extend(actions);
    }

    fn render_order_filters(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.orders.query.search)
                    .hint_text("🔍 Search by customer or order id")
                    .desired_width(280.0),
            );

            let mut area = self.orders.query.area;
            egui::ComboBox::from_id_source("orders_area_filter")
                .selected_text(area.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut area, AreaFilter::All, AreaFilter::All.label());
                    for zone in Zone::ALL {
                        ui.selectable_value(&mut area, AreaFilter::Zone(zone), zone.as_str());
                    }
                });
            if area != self.orders.query.area {
                self.orders.set_area(area);
            }
        });
    }
}

fn render_order_table(ui: &mut egui::Ui, rows: &[OrderRow], drivers: &[Driver], actions: &mut Vec<AppAction>) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(90.0))
        .column(Column::initial(200.0))
        .column(Column::initial(220.0))
        .column(Column::initial(200.0))
        .column(Column::initial(120.0))
        .column(Column::remainder())
        .header(32.0, |mut header| {
            for title in ["ORDER", "CUSTOMER / PLAN", "ADDRESS", "DRIVER", "STATUS", "ACTIONS"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).size(12.0).strong().color(CURRENT_THEME.typography.secondary));
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(52.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(egui::RichText::new(&row.id).monospace());
                    });
                    table_row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&row.customer_name).strong());
                            ui.label(egui::RichText::new(&row.plan_name).size(11.0).color(CURRENT_THEME.typography.secondary));
                            if let Some(note) = &row.note {
                                ui.label(egui::RichText::new(format!("📝 {}", note)).size(11.0).color(CURRENT_THEME.status.warning));
                            }
                        });
                    });
                    table_row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(row.address.as_str());
                            ui.label(egui::RichText::new(row.area.as_str()).size(11.0).color(CURRENT_THEME.typography.secondary));
                        });
                    });
                    table_row.col(|ui| {
                        avatar(ui, row.driver_initial, 24.0);
                        if let Some(action) = driver_selector(ui, row, drivers) {
                            actions.push(action);
                        }
                    });
                    table_row.col(|ui| {
                        status_badge(ui, row.status.as_str(), CURRENT_THEME.delivery_color(row.status));
                    });
                    table_row.col(|ui| {
                        if !row.can_change_status {
                            return;
                        }
                        for status in TRANSITIONS.iter().copied().filter(|status| *status != row.status) {
                            if ui.small_button(status.as_str()).clicked() {
                                actions.push(AppAction::UpdateOrderStatus {
                                    order_id: row.id.clone(),
                                    status,
                                });
                            }
                        }
                    });
                });
            }
        });
}

/// Driver dropdown for one order; yields an action when the selection changes
fn driver_selector(ui: &mut egui::Ui, row: &OrderRow, drivers: &[Driver]) -> Option<AppAction> {
    let mut selected = row.driver_id.clone();
    egui::ComboBox::from_id_source(("order_driver", row.id.as_str()))
        .selected_text(row.driver_label.as_str())
        .width(150.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, "Unassigned");
            for driver in drivers {
                let label = format!("{} ({})", driver.name, driver.assigned_area);
                ui.selectable_value(&mut selected, Some(driver.id.clone()), label);
            }
        });

    (selected != row.driver_id).then(|| AppAction::AssignDriver {
        order_id: row.id.clone(),
        driver_id: selected,
    })
}
