//! # Finances View
//!
//! Read-only table of recent payments.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{DisplayConfig, Transaction};

use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{card_frame, page_heading, status_badge};
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_finances_view(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Finances", "Recent customer payments");
        ui.add_space(12.0);

        let transactions = match self.backend.finance_service.list_transactions() {
            Ok(transactions) => transactions,
            Err(e) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load transactions: {}", e));
                return;
            }
        };

        card_frame().show(ui, |ui| {
            ui.label(egui::RichText::new("Recent Transactions").size(16.0).strong());
            ui.add_space(8.0);
            if transactions.is_empty() {
                ui.label("No transactions yet.");
                return;
            }
            render_transaction_table(ui, &transactions, &self.backend.config);
        });
    }
}

fn render_transaction_table(ui: &mut egui::Ui, transactions: &[Transaction], config: &DisplayConfig) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(90.0))
        .column(Column::initial(120.0))
        .column(Column::initial(220.0))
        .column(Column::initial(130.0))
        .column(Column::initial(110.0))
        .column(Column::remainder())
        .header(32.0, |mut header| {
            for title in ["ID", "DATE", "CUSTOMER", "MODE", "AMOUNT", "STATUS"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).size(12.0).strong().color(CURRENT_THEME.typography.secondary));
                });
            }
        })
        .body(|mut body| {
            for transaction in transactions {
                body.row(40.0, |mut row| {
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&transaction.id).monospace());
                    });
                    row.col(|ui| {
                        ui.label(transaction.date.format("%d %b %Y").to_string());
                    });
                    row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&transaction.customer_name).strong());
                            ui.label(
                                egui::RichText::new(&transaction.customer_id)
                                    .size(11.0)
                                    .color(CURRENT_THEME.typography.secondary),
                            );
                        });
                    });
                    row.col(|ui| {
                        ui.label(transaction.mode.as_str());
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(config.format_currency(transaction.amount)).strong());
                    });
                    row.col(|ui| {
                        status_badge(ui, transaction.status.as_str(), CURRENT_THEME.payment_color(transaction.status));
                    });
                });
            }
        });
}
