//! # Drivers View
//!
//! Three tabs over the driver collection:
//! - Drivers List: cards with this month's attendance
//! - Daily Attendance: roster of active drivers for a selected date
//! - Salary & Payouts: read-only payout rows

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{AttendanceRow, AttendanceStatus, DriverCard, DriverSalary, SalaryStatus};

use backend::io::forms::EntityKind;

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{avatar, card_frame, page_heading, primary_button, status_badge};
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::DriversTab;

const CARDS_PER_ROW: usize = 3;

impl AdminDashboardApp {
    pub fn render_drivers_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| page_heading(ui, "Drivers & Salary", "Delivery team, attendance and payouts"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, "+ Add Driver").clicked() {
                    self.queue(AppAction::OpenEditor {
                        kind: EntityKind::Driver,
                        editing_id: None,
                    });
                }
            });
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            for tab in DriversTab::ALL {
                ui.selectable_value(&mut self.drivers.tab, tab, tab.label());
            }
        });
        ui.separator();
        ui.add_space(8.0);

        match self.drivers.tab {
            DriversTab::List => self.render_driver_list(ui),
            DriversTab::Attendance => self.render_attendance_roster(ui),
            DriversTab::Salaries => self.render_salaries(ui),
        }
    }

    fn render_driver_list(&mut self, ui: &mut egui::Ui) {
        let cards = match self.backend.driver_service.driver_cards() {
            Ok(cards) => cards,
            Err(e) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load drivers: {}", e));
                return;
            }
        };
        if cards.is_empty() {
            ui.label("No drivers yet.");
            return;
        }

        let mut actions = Vec::new();
        for chunk in cards.chunks(CARDS_PER_ROW) {
            ui.columns(CARDS_PER_ROW, |columns| {
                for (column, card) in columns.iter_mut().zip(chunk) {
                    render_driver_card(column, card, &mut actions);
                }
            });
            ui.add_space(12.0);
        }
        self.pending_actions.extend(actions);
    }

    fn render_attendance_roster(&mut self, ui: &mut egui::Ui) {
        let selected = self.drivers.attendance_date;

        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous day").clicked() {
                self.queue(AppAction::ShiftAttendanceDate(-1));
            }
            let mut picked = selected;
            ui.add(DatePickerButton::new(&mut picked).id_source("attendance_date"));
            if picked != selected {
                self.queue(AppAction::SetAttendanceDate(picked));
            }
            if ui.button("▶").on_hover_text("Next day").clicked() {
                self.queue(AppAction::ShiftAttendanceDate(1));
            }
            let today = self.backend.today();
            if selected != today && ui.button("Today").clicked() {
                self.queue(AppAction::SetAttendanceDate(today));
            }
        });
        ui.add_space(8.0);

        let roster = match self.backend.attendance_service.attendance_roster(selected) {
            Ok(roster) => roster,
            Err(e) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load attendance: {}", e));
                return;
            }
        };

        let mut actions = Vec::new();
        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            if roster.is_empty() {
                ui.label("No active drivers found.");
                return;
            }
            for row in &roster {
                render_attendance_row(ui, row, &mut actions);
                ui.separator();
            }
        });
        self.pending_actions.extend(actions);
    }

    fn render_salaries(&mut self, ui: &mut egui::Ui) {
        let salaries = match self.backend.finance_service.list_salaries() {
            Ok(salaries) => salaries,
            Err(e) => {
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load salaries: {}", e));
                return;
            }
        };

        ui.label(
            egui::RichText::new(format!("Payouts for {}", self.backend.finance_service.salary_period_label()))
                .size(16.0)
                .strong(),
        );
        ui.add_space(8.0);

        for salary in &salaries {
            self.render_salary_row(ui, salary);
            ui.add_space(8.0);
        }
    }

    fn render_salary_row(&self, ui: &mut egui::Ui, salary: &DriverSalary) {
        let config = &self.backend.config;
        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&salary.driver_name).strong());
                    ui.label(
                        egui::RichText::new(format!(
                            "{} days worked · {} deliveries",
                            salary.days_worked, salary.total_deliveries
                        ))
                        .size(12.0)
                        .color(CURRENT_THEME.typography.secondary),
                    );
                });
                ui.add_space(24.0);
                ui.label(format!("Base {}", config.format_currency(salary.base_salary)));
                ui.colored_label(
                    CURRENT_THEME.status.positive,
                    format!("+{}", config.format_currency(salary.incentives)),
                );
                ui.colored_label(
                    CURRENT_THEME.status.negative,
                    format!("-{}", config.format_currency(salary.deductions)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match salary.status {
                        SalaryStatus::Paid => {
                            let paid_on = salary
                                .payout_date
                                .map(|date| date.format("%d %b %Y").to_string())
                                .unwrap_or_default();
                            ui.label(egui::RichText::new(paid_on).size(12.0).color(CURRENT_THEME.typography.secondary));
                        }
                        SalaryStatus::Pending => {
                            // Payout is tracked outside this console; the button only acknowledges
                            if ui.button("Mark Paid").clicked() {
                                log::info!("Mark Paid clicked for {} (read-only)", salary.driver_id);
                            }
                        }
                    }
                    status_badge(ui, salary.status.as_str(), CURRENT_THEME.salary_color(salary.status));
                    ui.label(
                        egui::RichText::new(config.format_currency(salary.net_payable))
                            .size(18.0)
                            .strong(),
                    );
                });
            });
        });
    }
}

fn render_driver_card(ui: &mut egui::Ui, card: &DriverCard, actions: &mut Vec<AppAction>) {
    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            avatar(ui, card.initial, 40.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&card.name).size(16.0).strong());
                ui.label(egui::RichText::new(&card.vehicle_no).size(12.0).color(CURRENT_THEME.typography.secondary));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if card.is_active {
                    status_badge(ui, "Active", CURRENT_THEME.status.positive);
                } else {
                    status_badge(ui, "Inactive", CURRENT_THEME.status.neutral);
                }
            });
        });
        ui.add_space(6.0);
        ui.label(format!("📞 {}", card.phone));
        ui.label(format!("📍 Route: {}", card.assigned_area));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Attendance").size(12.0).color(CURRENT_THEME.typography.secondary));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(&card.attendance_label).size(12.0).strong());
            });
        });
        ui.add(
            egui::ProgressBar::new(card.attendance_fraction)
                .desired_width(ui.available_width())
                .fill(CURRENT_THEME.status.positive),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("✏ Edit").clicked() {
                actions.push(AppAction::OpenEditor {
                    kind: EntityKind::Driver,
                    editing_id: Some(card.id.clone()),
                });
            }
            if ui.button("🗑 Delete").clicked() {
                actions.push(AppAction::RequestDelete {
                    kind: EntityKind::Driver,
                    id: card.id.clone(),
                });
            }
        });
    });
}

fn render_attendance_row(ui: &mut egui::Ui, row: &AttendanceRow, actions: &mut Vec<AppAction>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&row.name).strong());
            ui.label(
                egui::RichText::new(format!("{} · {}", row.phone, row.assigned_area))
                    .size(12.0)
                    .color(CURRENT_THEME.typography.secondary),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for status in [AttendanceStatus::Absent, AttendanceStatus::Present] {
                let marked = row.status == Some(status);
                let button = if marked {
                    egui::Button::new(egui::RichText::new(status.as_str()).color(egui::Color32::WHITE))
                        .fill(CURRENT_THEME.attendance_color(status))
                } else {
                    egui::Button::new(status.as_str())
                };
                if ui.add(button).clicked() && !marked {
                    actions.push(AppAction::RecordAttendance {
                        driver_id: row.driver_id.clone(),
                        status,
                    });
                }
            }
            if row.status.is_none() {
                ui.label(egui::RichText::new("Not marked").size(12.0).color(CURRENT_THEME.status.neutral));
            }
        });
    });
}
