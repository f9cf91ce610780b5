//! # Entity Modal
//!
//! The single editor dialog shared by customers, plans and drivers.
//!
//! ## Responsibilities:
//! - Render the fields of the open entity kind, bound to the editor's form
//! - Offer the fixed option sets (zones, billing types, statuses, plans) as selects
//! - Show the last rejection inline and keep the dialog open
//!
//! Fields are plain strings here; parsing happens when the form is submitted.

use eframe::egui;
use log::warn;
use shared::{BillingType, Plan, SubscriptionStatus, Zone};

use backend::io::forms::{customer_form, driver_form, plan_form, EntityKind, FormData};

use crate::ui::actions::AppAction;
use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::primary_button;
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_entity_modal(&mut self, ctx: &egui::Context) {
        let plans = match self.editor.as_ref().map(|editor| editor.kind) {
            Some(EntityKind::Customer) => self.backend.plan_service.list_plans().unwrap_or_else(|e| {
                warn!("Plan options unavailable: {}", e);
                Vec::new()
            }),
            Some(_) => Vec::new(),
            None => return,
        };
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        let mut should_submit = false;
        let mut should_cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        egui::Window::new(editor.title())
            .id(egui::Id::new("entity_editor"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(420.0);
                egui::Grid::new("entity_editor_fields")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| match editor.kind {
                        EntityKind::Customer => customer_fields(ui, &mut editor.form, &plans),
                        EntityKind::Plan => plan_fields(ui, &mut editor.form),
                        EntityKind::Driver => driver_fields(ui, &mut editor.form),
                    });

                if let Some(error) = &editor.error {
                    ui.add_space(6.0);
                    ui.colored_label(CURRENT_THEME.status.negative, format!("❌ {}", error));
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if primary_button(ui, "Save").clicked() {
                        should_submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        should_cancel = true;
                    }
                });
            });

        if should_submit {
            self.queue(AppAction::SubmitEditor);
        } else if should_cancel {
            self.queue(AppAction::CloseEditor);
        }
    }
}

fn customer_fields(ui: &mut egui::Ui, form: &mut FormData, plans: &[Plan]) {
    text_row(ui, form, "Full Name", customer_form::NAME, "");
    text_row(ui, form, "Phone", customer_form::PHONE, "10-digit mobile");
    select_row(ui, form, "Area", customer_form::AREA, &Zone::ALL.map(|zone| zone.as_str()));
    text_row(ui, form, "Address", customer_form::ADDRESS, "");
    plan_select_row(ui, form, plans);
    select_row(
        ui,
        form,
        "Status",
        customer_form::STATUS,
        &SubscriptionStatus::ALL.map(|status| status.as_str()),
    );
    text_row(ui, form, "Due Amount", customer_form::DUE_AMOUNT, "0");
    text_row(ui, form, "Next Billing Date", customer_form::NEXT_BILLING_DATE, "YYYY-MM-DD");
    multiline_row(ui, form, "Notes", customer_form::NOTES);
}

fn plan_fields(ui: &mut egui::Ui, form: &mut FormData) {
    text_row(ui, form, "Plan Name", plan_form::NAME, "");
    select_row(
        ui,
        form,
        "Billing Type",
        plan_form::BILLING_TYPE,
        &BillingType::ALL.map(|billing| billing.as_str()),
    );
    text_row(ui, form, "Price", plan_form::PRICE, "0");
    text_row(ui, form, "Meals / Week", plan_form::MEALS_PER_WEEK, "0");
    multiline_row(ui, form, "Description", plan_form::DESCRIPTION);
}

fn driver_fields(ui: &mut egui::Ui, form: &mut FormData) {
    text_row(ui, form, "Full Name", driver_form::NAME, "");
    text_row(ui, form, "Phone", driver_form::PHONE, "10-digit mobile");
    text_row(ui, form, "Vehicle No", driver_form::VEHICLE_NO, "TS07 XX 0000");
    select_row(
        ui,
        form,
        "Assigned Area",
        driver_form::ASSIGNED_AREA,
        &Zone::ALL.map(|zone| zone.as_str()),
    );
}

fn text_row(ui: &mut egui::Ui, form: &mut FormData, label: &str, field: &str, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(form.field_mut(field))
            .hint_text(hint)
            .desired_width(260.0),
    );
    ui.end_row();
}

fn multiline_row(ui: &mut egui::Ui, form: &mut FormData, label: &str, field: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(form.field_mut(field))
            .desired_rows(3)
            .desired_width(260.0),
    );
    ui.end_row();
}

fn select_row(ui: &mut egui::Ui, form: &mut FormData, label: &str, field: &str, options: &[&str]) {
    ui.label(label);
    let current = form.get(field).unwrap_or_default().to_string();
    egui::ComboBox::from_id_source(("entity_editor_select", field))
        .selected_text(current.as_str())
        .width(260.0)
        .show_ui(ui, |ui| {
            for option in options {
                if ui.selectable_label(current == *option, *option).clicked() {
                    form.set(field, *option);
                }
            }
        });
    ui.end_row();
}

/// Plans are listed by name but the form stores the plan id
fn plan_select_row(ui: &mut egui::Ui, form: &mut FormData, plans: &[Plan]) {
    ui.label("Plan");
    let current = form.get(customer_form::PLAN_ID).unwrap_or_default().to_string();
    let selected_text = plans
        .iter()
        .find(|plan| plan.id == current)
        .map(|plan| plan.name.clone())
        .unwrap_or_else(|| "Select a plan".to_string());

    egui::ComboBox::from_id_source("entity_editor_plan")
        .selected_text(selected_text)
        .width(260.0)
        .show_ui(ui, |ui| {
            for plan in plans {
                if ui.selectable_label(plan.id == current, plan.name.as_str()).clicked() {
                    form.set(customer_form::PLAN_ID, plan.id.clone());
                }
            }
        });
    ui.end_row();
}
