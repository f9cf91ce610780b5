//! # App Coordinator Module
//!
//! The eframe update loop.
//!
//! ## Application Flow:
//! 1. Apply the global style
//! 2. Render sidebar, header and the active view; views only queue actions
//! 3. Render the editor dialog and the delete prompt on top
//! 4. Dispatch the queued actions so the next frame reads the new state

use eframe::egui;

use crate::ui::app_state::{AdminDashboardApp, MainView};
use crate::ui::components::{setup_admin_style, CURRENT_THEME};

impl eframe::App for AdminDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_admin_style(ctx);

        egui::SidePanel::left("navigation")
            .resizable(false)
            .exact_width(230.0)
            .frame(
                egui::Frame::none()
                    .fill(CURRENT_THEME.layout.sidebar_background)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(CURRENT_THEME.layout.card_background)
                    .inner_margin(egui::Margin::symmetric(20.0, 6.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CURRENT_THEME.layout.page_background)
                    .inner_margin(egui::Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                self.render_messages(ui);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_main_content(ui);
                    });
            });

        self.render_entity_modal(ctx);
        self.render_confirm_dialog(ctx);

        self.process_actions();
    }
}

impl AdminDashboardApp {
    fn render_main_content(&mut self, ui: &mut egui::Ui) {
        match self.current_view {
            MainView::Overview => self.render_dashboard_view(ui),
            MainView::Customers => self.render_customers_view(ui),
            MainView::Plans => self.render_plans_view(ui),
            MainView::Orders => self.render_orders_view(ui),
            MainView::Drivers => self.render_drivers_view(ui),
            MainView::Finances => self.render_finances_view(ui),
            MainView::Settings => self.render_settings_view(ui),
        }
    }
}
