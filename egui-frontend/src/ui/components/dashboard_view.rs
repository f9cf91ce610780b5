//! # Dashboard View
//!
//! Stat cards, the monthly revenue line and the plan share breakdown.
//! Fixture-backed cards carry a small "sample" marker so they are not
//! mistaken for live figures.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use log::warn;
use shared::{FigureSource, PlanShare, RevenuePoint, StatFigure};

use crate::ui::app_state::AdminDashboardApp;
use crate::ui::components::styling::{card_frame, page_heading};
use crate::ui::components::theme::CURRENT_THEME;

impl AdminDashboardApp {
    pub fn render_dashboard_view(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Dashboard Overview", "Today's operations at a glance");
        ui.add_space(12.0);

        match self.backend.dashboard_service.summary() {
            Ok(summary) => {
                ui.columns(summary.cards.len().max(1), |columns| {
                    for (column, card) in columns.iter_mut().zip(summary.cards.iter()) {
                        render_stat_card(column, card);
                    }
                });
            }
            Err(e) => {
                warn!("Failed to build dashboard summary: {}", e);
                ui.colored_label(CURRENT_THEME.status.negative, format!("Could not load summary: {}", e));
            }
        }

        ui.add_space(16.0);

        let revenue = self.backend.dashboard_service.revenue_series();
        let distribution = self.backend.dashboard_service.plan_distribution();
        ui.columns(2, |columns| {
            card_frame().show(&mut columns[0], |ui| render_revenue_chart(ui, &revenue));
            card_frame().show(&mut columns[1], |ui| render_plan_distribution(ui, &distribution));
        });
    }
}

fn render_stat_card(ui: &mut egui::Ui, card: &StatFigure) {
    card_frame().show(ui, |ui| {
        ui.set_min_height(96.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&card.title).color(CURRENT_THEME.typography.secondary));
            if card.source == FigureSource::Fixture {
                ui.label(egui::RichText::new("sample").size(10.0).italics().color(CURRENT_THEME.status.neutral))
                    .on_hover_text("Static figure, not computed from current data");
            }
        });
        ui.label(
            egui::RichText::new(&card.value)
                .size(26.0)
                .strong()
                .color(CURRENT_THEME.typography.heading),
        );
        let subtext_color = if card.alert {
            CURRENT_THEME.status.negative
        } else {
            CURRENT_THEME.typography.secondary
        };
        ui.label(egui::RichText::new(&card.subtext).size(12.0).color(subtext_color));
    });
}

fn render_revenue_chart(ui: &mut egui::Ui, series: &[RevenuePoint]) {
    ui.label(egui::RichText::new("Revenue Trend").strong().color(CURRENT_THEME.typography.heading));
    ui.add_space(8.0);

    let points: Vec<[f64; 2]> = series
        .iter()
        .enumerate()
        .map(|(index, point)| [index as f64, point.revenue as f64])
        .collect();
    let months: Vec<String> = series.iter().map(|point| point.month.clone()).collect();

    let line = Line::new(PlotPoints::from(points))
        .color(CURRENT_THEME.interactive.accent)
        .width(2.5)
        .fill(0.0);

    Plot::new("revenue_trend")
        .height(240.0)
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            months.get(index as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("₹{:.0}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn render_plan_distribution(ui: &mut egui::Ui, shares: &[PlanShare]) {
    ui.label(egui::RichText::new("Plan Distribution").strong().color(CURRENT_THEME.typography.heading));
    ui.add_space(8.0);

    let total: u32 = shares.iter().map(|share| share.value).sum();
    for share in shares {
        let fraction = if total == 0 {
            0.0
        } else {
            share.value as f32 / total as f32
        };
        ui.label(egui::RichText::new(&share.name).color(CURRENT_THEME.typography.primary));
        ui.add(
            egui::ProgressBar::new(fraction)
                .desired_width(ui.available_width())
                .text(format!("{:.0}%", fraction * 100.0))
                .fill(CURRENT_THEME.interactive.accent),
        );
        ui.add_space(6.0);
    }
}
