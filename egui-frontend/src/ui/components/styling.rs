//! # Styling Functions
//!
//! Global egui style plus the small widgets every view shares: card frames,
//! status badges and page headings.

use eframe::egui;

use super::theme::CURRENT_THEME;

/// Configure the global egui style for the dashboard
pub fn setup_admin_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.page_background;
        style.visuals.window_fill = CURRENT_THEME.layout.card_background;
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.inactive_background;
        style.visuals.selection.bg_fill = CURRENT_THEME.interactive.accent_soft;
        style.visuals.selection.stroke = egui::Stroke::new(1.0, CURRENT_THEME.interactive.accent);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// White rounded card with a light border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
        .rounding(10.0)
        .inner_margin(egui::Margin::same(16.0))
}

/// Small pill with colored text on a tinted background
pub fn status_badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    let tint = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 28);
    egui::Frame::none()
        .fill(tint)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(color).strong());
        })
        .response
}

/// Page title with a muted subtitle underneath
pub fn page_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(
        egui::RichText::new(title)
            .size(22.0)
            .strong()
            .color(CURRENT_THEME.typography.heading),
    );
    ui.label(egui::RichText::new(subtitle).color(CURRENT_THEME.typography.secondary));
}

/// Filled accent button for the primary action of a view
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE).strong())
            .fill(CURRENT_THEME.interactive.accent),
    )
}

/// Round avatar with a single initial
pub fn avatar(ui: &mut egui::Ui, initial: char, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), size / 2.0, CURRENT_THEME.interactive.accent_soft);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial.to_string(),
        egui::FontId::proportional(size * 0.45),
        CURRENT_THEME.interactive.accent,
    );
}
