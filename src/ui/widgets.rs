//! Общие виджеты UI

use crate::app::App;
use eframe::egui;
use sentinelx::nav::DesktopView;
use sentinelx::reports::{ReportStatus, Severity};
use sentinelx::sensors::RiskBand;

pub const RED: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);
pub const ORANGE: egui::Color32 = egui::Color32::from_rgb(235, 140, 40);
pub const YELLOW: egui::Color32 = egui::Color32::from_rgb(230, 200, 60);
pub const GREEN: egui::Color32 = egui::Color32::from_rgb(70, 180, 90);
pub const BLUE: egui::Color32 = egui::Color32::from_rgb(80, 150, 230);

pub fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Critical => RED,
        Severity::High => ORANGE,
        Severity::Medium => YELLOW,
        Severity::Low => GREEN,
    }
}

pub fn status_color(status: ReportStatus) -> egui::Color32 {
    match status {
        ReportStatus::Verified => GREEN,
        ReportStatus::Pending => YELLOW,
        ReportStatus::Investigating => BLUE,
        ReportStatus::False => RED,
    }
}

pub fn risk_color(band: RiskBand) -> egui::Color32 {
    match band {
        RiskBand::Normal => GREEN,
        RiskBand::Warning => YELLOW,
        RiskBand::Critical => RED,
    }
}

/// Цветная метка в рамке
pub fn badge(ui: &mut egui::Ui, text: impl Into<String>, color: egui::Color32) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.colored_label(color, egui::RichText::new(text.into()).small().strong());
        });
}

pub fn severity_badge(ui: &mut egui::Ui, severity: Severity) {
    badge(ui, severity.as_str().to_uppercase(), severity_color(severity));
}

/// Карточка со значением
pub fn stat_card(ui: &mut egui::Ui, icon: &str, label: &str, value: impl Into<String>, color: egui::Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(format!("{} {}", icon, label)).small());
            ui.label(egui::RichText::new(value.into()).size(22.0).strong().color(color));
        });
    });
}

/// Заголовок раздела с подзаголовком
pub fn section_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.heading(title);
    ui.colored_label(egui::Color32::GRAY, subtitle);
    ui.add_space(8.0);
}

impl App {
    /// Заглушка для разделов без содержимого
    pub fn render_coming_soon(&self, ui: &mut egui::Ui, view: DesktopView) {
        let t = self.t();

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(egui::RichText::new(view.icon()).size(48.0));
            ui.heading(view.placeholder_title());
            ui.add_space(6.0);
            badge(ui, t.coming_soon, ORANGE);
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::GRAY, t.coming_soon_hint);
        });
    }

    /// Кнопка обновления со спиннером
    ///
    /// Возвращает `true`, если нажата.
    pub fn refresh_button(&self, ui: &mut egui::Ui, refreshing: bool) -> bool {
        let t = self.t();

        if refreshing {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(t.refreshing);
            });
            false
        } else {
            ui.button(format!("🔄 {}", t.refresh)).clicked()
        }
    }
}
