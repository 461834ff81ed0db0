//! Сообщения жителей (десктоп)

use super::widgets::{badge, section_header, severity_badge, stat_card, status_color, BLUE, GREEN, YELLOW};
use crate::app::App;
use eframe::egui;
use sentinelx::reports::{filter_reports, CommunityReport, Filter, ReportStats, ReportStatus, Severity};
use sentinelx::utils::{current_timestamp, format_time_ago};

impl App {
    pub fn render_community_reports(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();

        section_header(ui, t.reports_title, t.reports_subtitle);

        let stats = ReportStats::from_reports(&self.data.reports);
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "📋", t.total_reports, stats.total.to_string(), BLUE);
            stat_card(ui, "✅", t.verified, stats.verified.to_string(), GREEN);
            stat_card(ui, "⏳", t.pending_review, stats.pending.to_string(), YELLOW);
            stat_card(ui, "👥", t.unique_reporters, stats.unique_reporters.to_string(), BLUE);
        });

        ui.add_space(8.0);
        self.render_report_filters(ui);
        ui.separator();

        let reports = filter_reports(&self.data.reports, self.report_status_filter, self.report_severity_filter);

        egui::ScrollArea::vertical().id_salt("reports_scroll").show(ui, |ui| {
            if reports.is_empty() {
                ui.colored_label(egui::Color32::GRAY, t.no_reports);
                return;
            }
            for report in reports {
                self.render_report_card(ui, report, now);
                ui.add_space(4.0);
            }
        });
    }

    fn render_report_filters(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        ui.horizontal(|ui| {
            ui.label(t.status_filter);
            let selected = match self.report_status_filter {
                Filter::All => t.all,
                Filter::Only(status) => status.as_str(),
            };
            egui::ComboBox::from_id_salt("report_status_filter")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.report_status_filter, Filter::All, t.all);
                    for status in ReportStatus::all() {
                        ui.selectable_value(&mut self.report_status_filter, Filter::Only(*status), status.as_str());
                    }
                });

            ui.add_space(12.0);
            ui.label(t.severity_filter);
            let selected = match self.report_severity_filter {
                Filter::All => t.all,
                Filter::Only(severity) => severity.as_str(),
            };
            egui::ComboBox::from_id_salt("report_severity_filter")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.report_severity_filter, Filter::All, t.all);
                    for severity in Severity::all() {
                        ui.selectable_value(
                            &mut self.report_severity_filter,
                            Filter::Only(*severity),
                            severity.as_str(),
                        );
                    }
                });
        });
    }

    fn render_report_card(&self, ui: &mut egui::Ui, report: &CommunityReport, now: u64) {
        let t = self.t();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(report.category.icon());
                ui.strong(&report.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(ui, report.status.as_str().to_uppercase(), status_color(report.status));
                    severity_badge(ui, report.severity);
                });
            });

            ui.label(&report.description);
            ui.small(format!(
                "📍 {} • {} • {} • {}",
                report.location,
                report.barangay,
                report.reporter.name,
                format_time_ago(report.timestamp, now)
            ));

            if let Some(analysis) = &report.ai_analysis {
                ui.add_space(4.0);
                egui::Frame::none()
                    .fill(ui.visuals().faint_bg_color)
                    .inner_margin(6.0)
                    .rounding(4.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.strong(format!("🧠 {}", t.ai_analysis));
                            ui.small(format!(
                                "{} {}% • risk {}",
                                t.confidence, analysis.confidence, analysis.risk_score
                            ));
                        });
                        ui.label(&analysis.recommendation);
                    });
            }

            ui.horizontal(|ui| {
                ui.small(format!("👍 {} {}", report.votes.helpful, t.helpful));
                ui.small(format!("👎 {} {}", report.votes.not_helpful, t.not_helpful));
            });
        });
    }
}
