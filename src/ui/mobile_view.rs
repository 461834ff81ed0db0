//! Компактная раскладка: главная, оповещения, форма сообщения, настройки

use super::widgets::{badge, severity_badge, severity_color, status_color, GREEN, RED};
use crate::app::App;
use eframe::egui;
use sentinelx::events::RefreshTarget;
use sentinelx::fixtures::{total_affected, urgent_alert_count};
use sentinelx::i18n::Language;
use sentinelx::reports::{filter_by_category, Filter, ReportCategory, Severity};
use sentinelx::utils::{current_timestamp, format_thousands, format_time_ago};

impl App {
    pub fn render_mobile_home(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();
        let alerts = &self.data.alerts;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🛡").size(24.0));
                ui.vertical(|ui| {
                    ui.strong(t.app_title);
                    ui.small(t.app_subtitle);
                });
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                badge(ui, format!("{} critical", urgent_alert_count(alerts)), RED);
                ui.small(format!("{} people affected", format_thousands(total_affected(alerts))));
            });
        });

        ui.add_space(6.0);
        self.render_offline_indicator(ui);
        ui.add_space(6.0);

        // История сообщений с фильтром по категории
        ui.strong(t.reports_title);
        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(&mut self.history_category_filter, Filter::All, t.all);
            for category in ReportCategory::all() {
                ui.selectable_value(
                    &mut self.history_category_filter,
                    Filter::Only(*category),
                    category.icon(),
                )
                .on_hover_text(category.label());
            }
        });

        let reports = filter_by_category(&self.data.reports, self.history_category_filter, Filter::All);
        if reports.is_empty() {
            ui.colored_label(egui::Color32::GRAY, t.no_reports);
        }
        for report in reports {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(report.category.icon());
                    ui.strong(&report.title);
                });
                ui.horizontal(|ui| {
                    badge(ui, report.status.as_str(), status_color(report.status));
                    ui.small(format!("{} • {}", report.barangay, format_time_ago(report.timestamp, now)));
                });
            });
        }
    }

    pub fn render_mobile_alerts(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();

        ui.horizontal(|ui| {
            ui.heading(t.nav_alerts);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.refresh_button(ui, self.is_refreshing(RefreshTarget::Alerts)) {
                    self.refresh(RefreshTarget::Alerts);
                }
            });
        });
        ui.colored_label(
            egui::Color32::GRAY,
            format!("{}: {}", t.last_updated, format_time_ago(self.alerts_updated_at, now)),
        );
        ui.add_space(6.0);

        for alert in &self.data.alerts {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(alert.kind.icon()).size(20.0));
                    ui.vertical(|ui| {
                        ui.strong(alert.title);
                        ui.small(alert.region);
                    });
                });
                ui.horizontal(|ui| {
                    severity_badge(ui, alert.severity);
                    ui.small(format!("Risk {}% {}", alert.risk_score, alert.trend.arrow()));
                });
                ui.small(alert.description);
            });
        }
    }

    pub fn render_mobile_report(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let submitting = self.submit_task.is_running();

        ui.heading(t.nav_report);
        if !self.is_online() {
            ui.colored_label(egui::Color32::GRAY, t.sync_when_restored);
        }
        ui.add_space(6.0);

        ui.add_enabled_ui(!submitting, |ui| {
            ui.label(t.report_category_label);
            ui.horizontal_wrapped(|ui| {
                for category in ReportCategory::all() {
                    ui.selectable_value(
                        &mut self.draft.category,
                        Some(*category),
                        format!("{} {}", category.icon(), category.label()),
                    );
                }
            });

            ui.add_space(4.0);
            ui.label(t.report_title_label);
            ui.text_edit_singleline(&mut self.draft.title);

            ui.label(t.report_description_label);
            ui.text_edit_multiline(&mut self.draft.description);

            ui.label(t.report_location_label);
            ui.text_edit_singleline(&mut self.draft.location);

            ui.add_space(4.0);
            ui.label(t.severity_filter);
            ui.horizontal(|ui| {
                for severity in Severity::all() {
                    let text = egui::RichText::new(severity.as_str()).color(severity_color(*severity));
                    ui.selectable_value(&mut self.draft.severity, Some(*severity), text);
                }
            });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if submitting {
                ui.spinner();
                ui.label(t.submitting);
                if ui.small_button(t.cancel).clicked() {
                    self.submit_task.cancel();
                }
            } else {
                let enabled = self.draft.can_submit();
                if ui
                    .add_enabled(enabled, egui::Button::new(format!("📤 {}", t.submit_report)))
                    .clicked()
                {
                    self.submit_report();
                }
            }
        });
    }

    pub fn render_mobile_settings(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let mut prefs = self.prefs().clone();

        ui.heading(t.settings_title);
        ui.add_space(6.0);

        let mut changed = false;
        changed |= ui.checkbox(&mut prefs.notifications_enabled, t.push_notifications).changed();
        changed |= ui.checkbox(&mut prefs.sound_enabled, t.sound_alerts).changed();
        changed |= ui.checkbox(&mut prefs.dark_mode, t.dark_mode).changed();
        changed |= ui
            .checkbox(&mut prefs.auto_sync_on_reconnect, t.auto_sync)
            .on_hover_text(t.auto_sync_tooltip)
            .changed();

        if changed {
            self.update_settings(|s| *s = prefs);
        }

        ui.add_space(6.0);
        ui.label(t.language);
        ui.horizontal(|ui| {
            for lang in Language::all() {
                if ui
                    .selectable_label(self.language == *lang, format!("{} {}", lang.flag(), lang.native_name()))
                    .clicked()
                {
                    self.set_language(*lang);
                }
            }
        });

        ui.add_space(6.0);
        ui.separator();
        let mut forced = self.connectivity.is_forced_offline();
        if ui.checkbox(&mut forced, t.simulate_offline).changed() {
            self.set_forced_offline(forced);
        }

        if let Some(phone) = &self.subscribed_phone {
            ui.add_space(6.0);
            ui.colored_label(GREEN, format!("🔔 {}: {}", t.subscribed, phone));
        }
    }
}
