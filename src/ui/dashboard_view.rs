//! Главная панель (десктоп)

use super::widgets::{badge, section_header, severity_badge, severity_color, stat_card, BLUE, GREEN, ORANGE, RED, YELLOW};
use crate::app::App;
use eframe::egui;
use sentinelx::events::RefreshTarget;
use sentinelx::fixtures::{total_affected, urgent_alert_count};
use sentinelx::sensors::{station_health, StationStatus};
use sentinelx::utils::{current_timestamp, format_thousands, format_time_ago};

impl App {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();

        ui.horizontal(|ui| {
            section_header(ui, t.nav_dashboard, t.app_subtitle);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.refresh_button(ui, self.is_refreshing(RefreshTarget::Alerts)) {
                    self.refresh(RefreshTarget::Alerts);
                }
                ui.colored_label(
                    egui::Color32::GRAY,
                    format!("{}: {}", t.last_updated, format_time_ago(self.alerts_updated_at, now)),
                );
            });
        });

        let stats = &self.data.system_stats;
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "⚠", t.active_threats, stats.active_threats.to_string(), RED);
            stat_card(ui, "🏠", t.evacuation_zones, stats.evacuation_zones.to_string(), ORANGE);
            stat_card(ui, "👥", t.response_teams, stats.response_teams.to_string(), BLUE);
            stat_card(ui, "🖥", t.system_load, format!("{}%", stats.system_load), YELLOW);
        });

        ui.add_space(10.0);

        ui.columns(2, |cols| {
            self.render_active_alerts(&mut cols[0]);
            self.render_threat_assessment(&mut cols[1], now);
        });

        ui.add_space(10.0);

        ui.columns(2, |cols| {
            self.render_weather_stations(&mut cols[0], now);
            self.render_timeline(&mut cols[1]);
        });
    }

    fn render_active_alerts(&self, ui: &mut egui::Ui) {
        let alerts = &self.data.alerts;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong("🔔 Active Alerts");
                badge(ui, format!("{} critical", urgent_alert_count(alerts)), RED);
            });
            ui.colored_label(
                egui::Color32::GRAY,
                format!("{} people affected", format_thousands(total_affected(alerts))),
            );
            ui.separator();

            for alert in alerts {
                ui.horizontal(|ui| {
                    ui.label(alert.kind.icon());
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong(alert.title);
                            severity_badge(ui, alert.severity);
                        });
                        ui.small(format!("{} • {}", alert.region, alert.description));
                        ui.add(
                            egui::ProgressBar::new(alert.risk_score as f32 / 100.0)
                                .desired_width(180.0)
                                .fill(severity_color(alert.severity))
                                .text(format!("Risk {}% {}", alert.risk_score, alert.trend.arrow())),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_threat_assessment(&self, ui: &mut egui::Ui, now: u64) {
        let t = self.t();
        let assessment = &self.data.threat_assessment;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(format!("🧠 {}", t.threat_assessment));
            ui.separator();

            egui::Grid::new("threat_grid").num_columns(3).striped(true).show(ui, |ui| {
                for (name, threat) in assessment.entries() {
                    ui.label(name);
                    severity_badge(ui, threat.level);
                    ui.label(format!("{} {}%", t.confidence, threat.confidence));
                    ui.end_row();
                }
            });

            ui.add_space(4.0);
            ui.colored_label(
                egui::Color32::GRAY,
                format!("{}: {}", t.last_updated, format_time_ago(assessment.last_updated, now)),
            );
        });
    }

    fn render_weather_stations(&self, ui: &mut egui::Ui, now: u64) {
        let t = self.t();
        let stations = &self.data.weather_stations;
        let stats = &self.data.system_stats;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(format!("🌦 {}", t.weather_stations));
                badge(ui, format!("{}% healthy", station_health(stations)), GREEN);
            });
            ui.separator();

            for station in stations {
                ui.horizontal(|ui| {
                    let color = match station.status {
                        StationStatus::Online => GREEN,
                        StationStatus::Maintenance => YELLOW,
                        StationStatus::Offline => RED,
                    };
                    ui.colored_label(color, "●");
                    ui.strong(&station.id);
                    ui.label(&station.location);

                    if station.status == StationStatus::Online {
                        let r = &station.readings;
                        ui.small(format!(
                            "{:.1}°C • {:.0}% • {:.1} mm • {:.0} km/h",
                            r.temperature, r.humidity, r.rainfall, r.wind_speed
                        ));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format_time_ago(station.last_update, now));
                        ui.small(format!("🔋{}% 📶{}%", station.battery_level, station.signal_strength));
                    });
                });
            }

            ui.separator();
            ui.strong(t.system_status);
            ui.small(format!(
                "Communication: {} • Satellite coverage: {}% • Data latency: {:.1}s",
                stats.communication_status, stats.satellite_coverage, stats.data_latency_secs
            ));
        });
    }

    fn render_timeline(&self, ui: &mut egui::Ui) {
        let t = self.t();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(format!("🕒 {}", t.timeline));
            ui.separator();

            for entry in &self.data.timeline {
                ui.horizontal(|ui| {
                    ui.colored_label(severity_color(entry.severity), "●");
                    ui.monospace(entry.time);
                    ui.label(entry.event);
                });
            }
        });
    }
}
