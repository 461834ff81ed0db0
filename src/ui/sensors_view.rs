//! Лента датчиков

use super::widgets::{badge, risk_color, section_header, stat_card, BLUE, GREEN, ORANGE, RED, YELLOW};
use crate::app::{App, SensorTab};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use sentinelx::events::RefreshTarget;
use sentinelx::reports::Filter;
use sentinelx::sensors::{filter_readings, BarangayConnectivity, SensorStatus, SensorSummary, SensorType};
use sentinelx::utils::{current_timestamp, format_time_ago};

const SENSOR_TYPES: [SensorType; 5] = [
    SensorType::Rainfall,
    SensorType::WaterLevel,
    SensorType::SoilMoisture,
    SensorType::Humidity,
    SensorType::Temperature,
];

impl App {
    pub fn render_sensor_feed(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();

        ui.horizontal(|ui| {
            section_header(ui, t.sensors_title, t.sensors_subtitle);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.refresh_button(ui, self.is_refreshing(RefreshTarget::Sensors)) {
                    self.refresh(RefreshTarget::Sensors);
                }
                badge(ui, format!("● {}", t.live_data), GREEN);
                ui.colored_label(
                    egui::Color32::GRAY,
                    format!("{}: {}", t.last_updated, format_time_ago(self.sensors_updated_at, now)),
                );
            });
        });

        let summary = SensorSummary::from_barangays(&self.data.barangays);
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "📡", t.sensors_count, summary.total.to_string(), BLUE);
            stat_card(ui, "✅", t.online, summary.online.to_string(), GREEN);
            stat_card(ui, "⚠", "Warnings", summary.warning.to_string(), YELLOW);
            stat_card(ui, "🔥", "Critical", summary.critical_readings.to_string(), RED);
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.sensor_tab, SensorTab::LiveFeed, t.tab_live_feed);
            ui.selectable_value(&mut self.sensor_tab, SensorTab::Status, t.tab_sensor_status);
            ui.selectable_value(&mut self.sensor_tab, SensorTab::Connectivity, t.tab_connectivity);
        });
        ui.separator();

        match self.sensor_tab {
            SensorTab::LiveFeed => self.render_live_feed(ui, now),
            SensorTab::Status => self.render_sensor_status(ui),
            SensorTab::Connectivity => self.render_barangay_connectivity(ui, now),
        }
    }

    fn render_sensor_filters(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let barangay_names: Vec<String> = self
            .data
            .barangays
            .iter()
            .filter_map(|b| b.sensors.first().map(|s| s.barangay.clone()))
            .collect();

        ui.horizontal(|ui| {
            let selected = match &self.sensor_barangay_filter {
                Filter::All => t.all.to_string(),
                Filter::Only(name) => name.clone(),
            };
            egui::ComboBox::from_id_salt("barangay_filter")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.sensor_barangay_filter, Filter::All, t.all);
                    for name in barangay_names {
                        ui.selectable_value(&mut self.sensor_barangay_filter, Filter::Only(name.clone()), name);
                    }
                });

            let selected = match self.sensor_type_filter {
                Filter::All => t.all,
                Filter::Only(kind) => kind.label(),
            };
            egui::ComboBox::from_id_salt("sensor_type_filter")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.sensor_type_filter, Filter::All, t.all);
                    for kind in SENSOR_TYPES {
                        ui.selectable_value(&mut self.sensor_type_filter, Filter::Only(kind), kind.label());
                    }
                });
        });
    }

    fn render_live_feed(&mut self, ui: &mut egui::Ui, now: u64) {
        self.render_sensor_filters(ui);
        ui.add_space(6.0);

        let barangay = match &self.sensor_barangay_filter {
            Filter::All => Filter::All,
            Filter::Only(name) => Filter::Only(name.as_str()),
        };
        let readings = filter_readings(&self.data.barangays, barangay, self.sensor_type_filter);

        egui::ScrollArea::vertical().id_salt("live_feed").show(ui, |ui| {
            for reading in readings {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(reading.sensor_type.icon());
                        ui.vertical(|ui| {
                            ui.strong(reading.sensor_type.label());
                            ui.small(format!("{} • {}", reading.location, reading.barangay));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let band = reading.risk();
                            badge(ui, band.as_str().to_uppercase(), risk_color(band));
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} {} {}",
                                    reading.value,
                                    reading.unit,
                                    reading.trend.arrow()
                                ))
                                .strong()
                                .color(risk_color(band)),
                            );
                        });
                    });
                    ui.add(
                        egui::ProgressBar::new(reading.fill_ratio())
                            .fill(risk_color(reading.risk()))
                            .text(format!(
                                "warning {} / critical {}",
                                reading.threshold.warning, reading.threshold.critical
                            )),
                    );
                    ui.small(format_time_ago(reading.timestamp, now));
                });
            }
        });
    }

    fn render_sensor_status(&self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(70.0))
            .header(20.0, |mut header| {
                for title in ["ID", "Type", "Location", "Status"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for sensor in self.data.barangays.iter().flat_map(|b| b.sensors.iter()) {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.monospace(&sensor.id);
                        });
                        row.col(|ui| {
                            ui.label(sensor.sensor_type.label());
                        });
                        row.col(|ui| {
                            ui.label(format!("{} • {}", sensor.location, sensor.barangay));
                        });
                        row.col(|ui| {
                            let (text, color) = match sensor.status {
                                SensorStatus::Online => ("online", GREEN),
                                SensorStatus::Warning => ("warning", YELLOW),
                                SensorStatus::Offline => ("offline", RED),
                            };
                            ui.colored_label(color, text);
                        });
                    });
                }
            });
    }

    fn render_barangay_connectivity(&self, ui: &mut egui::Ui, now: u64) {
        let t = self.t();

        for barangay in &self.data.barangays {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (text, color) = match barangay.connectivity {
                        BarangayConnectivity::Online => ("online", GREEN),
                        BarangayConnectivity::Partial => ("partial", ORANGE),
                        BarangayConnectivity::Offline => ("offline", RED),
                    };
                    ui.colored_label(color, "●");
                    ui.strong(&barangay.name);
                    badge(ui, text.to_uppercase(), color);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format_time_ago(barangay.last_update, now));
                        ui.small(format!("{} {}", barangay.sensors.len(), t.sensors_count));
                    });
                });
            });
        }
    }
}
