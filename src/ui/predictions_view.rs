//! Центр прогнозов ИИ

use super::widgets::{badge, section_header, severity_badge, severity_color, stat_card, BLUE, GREEN, ORANGE, RED, YELLOW};
use crate::app::{App, PredictionTab};
use eframe::egui;
use sentinelx::events::RefreshTarget;
use sentinelx::predictions::{latest_update, ModelStatus, PredictionAnalytics};
use sentinelx::utils::{current_timestamp, format_thousands, format_time_ago};

impl App {
    pub fn render_predictions(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();

        ui.horizontal(|ui| {
            section_header(ui, t.predictions_title, t.predictions_subtitle);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.refresh_button(ui, self.is_refreshing(RefreshTarget::Predictions)) {
                    self.refresh(RefreshTarget::Predictions);
                }
                ui.colored_label(
                    egui::Color32::GRAY,
                    format!("{}: {}", t.last_updated, format_time_ago(self.predictions_updated_at, now)),
                );
            });
        });

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.prediction_tab, PredictionTab::Active, t.tab_active_predictions);
            ui.selectable_value(&mut self.prediction_tab, PredictionTab::Models, t.tab_ai_models);
            ui.selectable_value(&mut self.prediction_tab, PredictionTab::Analytics, t.tab_analytics);
        });
        ui.separator();

        match self.prediction_tab {
            PredictionTab::Active => self.render_active_predictions(ui, now),
            PredictionTab::Models => self.render_models(ui, now),
            PredictionTab::Analytics => self.render_prediction_analytics(ui, now),
        }
    }

    fn render_active_predictions(&self, ui: &mut egui::Ui, now: u64) {
        let t = self.t();

        egui::ScrollArea::vertical().id_salt("predictions_scroll").show(ui, |ui| {
            for prediction in &self.data.predictions {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(prediction.hazard.icon()).size(20.0));
                        ui.vertical(|ui| {
                            ui.strong(format!("{} Risk", prediction.hazard.label()));
                            ui.small(format!("{} • {}", prediction.location, prediction.barangay));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            severity_badge(ui, prediction.risk_level);
                            ui.label(prediction.trend.arrow());
                        });
                    });

                    ui.add(
                        egui::ProgressBar::new(prediction.probability as f32 / 100.0)
                            .fill(severity_color(prediction.risk_level))
                            .text(format!("{} {}%", t.probability, prediction.probability)),
                    );

                    ui.horizontal(|ui| {
                        ui.small(format!("{}: {}%", t.confidence, prediction.confidence));
                        ui.small(format!("• {}: {}", t.timeframe, prediction.timeframe));
                        ui.small(format!("• {}", format_time_ago(prediction.last_update, now)));
                    });

                    ui.horizontal_wrapped(|ui| {
                        ui.small(format!("{}:", t.risk_factors));
                        for factor in &prediction.factors {
                            badge(ui, factor, BLUE);
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_models(&self, ui: &mut egui::Ui, now: u64) {
        let t = self.t();

        for model in &self.data.models {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(&model.name);
                    let (text, color) = match model.status {
                        ModelStatus::Active => ("ACTIVE", GREEN),
                        ModelStatus::Training => ("TRAINING", YELLOW),
                        ModelStatus::Offline => ("OFFLINE", RED),
                    };
                    badge(ui, text, color);
                });
                ui.add(
                    egui::ProgressBar::new(model.accuracy / 100.0).text(format!("{} {:.1}%", t.accuracy, model.accuracy)),
                );
                ui.small(format!(
                    "{}: {} • trained {}",
                    t.model_predictions,
                    format_thousands(model.predictions as u64),
                    format_time_ago(model.last_training, now)
                ));
            });
        }
    }

    fn render_prediction_analytics(&self, ui: &mut egui::Ui, now: u64) {
        let t = self.t();
        let analytics = PredictionAnalytics::compute(&self.data.predictions, &self.data.models);

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "📈", t.model_predictions, format_thousands(analytics.total_predictions as u64), BLUE);
            stat_card(ui, "🎯", t.accuracy, format!("{:.1}%", analytics.average_accuracy), GREEN);
            stat_card(ui, "🧠", t.tab_ai_models, analytics.active_models.to_string(), YELLOW);
            stat_card(ui, "⚠", "High Risk", analytics.high_risk_predictions.to_string(), ORANGE);
        });

        if let Some(latest) = latest_update(&self.data.predictions) {
            ui.add_space(6.0);
            ui.colored_label(
                egui::Color32::GRAY,
                format!("{}: {}", t.last_updated, format_time_ago(latest, now)),
            );
        }
    }
}
