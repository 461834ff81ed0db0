//! Приветственный экран

use super::widgets::GREEN;
use crate::app::App;
use eframe::egui;
use sentinelx::nav::ONBOARDING_SLIDES;

impl App {
    pub fn render_onboarding(&mut self, ctx: &egui::Context) {
        let t = self.t();
        let slide = self.onboarding.current();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.onboarding.is_last() && ui.small_button(t.welcome_skip).clicked() {
                        self.onboarding.skip();
                    }
                });
            });

            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.15);
                ui.label(egui::RichText::new(slide.icon).size(56.0));
                ui.add_space(8.0);
                ui.heading(slide.title);
                ui.colored_label(egui::Color32::from_rgb(230, 200, 60), slide.subtitle);
                ui.add_space(6.0);
                ui.label(slide.description);
                ui.add_space(12.0);

                // Точки прогресса
                ui.horizontal(|ui| {
                    for i in 0..ONBOARDING_SLIDES.len() {
                        let dot = if i == self.onboarding.index() { "●" } else { "○" };
                        ui.label(dot);
                    }
                });

                ui.add_space(12.0);

                if self.onboarding.is_last() {
                    self.render_subscription(ui);
                    ui.add_space(8.0);
                    if ui.button(format!("🚀 {}", t.get_started)).clicked() {
                        self.complete_onboarding();
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if !self.onboarding.is_first() && ui.button(t.welcome_back).clicked() {
                        self.onboarding.back();
                    }
                    if !self.onboarding.is_last() && ui.button(t.welcome_next).clicked() {
                        self.onboarding.next();
                    }
                });
            });
        });
    }

    fn render_subscription(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        if let Some(phone) = &self.subscribed_phone {
            ui.colored_label(GREEN, format!("✅ {}: {}", t.subscribed, phone));
            return;
        }

        ui.label(t.phone_number);
        ui.add(egui::TextEdit::singleline(&mut self.onboarding.phone).hint_text("+63 9XX XXX XXXX"));

        if self.subscribe_task.is_running() {
            ui.spinner();
        } else if ui
            .add_enabled(self.onboarding.phone_is_valid(), egui::Button::new(format!("🔔 {}", t.subscribe)))
            .clicked()
        {
            self.subscribe();
        }
    }
}
