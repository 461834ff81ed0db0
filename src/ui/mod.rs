//! Модуль пользовательского интерфейса
//!
//! Корень композиции: на каждом кадре ширина окна определяет класс
//! устройства, а класс выбирает одну из двух оболочек. Оболочки не хранят
//! состояния, всё общее лежит в `App`.

mod dashboard_view;
mod mobile_view;
mod offline_indicator;
mod onboarding_view;
mod predictions_view;
mod reports_view;
mod sensors_view;
mod widgets;

use crate::app::App;
use eframe::egui;
use sentinelx::fixtures::urgent_alert_count;
use sentinelx::i18n::Language;
use sentinelx::nav::{DesktopView, MobileView};
use sentinelx::viewport::ViewportClass;
use std::time::Duration;

/// Оболочка интерфейса для одного класса устройств
trait Shell {
    fn name(&self) -> &'static str;
    fn render(&self, app: &mut App, ctx: &egui::Context);
}

/// Боковое меню, лог, разделы
struct DesktopShell;

/// Нижняя панель навигации, приветственный экран
struct CompactShell;

fn shell_for(class: ViewportClass) -> &'static dyn Shell {
    match class {
        ViewportClass::Compact => &CompactShell,
        ViewportClass::Desktop => &DesktopShell,
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Обрабатываем события
        self.process_events();

        ctx.set_visuals(if self.prefs().dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Спиннеры активных задач, иначе раз в секунду ("N минут назад", события проверки сети)
        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        let width = ctx.screen_rect().width();
        if self.viewport.observe(Some(width)) {
            let shell = shell_for(self.viewport.class());
            let width = self.viewport.last_width().unwrap_or(width);
            self.log(format!("🖥 Layout: {} ({:.0}px)", shell.name(), width));
        }

        shell_for(self.viewport.class()).render(self, ctx);
    }
}

impl Shell for DesktopShell {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn render(&self, app: &mut App, ctx: &egui::Context) {
        app.render_sidebar(ctx);
        app.render_log_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("desktop_main")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let view = app.desktop_view;
                    match view {
                        DesktopView::Dashboard => app.render_dashboard(ui),
                        DesktopView::SensorFeed => app.render_sensor_feed(ui),
                        DesktopView::AiPredictions => app.render_predictions(ui),
                        DesktopView::CommunityReports => app.render_community_reports(ui),
                        _ => app.render_coming_soon(ui, view),
                    }
                });
        });
    }
}

impl Shell for CompactShell {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn render(&self, app: &mut App, ctx: &egui::Context) {
        if app.needs_onboarding() {
            app.render_onboarding(ctx);
            return;
        }

        app.render_bottom_nav(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("compact_main")
                .auto_shrink([false, false])
                .show(ui, |ui| match app.mobile_view {
                    MobileView::Home => app.render_mobile_home(ui),
                    MobileView::Alerts => app.render_mobile_alerts(ui),
                    MobileView::Report => app.render_mobile_report(ui),
                    MobileView::Settings => app.render_mobile_settings(ui),
                });
        });
    }
}

impl App {
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::SidePanel::left("nav_panel")
            .resizable(true)
            .min_width(180.0)
            .default_width(220.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading(format!("🛡 {}", t.app_title));
                ui.small(t.app_subtitle);
                ui.add_space(10.0);

                self.render_language_selector(ui);
                ui.separator();

                for view in DesktopView::all() {
                    let response =
                        ui.selectable_value(&mut self.desktop_view, *view, format!("{} {}", view.icon(), view.label(t)));
                    if !view.is_implemented() {
                        response.on_hover_text(t.coming_soon);
                    }
                }

                ui.add_space(10.0);
                ui.separator();

                self.render_offline_indicator(ui);

                let mut forced = self.connectivity.is_forced_offline();
                if ui.checkbox(&mut forced, t.simulate_offline).changed() {
                    self.set_forced_offline(forced);
                }

                let mut auto_sync = self.prefs().auto_sync_on_reconnect;
                if ui
                    .checkbox(&mut auto_sync, t.auto_sync)
                    .on_hover_text(t.auto_sync_tooltip)
                    .changed()
                {
                    self.update_settings(|s| s.auto_sync_on_reconnect = auto_sync);
                }

                let mut dark_mode = self.prefs().dark_mode;
                if ui.checkbox(&mut dark_mode, t.dark_mode).changed() {
                    self.update_settings(|s| s.dark_mode = dark_mode);
                }

                ui.add_space(10.0);
                ui.label(t.status);

                // Статус с автоматической прокруткой - занимает оставшееся место
                egui::ScrollArea::vertical()
                    .id_salt("status_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(&self.status_message);
                    });
            });
    }

    fn render_log_panel(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(60.0)
            .default_height(100.0)
            .max_height(400.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(t.log);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(t.clear).clicked() {
                            self.log_messages.clear();
                        }
                    });
                });

                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_messages {
                            ui.label(msg);
                        }
                        if self.log_messages.is_empty() {
                            ui.colored_label(egui::Color32::GRAY, t.log_empty);
                        }
                    });
            });
    }

    fn render_bottom_nav(&mut self, ctx: &egui::Context) {
        let t = self.t();
        let urgent = urgent_alert_count(&self.data.alerts);

        egui::TopBottomPanel::bottom("bottom_nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.columns(MobileView::all().len(), |cols| {
                for (col, view) in cols.iter_mut().zip(MobileView::all()) {
                    col.vertical_centered(|ui| {
                        let mut text = format!("{}\n{}", view.icon(), view.label(t));
                        if *view == MobileView::Alerts && urgent > 0 {
                            text = format!("{} ({})", text, urgent);
                        }
                        ui.selectable_value(&mut self.mobile_view, *view, text);
                    });
                }
            });
            ui.add_space(4.0);
        });
    }

    fn render_language_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for lang in Language::all() {
                if ui
                    .selectable_label(self.language == *lang, format!("{} {}", lang.flag(), lang.code()))
                    .on_hover_text(lang.native_name())
                    .clicked()
                {
                    self.set_language(*lang);
                }
            }
        });
    }
}
