//! Индикатор сети и офлайн-очереди

use super::widgets::{GREEN, ORANGE};
use crate::app::App;
use eframe::egui;
use sentinelx::offline::OfflineRecord;
use sentinelx::utils::{current_timestamp, format_time_ago, truncate_string};

impl App {
    /// Отрисовать индикатор (общий для обеих раскладок)
    pub fn render_offline_indicator(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        let now = current_timestamp();
        let online = self.is_online();

        let mut sync_clicked = false;
        let mut cancel_clicked = false;
        let mut toggle_clicked = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            let partition = self.queue.partition();
            let pending = partition.pending.len();

            ui.horizontal_wrapped(|ui| {
                if online {
                    ui.colored_label(GREEN, format!("📶 {}", t.online));
                } else {
                    ui.colored_label(ORANGE, format!("📴 {}", t.offline_mode));
                }

                if pending > 0 {
                    ui.label(format!("• {} {}", pending, t.pending));
                }

                if online {
                    if let Some(last) = self.queue.last_sync() {
                        ui.colored_label(
                            egui::Color32::GRAY,
                            format!("• {}: {}", t.last_sync, format_time_ago(last, now)),
                        );
                    }
                }
            });

            if !online {
                ui.colored_label(egui::Color32::GRAY, t.sync_when_restored);
            }

            ui.horizontal(|ui| {
                if self.sync_task.is_running() {
                    ui.spinner();
                    ui.label(t.syncing);
                    cancel_clicked = ui.small_button(t.cancel).clicked();
                } else if online && pending > 0 {
                    sync_clicked = ui.button(format!("🔄 {}", t.sync_now)).clicked();
                }

                if partition.total() > 0 {
                    toggle_clicked = ui.small_button(self.indicator.details_button_label()).clicked();
                }
            });

            if self.indicator.show_details {
                ui.separator();

                if !partition.pending.is_empty() {
                    ui.label(egui::RichText::new(t.pending_sync).strong());
                    for record in partition.pending_preview() {
                        record_row(ui, record, now);
                    }
                    let overflow = partition.pending_overflow();
                    if overflow > 0 {
                        ui.colored_label(egui::Color32::GRAY, format!("+{} {}", overflow, t.more_items));
                    }
                }

                if !partition.synced.is_empty() {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(t.recently_synced).strong());
                    for record in partition.synced_preview() {
                        record_row(ui, record, now);
                    }
                }
            }
        });

        if toggle_clicked {
            self.indicator.toggle_details();
        }
        if sync_clicked {
            self.request_sync();
        }
        if cancel_clicked {
            self.cancel_sync();
        }
    }
}

fn record_row(ui: &mut egui::Ui, record: &OfflineRecord, now: u64) {
    ui.horizontal(|ui| {
        ui.label(record.kind.icon());
        ui.label(record.kind.label());

        if let Some(title) = record.payload.get("title").and_then(|v| v.as_str()) {
            ui.colored_label(egui::Color32::GRAY, truncate_string(title, 28));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small(format_time_ago(record.captured_at, now));
            if record.synced {
                ui.colored_label(GREEN, "✔");
            }
        });
    });
}
