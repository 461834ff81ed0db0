//! SentinelX GUI - панель мониторинга стихийных бедствий

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use app::App;
use eframe::egui;
use sentinelx::settings::{JsonSettingsStore, SettingsManager};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentinelx=info")))
        .init();

    // Настройки читаются один раз и передаются в приложение
    let store = JsonSettingsStore::default_location();
    tracing::info!(path = %store.path().display(), "loading settings");
    let settings = SettingsManager::open(Box::new(store));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SentinelX - Disaster Monitoring",
        options,
        Box::new(|_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            let mut app = App::new(settings)?;
            app.start_probe();
            Ok(Box::new(app))
        }),
    )
}
