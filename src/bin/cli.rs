//! SentinelX CLI - консольный просмотр данных, очереди и настроек

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use sentinelx::connectivity::{check_reachable, DEFAULT_PROBE_ADDRESS};
use sentinelx::events::AppEvent;
use sentinelx::fixtures::{demo_offline_queue, total_affected, urgent_alert_count, Fixtures};
use sentinelx::offline::OfflineRecord;
use sentinelx::predictions::PredictionAnalytics;
use sentinelx::reports::{filter_reports, Filter, ReportStats, ReportStatus, Severity};
use sentinelx::sensors::{filter_readings, SensorSummary, SensorType};
use sentinelx::settings::{default_settings_path, JsonSettingsStore, SettingsManager};
use sentinelx::sync::{run_sync, SimulatedSyncBackend, DEFAULT_SYNC_DELAY};
use sentinelx::utils::{current_timestamp, format_thousands, format_time_ago, truncate_string};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Статус сообщения для CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusArg {
    Pending,
    Verified,
    False,
    Investigating,
}

impl From<StatusArg> for ReportStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Pending => ReportStatus::Pending,
            StatusArg::Verified => ReportStatus::Verified,
            StatusArg::False => ReportStatus::False,
            StatusArg::Investigating => ReportStatus::Investigating,
        }
    }
}

/// Уровень опасности для CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeverityArg {
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityArg> for Severity {
    fn from(s: SeverityArg) -> Self {
        match s {
            SeverityArg::Low => Severity::Low,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::High => Severity::High,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

/// Тип датчика для CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SensorArg {
    Rainfall,
    WaterLevel,
    SoilMoisture,
    Humidity,
    Temperature,
}

impl From<SensorArg> for SensorType {
    fn from(s: SensorArg) -> Self {
        match s {
            SensorArg::Rainfall => SensorType::Rainfall,
            SensorArg::WaterLevel => SensorType::WaterLevel,
            SensorArg::SoilMoisture => SensorType::SoilMoisture,
            SensorArg::Humidity => SensorType::Humidity,
            SensorArg::Temperature => SensorType::Temperature,
        }
    }
}

fn to_filter<A, T: From<A>>(arg: Option<A>) -> Filter<T> {
    match arg {
        Some(value) => Filter::Only(value.into()),
        None => Filter::All,
    }
}

#[derive(Parser)]
#[command(name = "sentinelx_cli")]
#[command(author = "sentinelx")]
#[command(version)]
#[command(about = "Disaster monitoring data, offline queue and settings", long_about = None)]
struct Cli {
    /// Путь к файлу настроек (по умолчанию - папка данных пользователя)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Сводка системы и проверка сети
    Status,

    /// Сообщения жителей
    Reports {
        /// Только с этим статусом
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Только с этим уровнем опасности
        #[arg(short = 'v', long, value_enum)]
        severity: Option<SeverityArg>,
    },

    /// Показания датчиков
    Sensors {
        /// Только этот барангай (например: "Central Valley")
        #[arg(short, long)]
        barangay: Option<String>,

        /// Только этот тип датчика
        #[arg(short = 't', long = "type", value_enum)]
        sensor_type: Option<SensorArg>,
    },

    /// Прогнозы и модели ИИ
    Predictions,

    /// Офлайн-очередь (демонстрационная)
    Queue {
        /// Синхронизировать ожидающие записи
        #[arg(long)]
        sync: bool,

        /// Считать сеть недоступной
        #[arg(long)]
        offline: bool,
    },

    /// Настройки
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Показать настройки
    Show,
    /// Снова показывать приветственный экран
    ResetOnboarding,
    /// Отметить приветственный экран пройденным
    CompleteOnboarding,
    /// Синхронизировать очередь при восстановлении сети
    AutoSync {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentinelx=warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings_path = cli.settings.unwrap_or_else(default_settings_path);
    let fixtures = Fixtures::load(current_timestamp());

    match cli.command {
        Commands::Status => {
            show_status(&fixtures, settings_path).await;
        }
        Commands::Reports { status, severity } => {
            show_reports(&fixtures, to_filter(status), to_filter(severity));
        }
        Commands::Sensors { barangay, sensor_type } => {
            show_sensors(&fixtures, barangay, to_filter(sensor_type));
        }
        Commands::Predictions => {
            show_predictions(&fixtures);
        }
        Commands::Queue { sync, offline } => {
            manage_queue(sync, offline).await;
        }
        Commands::Settings { action } => {
            manage_settings(settings_path, action);
        }
    }
}

async fn show_status(fixtures: &Fixtures, settings_path: PathBuf) {
    let settings = SettingsManager::open(Box::new(JsonSettingsStore::new(settings_path)));
    let address = if settings.get().probe_address.is_empty() {
        DEFAULT_PROBE_ADDRESS.to_string()
    } else {
        settings.get().probe_address.clone()
    };
    let stats = &fixtures.system_stats;

    println!();
    println!("🛡  SentinelX - Disaster Monitoring & Alert Platform");
    println!();
    println!("   Active threats:    {}", stats.active_threats);
    println!("   Evacuation zones:  {}", stats.evacuation_zones);
    println!("   Response teams:    {}", stats.response_teams);
    println!("   System load:       {}%", stats.system_load);
    println!(
        "   Critical alerts:   {} ({} people affected)",
        urgent_alert_count(&fixtures.alerts),
        format_thousands(total_affected(&fixtures.alerts))
    );
    println!();

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Checking connectivity ({})...", address));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let online = check_reachable(&address, Duration::from_secs(3)).await;
    spinner.finish_and_clear();

    if online {
        println!("📶 Online ({})", address);
    } else {
        println!("📴 Offline ({} unreachable)", address);
    }
}

fn show_reports(fixtures: &Fixtures, status: Filter<ReportStatus>, severity: Filter<Severity>) {
    let now = current_timestamp();
    let stats = ReportStats::from_reports(&fixtures.reports);

    println!();
    println!(
        "📋 Reports: {} total, {} verified, {} pending, {} reporters",
        stats.total, stats.verified, stats.pending, stats.unique_reporters
    );
    println!();

    let reports = filter_reports(&fixtures.reports, status, severity);
    if reports.is_empty() {
        println!("No reports match the selected filters");
        return;
    }

    for report in reports {
        println!(
            "{} [{:<13}] [{:<8}] {}",
            report.category.icon(),
            report.status.as_str(),
            report.severity.as_str(),
            report.title
        );
        println!(
            "     📍 {} • {} • {}",
            report.location,
            report.reporter.name,
            format_time_ago(report.timestamp, now)
        );
        if let Some(analysis) = &report.ai_analysis {
            println!("     🧠 {}% • {}", analysis.confidence, analysis.recommendation);
        }
    }
}

fn show_sensors(fixtures: &Fixtures, barangay: Option<String>, sensor_type: Filter<SensorType>) {
    let now = current_timestamp();
    let summary = SensorSummary::from_barangays(&fixtures.barangays);

    println!();
    println!(
        "📡 Sensors: {} total, {} online, {} warning, {} offline",
        summary.total, summary.online, summary.warning, summary.offline
    );
    println!();

    let barangay_filter = match &barangay {
        Some(name) => Filter::Only(name.as_str()),
        None => Filter::All,
    };

    for reading in filter_readings(&fixtures.barangays, barangay_filter, sensor_type) {
        println!(
            "{} {:<14} {:>7} {:<6} {} [{}] {} • {}",
            reading.sensor_type.icon(),
            reading.sensor_type.label(),
            reading.value,
            reading.unit,
            reading.trend.arrow(),
            reading.risk().as_str(),
            reading.barangay,
            format_time_ago(reading.timestamp, now)
        );
    }
}

fn show_predictions(fixtures: &Fixtures) {
    let analytics = PredictionAnalytics::compute(&fixtures.predictions, &fixtures.models);

    println!();
    println!(
        "🧠 {} predictions by {} active models (avg accuracy {:.1}%)",
        format_thousands(analytics.total_predictions as u64),
        analytics.active_models,
        analytics.average_accuracy
    );
    println!();

    for prediction in &fixtures.predictions {
        println!(
            "{} {:<10} {:>3}% {} [{}] {} • {}",
            prediction.hazard.icon(),
            prediction.hazard.label(),
            prediction.probability,
            prediction.trend.arrow(),
            prediction.risk_level.as_str(),
            prediction.location,
            prediction.timeframe
        );
    }
}

fn print_record(record: &OfflineRecord, now: u64) {
    let title = record
        .payload
        .get("title")
        .and_then(|v| v.as_str())
        .map(|s| truncate_string(s, 32))
        .unwrap_or_default();

    println!(
        "   {} #{:<3} {:<17} {:<34} {}",
        record.kind.icon(),
        record.id,
        record.kind.label(),
        title,
        format_time_ago(record.captured_at, now)
    );
}

async fn manage_queue(sync: bool, offline: bool) {
    let now = current_timestamp();
    let mut queue = demo_offline_queue(now);

    {
        let partition = queue.partition();
        println!();
        println!("⏳ Pending sync: {}", partition.pending.len());
        for record in partition.pending_preview() {
            print_record(record, now);
        }
        if partition.pending_overflow() > 0 {
            println!("   +{} more items", partition.pending_overflow());
        }
        println!("✅ Recently synced: {}", partition.synced.len());
        for record in partition.synced_preview() {
            print_record(record, now);
        }
    }

    if !sync {
        return;
    }

    let online = Arc::new(AtomicBool::new(!offline));
    let backend = Arc::new(SimulatedSyncBackend::new(DEFAULT_SYNC_DELAY, online));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let records = queue.pending_records();

    tokio::spawn(run_sync(backend, records, tx, Arc::new(AtomicBool::new(false))));

    println!();
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{elapsed}] {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(100));

    while let Some(event) = rx.recv().await {
        match event {
            AppEvent::SyncStarted(count) => {
                bar.set_message(format!("Syncing {} record(s)...", count));
            }
            AppEvent::SyncCompleted { ids, at } => {
                let changed = queue.mark_synced(&ids, at);
                bar.finish_with_message(format!("✅ Synced {} record(s)", changed));
            }
            AppEvent::SyncFailed(err) => {
                bar.abandon_with_message(format!("❌ Sync failed: {}", err));
            }
            _ => {}
        }
    }

    println!(
        "   Pending: {}, synced: {}",
        queue.pending_count(),
        queue.synced_count()
    );
}

fn manage_settings(path: PathBuf, action: SettingsAction) {
    let mut manager = SettingsManager::open(Box::new(JsonSettingsStore::new(&path)));

    let result = match action {
        SettingsAction::Show => {
            println!("📁 {}", path.display());
            match serde_json::to_string_pretty(manager.get()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error: {}", e),
            }
            Ok(())
        }
        SettingsAction::ResetOnboarding => manager.update(|s| s.onboarding_completed = false),
        SettingsAction::CompleteOnboarding => manager.complete_onboarding().map(|written| {
            if !written {
                println!("Onboarding was already completed");
            }
        }),
        SettingsAction::AutoSync { enabled } => manager.update(|s| s.auto_sync_on_reconnect = enabled),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
