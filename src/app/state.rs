//! Состояние приложения

use sentinelx::connectivity::ConnectivityState;
use sentinelx::events::AppEvent;
use sentinelx::fixtures::{demo_offline_queue, Fixtures};
use sentinelx::i18n::{t, Language, Translations};
use sentinelx::nav::{DesktopView, MobileView, OnboardingFlow};
use sentinelx::offline::{IndicatorState, OfflineQueue};
use sentinelx::reports::{Filter, ReportCategory, ReportDraft, ReportStatus, Severity};
use sentinelx::sensors::SensorType;
use sentinelx::settings::{Settings, SettingsManager};
use sentinelx::sync::{SimulatedSyncBackend, SyncBackend, DEFAULT_SYNC_DELAY};
use sentinelx::task::TaskSlot;
use sentinelx::utils::current_timestamp;
use sentinelx::viewport::ViewportTracker;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Сколько сообщений хранить в логе
pub const MAX_LOG_MESSAGES: usize = 200;

/// Вкладка ленты датчиков
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorTab {
    #[default]
    LiveFeed,
    Status,
    Connectivity,
}

/// Вкладка центра прогнозов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionTab {
    #[default]
    Active,
    Models,
    Analytics,
}

/// Главная структура приложения
///
/// Общая для обеих раскладок: оболочки получают `&mut App` и не держат
/// собственного состояния.
pub struct App {
    // === Настройки ===
    pub settings: SettingsManager,
    pub language: Language,

    // === Раскладка ===
    pub viewport: ViewportTracker,
    pub desktop_view: DesktopView,
    pub mobile_view: MobileView,
    pub onboarding: OnboardingFlow,

    // === Сеть и очередь ===
    pub connectivity: ConnectivityState,
    /// Флаг сети для фоновых задач
    pub online_flag: Arc<AtomicBool>,
    pub queue: OfflineQueue,
    pub indicator: IndicatorState,
    pub sync_backend: Arc<dyn SyncBackend>,

    // === Данные ===
    pub data: Fixtures,
    pub sensors_updated_at: u64,
    pub predictions_updated_at: u64,
    pub alerts_updated_at: u64,

    // === Фильтры и вкладки ===
    pub report_status_filter: Filter<ReportStatus>,
    pub report_severity_filter: Filter<Severity>,
    pub history_category_filter: Filter<ReportCategory>,
    pub sensor_barangay_filter: Filter<String>,
    pub sensor_type_filter: Filter<SensorType>,
    pub sensor_tab: SensorTab,
    pub prediction_tab: PredictionTab,

    // === Форма сообщения ===
    pub draft: ReportDraft,

    // === Подписка ===
    pub subscribed_phone: Option<String>,

    // === Общее состояние ===
    pub status_message: String,
    pub log_messages: Vec<String>,

    // === Runtime ===
    pub runtime: tokio::runtime::Runtime,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: Option<mpsc::UnboundedReceiver<AppEvent>>,

    // === Фоновые задачи ===
    pub probe_task: TaskSlot,
    pub sync_task: TaskSlot,
    pub sensors_task: TaskSlot,
    pub predictions_task: TaskSlot,
    pub alerts_task: TaskSlot,
    pub submit_task: TaskSlot,
    pub subscribe_task: TaskSlot,
}

impl App {
    /// Создать приложение с уже прочитанными настройками
    pub fn new(settings: SettingsManager) -> io::Result<Self> {
        let online_flag = Arc::new(AtomicBool::new(true));
        let backend = SimulatedSyncBackend::new(DEFAULT_SYNC_DELAY, online_flag.clone());
        Self::with_backend(settings, Arc::new(backend), online_flag)
    }

    /// Создать приложение с внешним механизмом синхронизации
    pub fn with_backend(
        settings: SettingsManager,
        sync_backend: Arc<dyn SyncBackend>,
        online_flag: Arc<AtomicBool>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let now = current_timestamp();
        let language = settings.get().language;

        Ok(Self {
            settings,
            language,
            viewport: ViewportTracker::new(),
            desktop_view: DesktopView::default(),
            mobile_view: MobileView::default(),
            onboarding: OnboardingFlow::new(),
            connectivity: ConnectivityState::new(),
            online_flag,
            queue: demo_offline_queue(now),
            indicator: IndicatorState::default(),
            sync_backend,
            data: Fixtures::load(now),
            sensors_updated_at: now,
            predictions_updated_at: now,
            alerts_updated_at: now,
            report_status_filter: Filter::All,
            report_severity_filter: Filter::All,
            history_category_filter: Filter::All,
            sensor_barangay_filter: Filter::All,
            sensor_type_filter: Filter::All,
            sensor_tab: SensorTab::default(),
            prediction_tab: PredictionTab::default(),
            draft: ReportDraft::default(),
            subscribed_phone: None,
            status_message: String::new(),
            log_messages: Vec::new(),
            runtime,
            event_tx,
            event_rx: Some(event_rx),
            probe_task: TaskSlot::new("connectivity probe"),
            sync_task: TaskSlot::new("sync"),
            sensors_task: TaskSlot::new("sensor refresh"),
            predictions_task: TaskSlot::new("prediction refresh"),
            alerts_task: TaskSlot::new("alert refresh"),
            submit_task: TaskSlot::new("report submission"),
            subscribe_task: TaskSlot::new("alert subscription"),
        })
    }

    /// Добавить сообщение в лог
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "sentinelx::ui", "{}", message);

        self.log_messages.push(message);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            let overflow = self.log_messages.len() - MAX_LOG_MESSAGES;
            self.log_messages.drain(..overflow);
        }
    }

    /// Текущие настройки
    pub fn prefs(&self) -> &Settings {
        self.settings.get()
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Идёт ли хоть одна фоновая операция (кроме проверки сети)
    pub fn is_busy(&self) -> bool {
        self.sync_task.is_running()
            || self.sensors_task.is_running()
            || self.predictions_task.is_running()
            || self.alerts_task.is_running()
            || self.submit_task.is_running()
            || self.subscribe_task.is_running()
    }

    /// Нужно ли показать приветственный экран
    pub fn needs_onboarding(&self) -> bool {
        !self.prefs().onboarding_completed
    }

    /// Получить переводы для текущего языка
    pub fn t(&self) -> &'static Translations {
        t(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinelx::settings::MemorySettingsStore;

    fn app() -> App {
        App::new(SettingsManager::open(Box::new(MemorySettingsStore::new()))).unwrap()
    }

    #[test]
    fn test_new_app_defaults() {
        let app = app();
        assert!(app.is_online());
        assert!(!app.is_busy());
        assert!(app.needs_onboarding());
        assert!(app.viewport.last_width().is_none());
        assert_eq!(app.desktop_view, DesktopView::Dashboard);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut app = app();
        for i in 0..MAX_LOG_MESSAGES + 10 {
            app.log(format!("message {}", i));
        }
        assert_eq!(app.log_messages.len(), MAX_LOG_MESSAGES);
        assert_eq!(app.log_messages[0], "message 10");
    }

    #[test]
    fn test_language_comes_from_settings() {
        let store = MemorySettingsStore::with(Settings {
            language: Language::Filipino,
            ..Settings::default()
        });
        let app = App::new(SettingsManager::open(Box::new(store))).unwrap();
        assert_eq!(app.language, Language::Filipino);
    }
}
