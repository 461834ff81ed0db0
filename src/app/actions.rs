//! Действия приложения

use super::state::App;
use sentinelx::connectivity::{run_probe, Transition};
use sentinelx::events::{AppEvent, RefreshTarget};
use sentinelx::i18n::Language;
use sentinelx::offline::RecordKind;
use sentinelx::predictions::run_refresh;
use sentinelx::settings::Settings;
use sentinelx::sync::run_sync;
use sentinelx::task::{simulated_delay, TaskError};
use sentinelx::utils::current_timestamp;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Длительность имитации отправки сообщения
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Длительность имитации подписки на оповещения
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1500);

impl App {
    // === Сеть ===

    /// Запустить фоновую проверку сети
    pub fn start_probe(&mut self) {
        let address = self.prefs().probe_address.clone();
        let interval = Duration::from_secs(self.prefs().probe_interval_secs.max(1));
        let tx = self.event_tx.clone();

        let result = self.probe_task.try_spawn(self.runtime.handle(), |stop| {
            run_probe(address, interval, tx, stop)
        });
        self.report_task_result(result);
    }

    /// Включить/выключить ручной офлайн-режим
    pub fn set_forced_offline(&mut self, forced: bool) {
        let transition = self.connectivity.set_forced_offline(forced);
        self.apply_transition(transition);
    }

    /// Применить смену состояния сети
    pub(crate) fn apply_transition(&mut self, transition: Transition) {
        self.online_flag.store(self.connectivity.is_online(), Ordering::SeqCst);

        match transition {
            Transition::WentOnline => {
                self.log("🌐 Connection restored");
                if self.prefs().auto_sync_on_reconnect && self.queue.pending_count() > 0 {
                    self.request_sync();
                }
            }
            Transition::WentOffline => {
                let message = self.t().sync_when_restored;
                self.log(format!("📴 Offline: {}", message));
            }
            Transition::Unchanged => {}
        }
    }

    // === Синхронизация ===

    /// Синхронизировать ожидающие записи
    pub fn request_sync(&mut self) {
        if !self.is_online() {
            self.status_message = self.t().sync_when_restored.to_string();
            return;
        }

        let records = self.queue.pending_records();
        if records.is_empty() {
            self.status_message = match self.language {
                Language::English => "Nothing to sync".to_string(),
                Language::Filipino => "Walang kailangang i-sync".to_string(),
            };
            return;
        }

        let count = records.len();
        let backend = self.sync_backend.clone();
        let tx = self.event_tx.clone();

        let result = self.sync_task.try_spawn(self.runtime.handle(), |stop| {
            run_sync(backend, records, tx, stop)
        });
        if result.is_ok() {
            self.status_message = format!("{} ({})", self.t().syncing, count);
        }
        self.report_task_result(result);
    }

    /// Отменить синхронизацию
    pub fn cancel_sync(&mut self) {
        if self.sync_task.cancel() {
            self.log("⏹ Sync cancelled");
            self.status_message.clear();
        }
    }

    // === Обновление данных ===

    /// Запустить обновление раздела
    pub fn refresh(&mut self, target: RefreshTarget) {
        let tx = self.event_tx.clone();
        let handle = self.runtime.handle().clone();

        let slot = match target {
            RefreshTarget::Sensors => &mut self.sensors_task,
            RefreshTarget::Predictions => &mut self.predictions_task,
            RefreshTarget::Alerts => &mut self.alerts_task,
        };

        let result = slot.try_spawn(&handle, |stop| run_refresh(target, tx, stop));
        self.report_task_result(result);
    }

    pub fn is_refreshing(&self, target: RefreshTarget) -> bool {
        match target {
            RefreshTarget::Sensors => self.sensors_task.is_running(),
            RefreshTarget::Predictions => self.predictions_task.is_running(),
            RefreshTarget::Alerts => self.alerts_task.is_running(),
        }
    }

    // === Сообщения жителей ===

    /// Отправить сообщение из формы
    ///
    /// Без сети сообщение сохраняется в офлайн-очередь.
    pub fn submit_report(&mut self) {
        if !self.draft.can_submit() || self.submit_task.is_running() {
            return;
        }

        let title = self.draft.title.trim().to_string();
        let payload = self.draft.to_payload();

        if !self.is_online() {
            self.queue_report_offline(title, payload);
            return;
        }

        let tx = self.event_tx.clone();
        let online = self.online_flag.clone();
        let result = self.submit_task.try_spawn(self.runtime.handle(), |stop| async move {
            if !simulated_delay(SUBMIT_DELAY, &stop).await {
                return;
            }
            let event = if online.load(Ordering::SeqCst) {
                AppEvent::ReportSubmitted(title)
            } else {
                AppEvent::ReportDeferred { title, payload }
            };
            let _ = tx.send(event);
        });
        if result.is_ok() {
            self.status_message = self.t().submitting.to_string();
        }
        self.report_task_result(result);
    }

    /// Сохранить сообщение в офлайн-очередь и очистить форму
    pub(crate) fn queue_report_offline(&mut self, title: String, payload: serde_json::Value) {
        let id = self.queue.enqueue(RecordKind::CommunityReport, payload, current_timestamp());
        self.draft.clear();
        self.status_message = self.t().report_queued_offline.to_string();
        self.log(format!("💾 Report '{}' queued offline (#{})", title, id));
    }

    // === Приветствие ===

    /// Подписаться на оповещения по номеру телефона
    pub fn subscribe(&mut self) {
        if !self.onboarding.phone_is_valid() {
            return;
        }

        let phone = self.onboarding.phone.trim().to_string();
        let tx = self.event_tx.clone();
        let result = self.subscribe_task.try_spawn(self.runtime.handle(), |stop| async move {
            if simulated_delay(SUBSCRIBE_DELAY, &stop).await {
                let _ = tx.send(AppEvent::Subscribed(phone));
            }
        });
        self.report_task_result(result);
    }

    /// Завершить приветствие (флаг записывается один раз)
    pub fn complete_onboarding(&mut self) {
        match self.settings.complete_onboarding() {
            Ok(true) => self.log("👋 Welcome to SentinelX"),
            Ok(false) => {}
            Err(e) => self.log(format!("❌ Failed to save settings: {}", e)),
        }
    }

    // === Настройки ===

    /// Изменить и сохранить настройки
    pub fn update_settings(&mut self, f: impl FnOnce(&mut Settings)) {
        if let Err(e) = self.settings.update(f) {
            self.log(format!("❌ Failed to save settings: {}", e));
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.language = language;
        self.update_settings(|s| s.language = language);
    }

    fn report_task_result(&mut self, result: Result<(), TaskError>) {
        if let Err(e) = result {
            tracing::debug!(error = %e, "trigger ignored");
            self.status_message = e.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinelx::reports::ReportCategory;
    use sentinelx::settings::{MemorySettingsStore, SettingsManager};

    fn app() -> App {
        App::new(SettingsManager::open(Box::new(MemorySettingsStore::new()))).unwrap()
    }

    fn fill_draft(app: &mut App) {
        app.draft.title = "Clogged drainage".to_string();
        app.draft.description = "Water backing up on Rizal St.".to_string();
        app.draft.category = Some(ReportCategory::Flood);
    }

    #[test]
    fn test_offline_submit_enqueues() {
        let mut app = app();
        let before = app.queue.pending_count();

        app.set_forced_offline(true);
        fill_draft(&mut app);
        app.submit_report();

        assert_eq!(app.queue.pending_count(), before + 1);
        assert_eq!(app.queue.records()[0].kind, RecordKind::CommunityReport);
        assert_eq!(app.draft.title, "");
        assert!(!app.submit_task.is_running());
    }

    #[test]
    fn test_incomplete_draft_is_ignored() {
        let mut app = app();
        let before = app.queue.records().len();

        app.set_forced_offline(true);
        app.draft.title = "Only a title".to_string();
        app.submit_report();

        assert_eq!(app.queue.records().len(), before);
    }

    #[test]
    fn test_online_submit_rejects_overlap() {
        let mut app = app();
        fill_draft(&mut app);
        app.submit_report();
        assert!(app.submit_task.is_running());

        app.submit_report();
        assert!(app.submit_task.is_running());
        assert_eq!(app.status_message, app.t().submitting);
    }

    #[test]
    fn test_offline_submit_during_online_submission_is_ignored() {
        let mut app = app();
        let before = app.queue.pending_count();

        fill_draft(&mut app);
        app.submit_report();
        assert!(app.submit_task.is_running());

        app.set_forced_offline(true);
        app.submit_report();

        assert_eq!(app.queue.pending_count(), before);
        assert_eq!(app.draft.title, "Clogged drainage");
    }

    #[test]
    fn test_connection_lost_during_submit_queues_report() {
        let mut app = app();
        let before = app.queue.pending_count();

        fill_draft(&mut app);
        app.submit_report();
        app.set_forced_offline(true);

        std::thread::sleep(SUBMIT_DELAY + Duration::from_millis(600));
        app.process_events();

        assert_eq!(app.queue.pending_count(), before + 1);
        let record = &app.queue.records()[0];
        assert_eq!(record.kind, RecordKind::CommunityReport);
        assert_eq!(record.payload["title"], "Clogged drainage");
        assert_eq!(app.status_message, app.t().report_queued_offline);
        assert_eq!(app.draft.title, "");
    }

    #[test]
    fn test_sync_offline_does_not_start() {
        let mut app = app();
        app.set_forced_offline(true);
        app.request_sync();
        assert!(!app.sync_task.is_running());
    }

    #[test]
    fn test_forced_offline_updates_shared_flag() {
        let mut app = app();
        app.set_forced_offline(true);
        assert!(!app.online_flag.load(Ordering::SeqCst));
        app.set_forced_offline(false);
        assert!(app.online_flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_refresh_single_flight() {
        let mut app = app();
        app.refresh(RefreshTarget::Sensors);
        assert!(app.is_refreshing(RefreshTarget::Sensors));
        assert!(!app.is_refreshing(RefreshTarget::Predictions));

        app.refresh(RefreshTarget::Sensors);
        assert!(app.status_message.contains("already running"));
    }

    #[test]
    fn test_complete_onboarding() {
        let mut app = app();
        app.complete_onboarding();
        assert!(!app.needs_onboarding());
    }
}
