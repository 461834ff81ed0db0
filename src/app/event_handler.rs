//! Обработка событий фоновых задач

use super::state::App;
use sentinelx::events::{AppEvent, RefreshTarget};
use sentinelx::utils::current_timestamp;

impl App {
    /// Обработать все ожидающие события
    pub fn process_events(&mut self) {
        // Собираем все события в вектор
        let events: Vec<AppEvent> = {
            let Some(rx) = &mut self.event_rx else { return };
            let mut events = Vec::new();
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
            events
        };

        for event in events {
            self.handle_event(event);
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConnectivityChanged(online) => {
                self.on_connectivity_changed(online);
            }
            AppEvent::SyncStarted(count) => {
                self.log(format!("🔄 Syncing {} record(s)...", count));
            }
            AppEvent::SyncCompleted { ids, at } => {
                self.on_sync_completed(ids, at);
            }
            AppEvent::SyncFailed(err) => {
                self.log(format!("❌ Sync failed: {}", err));
                self.status_message = err;
            }
            AppEvent::RefreshCompleted(target) => {
                self.on_refresh_completed(target);
            }
            AppEvent::ReportSubmitted(title) => {
                self.on_report_submitted(title);
            }
            AppEvent::ReportDeferred { title, payload } => {
                self.queue_report_offline(title, payload);
            }
            AppEvent::Subscribed(phone) => {
                self.on_subscribed(phone);
            }
        }
    }

    fn on_connectivity_changed(&mut self, online: bool) {
        let transition = self.connectivity.apply_probe(online);
        self.apply_transition(transition);
    }

    fn on_sync_completed(&mut self, ids: Vec<u64>, at: u64) {
        let changed = self.queue.mark_synced(&ids, at);
        self.log(format!("✅ Synced {} record(s)", changed));
        self.status_message.clear();
    }

    fn on_refresh_completed(&mut self, target: RefreshTarget) {
        let now = current_timestamp();
        match target {
            RefreshTarget::Sensors => self.sensors_updated_at = now,
            RefreshTarget::Predictions => self.predictions_updated_at = now,
            RefreshTarget::Alerts => self.alerts_updated_at = now,
        }
        self.log(format!("🔄 Updated {}", target.label()));
    }

    fn on_report_submitted(&mut self, title: String) {
        self.draft.clear();
        self.status_message = self.t().report_submitted.to_string();
        self.log(format!("📤 Report '{}' submitted", title));
    }

    fn on_subscribed(&mut self, phone: String) {
        self.log(format!("🔔 Alerts will be sent to {}", phone));
        self.subscribed_phone = Some(phone);
        self.complete_onboarding();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinelx::settings::{MemorySettingsStore, Settings, SettingsManager};

    fn app_with(settings: Settings) -> App {
        App::new(SettingsManager::open(Box::new(MemorySettingsStore::with(settings)))).unwrap()
    }

    #[test]
    fn test_sync_completed_marks_records() {
        let mut app = app_with(Settings::default());
        let ids: Vec<u64> = app.queue.pending_records().iter().map(|r| r.id).collect();
        assert!(!ids.is_empty());

        app.handle_event(AppEvent::SyncCompleted { ids, at: 42 });

        assert_eq!(app.queue.pending_count(), 0);
        assert_eq!(app.queue.last_sync(), Some(42));
    }

    #[test]
    fn test_reconnect_does_not_sync_by_default() {
        let mut app = app_with(Settings::default());

        app.handle_event(AppEvent::ConnectivityChanged(false));
        assert!(!app.is_online());
        app.handle_event(AppEvent::ConnectivityChanged(true));

        assert!(app.is_online());
        assert!(!app.sync_task.is_running());
    }

    #[test]
    fn test_reconnect_syncs_when_enabled() {
        let mut app = app_with(Settings {
            auto_sync_on_reconnect: true,
            ..Settings::default()
        });

        app.handle_event(AppEvent::ConnectivityChanged(false));
        app.handle_event(AppEvent::ConnectivityChanged(true));

        assert!(app.sync_task.is_running());
    }

    #[test]
    fn test_repeated_probe_result_is_ignored() {
        let mut app = app_with(Settings::default());
        app.handle_event(AppEvent::ConnectivityChanged(true));
        assert!(app.log_messages.is_empty());
    }

    #[test]
    fn test_subscribed_completes_onboarding() {
        let mut app = app_with(Settings::default());
        app.handle_event(AppEvent::Subscribed("+63 912 345 6789".to_string()));

        assert!(!app.needs_onboarding());
        assert_eq!(app.subscribed_phone.as_deref(), Some("+63 912 345 6789"));
    }
}
