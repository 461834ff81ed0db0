//! Интеграционные тесты для sentinelx

use sentinelx::connectivity::{run_probe, ConnectivityState, Transition};
use sentinelx::events::{AppEvent, RefreshTarget};
use sentinelx::fixtures::{demo_offline_queue, Fixtures};
use sentinelx::offline::{IndicatorState, OfflineQueue, OfflineRecord, RecordKind};
use sentinelx::predictions::run_refresh;
use sentinelx::reports::{filter_reports, Filter, ReportStatus, Severity};
use sentinelx::settings::{JsonSettingsStore, Settings, SettingsManager, SettingsStore};
use sentinelx::sync::{run_sync, SimulatedSyncBackend, SyncBackend};
use sentinelx::task::{simulated_delay, TaskError, TaskSlot};
use sentinelx::viewport::{ViewportClass, ViewportTracker};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

fn record(id: u64, synced: bool) -> OfflineRecord {
    OfflineRecord {
        id,
        kind: RecordKind::SensorReading,
        payload: json!({"sensor": "rain-001"}),
        captured_at: 0,
        synced,
    }
}

/// Тест: граница компактной раскладки
#[test]
fn test_viewport_breakpoint() {
    let mut tracker = ViewportTracker::new();

    tracker.observe(Some(1024.0));
    assert!(!tracker.is_compact());

    assert!(tracker.observe(Some(500.0)));
    assert!(tracker.is_compact());

    // Одинаковая ширина не переключает состояние
    for _ in 0..5 {
        assert!(!tracker.observe(Some(500.0)));
    }
    assert_eq!(tracker.class(), ViewportClass::Compact);

    assert!(tracker.observe(Some(768.0)));
    assert!(!tracker.is_compact());
}

/// Тест: разбиение очереди полное и без пересечений
#[test]
fn test_partition_exhaustive_and_disjoint() {
    let records = vec![record(0, false), record(1, true), record(2, false)];
    let queue = OfflineQueue::from_records(records.clone());
    let partition = queue.partition();

    assert_eq!(partition.pending.len(), 2);
    assert_eq!(partition.synced.len(), 1);
    assert_eq!(partition.total(), records.len());
    assert!(partition.pending.iter().all(|r| !r.synced));
    assert!(partition.synced.iter().all(|r| r.synced));
}

/// Тест: двойное переключение деталей возвращает исходное состояние
#[test]
fn test_indicator_toggle_twice() {
    let mut state = IndicatorState::default();
    let original = state;

    state.toggle_details();
    assert_ne!(state, original);
    state.toggle_details();
    assert_eq!(state, original);
}

/// Тест: фильтр по статусу на демонстрационных данных
#[test]
fn test_filter_fixture_reports() {
    let fixtures = Fixtures::load(1_700_000_000);

    let verified = filter_reports(&fixtures.reports, Filter::Only(ReportStatus::Verified), Filter::All);
    assert!(!verified.is_empty());
    assert!(verified.iter().all(|r| r.status == ReportStatus::Verified));

    let all = filter_reports(&fixtures.reports, Filter::All, Filter::All);
    assert_eq!(all.len(), fixtures.reports.len());
    assert!(all.iter().zip(&fixtures.reports).all(|(a, b)| a.id == b.id));

    let critical = filter_reports(&fixtures.reports, Filter::All, Filter::Only(Severity::Critical));
    assert!(critical.iter().all(|r| r.severity == Severity::Critical));
}

/// Тест: офлайн-отправка, синхронизация, пометка записей
#[tokio::test]
async fn test_offline_queue_sync_flow() {
    let mut queue = OfflineQueue::new();
    queue.enqueue(RecordKind::CommunityReport, json!({"title": "Road flooding"}), 100);
    queue.enqueue(RecordKind::CommunityReport, json!({"title": "Landslide"}), 200);

    let online = Arc::new(AtomicBool::new(true));
    let backend: Arc<dyn SyncBackend> =
        Arc::new(SimulatedSyncBackend::new(Duration::from_millis(20), online.clone()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    run_sync(backend, queue.pending_records(), tx, Arc::new(AtomicBool::new(false))).await;

    assert_eq!(rx.recv().await, Some(AppEvent::SyncStarted(2)));
    match rx.recv().await {
        Some(AppEvent::SyncCompleted { ids, at }) => {
            assert_eq!(queue.mark_synced(&ids, at), 2);
        }
        other => panic!("unexpected event: {:?}", other),
    }

    assert_eq!(queue.pending_count(), 0);
    assert_eq!(queue.synced_count(), 2);
    assert!(queue.last_sync().is_some());
}

/// Тест: синхронизация без сети сообщает об ошибке и ничего не меняет
#[tokio::test]
async fn test_sync_offline_fails() {
    let queue = demo_offline_queue(10_000);
    let backend: Arc<dyn SyncBackend> =
        Arc::new(SimulatedSyncBackend::new(Duration::from_millis(20), Arc::new(AtomicBool::new(false))));
    let (tx, mut rx) = mpsc::unbounded_channel();

    run_sync(backend, queue.pending_records(), tx, Arc::new(AtomicBool::new(false))).await;

    assert_eq!(rx.recv().await, Some(AppEvent::SyncStarted(3)));
    assert!(matches!(rx.recv().await, Some(AppEvent::SyncFailed(_))));
    assert_eq!(queue.pending_count(), 3);
}

/// Тест: повторный запуск отклоняется, после завершения принимается
#[tokio::test]
async fn test_task_slot_single_flight() {
    let handle = Handle::current();
    let mut slot = TaskSlot::new("prediction refresh");
    let (tx, mut rx) = mpsc::unbounded_channel();

    let tx1 = tx.clone();
    slot.try_spawn(&handle, |stop| run_refresh(RefreshTarget::Predictions, tx1, stop))
        .unwrap();

    let tx2 = tx.clone();
    let second = slot.try_spawn(&handle, |stop| run_refresh(RefreshTarget::Predictions, tx2, stop));
    assert_eq!(second, Err(TaskError::AlreadyRunning("prediction refresh")));

    // Отмена освобождает слот
    assert!(slot.cancel());
    assert!(!slot.is_running());

    slot.try_spawn(&handle, |stop| async move {
        if simulated_delay(Duration::from_millis(10), &stop).await {
            let _ = tx.send(AppEvent::RefreshCompleted(RefreshTarget::Sensors));
        }
    })
    .unwrap();

    assert_eq!(rx.recv().await, Some(AppEvent::RefreshCompleted(RefreshTarget::Sensors)));
}

/// Тест: проверка сети сообщает о доступности локального адреса
#[tokio::test]
async fn test_probe_reports_local_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let stop = Arc::new(AtomicBool::new(false));

    let probe = tokio::spawn(run_probe(address, Duration::from_millis(50), tx, stop.clone()));

    assert_eq!(rx.recv().await, Some(AppEvent::ConnectivityChanged(true)));

    stop.store(true, Ordering::SeqCst);
    probe.await.unwrap();

    let mut state = ConnectivityState::new();
    assert_eq!(state.apply_probe(false), Transition::WentOffline);
    assert_eq!(state.apply_probe(true), Transition::WentOnline);
}

/// Тест: настройки сохраняются и читаются из JSON
#[test]
fn test_settings_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentinelx").join("settings.json");

    // Файла нет - значения по умолчанию
    let store = JsonSettingsStore::new(&path);
    assert_eq!(store.load().unwrap(), Settings::default());

    let mut manager = SettingsManager::open(Box::new(JsonSettingsStore::new(&path)));
    assert!(manager.complete_onboarding().unwrap());
    manager.update(|s| s.auto_sync_on_reconnect = true).unwrap();

    let reopened = SettingsManager::open(Box::new(JsonSettingsStore::new(&path)));
    assert!(reopened.get().onboarding_completed);
    assert!(reopened.get().auto_sync_on_reconnect);
}
