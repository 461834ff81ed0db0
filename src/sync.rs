//! Синхронизация офлайн-очереди
//!
//! Реального сервера нет: механизм синхронизации внедряется как `SyncBackend`.
//! `SimulatedSyncBackend` ждёт фиксированное время и принимает все записи,
//! если сеть доступна. Повторов при ошибке нет.

use crate::events::AppEvent;
use crate::offline::OfflineRecord;
use crate::task::simulated_delay;
use crate::utils::current_timestamp;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Длительность имитации синхронизации
pub const DEFAULT_SYNC_DELAY: Duration = Duration::from_secs(2);

/// Ошибки синхронизации
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("no connection, data will sync when connection is restored")]
    Offline,
    #[error("sync cancelled")]
    Cancelled,
    #[error("nothing to sync")]
    Empty,
}

/// Внедряемый механизм синхронизации
#[async_trait]
pub trait SyncBackend: Send + Sync {
    /// Имя бэкенда для логов
    fn name(&self) -> &'static str;

    /// Передать записи, вернуть id принятых
    async fn push(&self, records: &[OfflineRecord], stop_flag: &AtomicBool) -> Result<Vec<u64>, SyncError>;
}

/// Имитация синхронизации с задержкой
pub struct SimulatedSyncBackend {
    delay: Duration,
    online: Arc<AtomicBool>,
}

impl SimulatedSyncBackend {
    /// `online` - общий флаг сети, обновляемый приложением
    pub fn new(delay: Duration, online: Arc<AtomicBool>) -> Self {
        Self { delay, online }
    }
}

#[async_trait]
impl SyncBackend for SimulatedSyncBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn push(&self, records: &[OfflineRecord], stop_flag: &AtomicBool) -> Result<Vec<u64>, SyncError> {
        if records.is_empty() {
            return Err(SyncError::Empty);
        }

        if !self.online.load(Ordering::SeqCst) {
            return Err(SyncError::Offline);
        }

        if !simulated_delay(self.delay, stop_flag).await {
            return Err(SyncError::Cancelled);
        }

        // Сеть могла пропасть во время передачи
        if !self.online.load(Ordering::SeqCst) {
            return Err(SyncError::Offline);
        }

        Ok(records.iter().map(|r| r.id).collect())
    }
}

/// Задача синхронизации: передаёт записи и сообщает результат в GUI
pub async fn run_sync(
    backend: Arc<dyn SyncBackend>,
    records: Vec<OfflineRecord>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    stop_flag: Arc<AtomicBool>,
) {
    let count = records.len();
    let _ = event_tx.send(AppEvent::SyncStarted(count));
    tracing::info!(backend = backend.name(), count, "sync started");

    match backend.push(&records, &stop_flag).await {
        Ok(ids) => {
            tracing::info!(accepted = ids.len(), "sync completed");
            let _ = event_tx.send(AppEvent::SyncCompleted {
                ids,
                at: current_timestamp(),
            });
        }
        Err(SyncError::Cancelled) => {
            tracing::debug!("sync cancelled");
        }
        Err(e) => {
            tracing::warn!(error = %e, "sync failed");
            let _ = event_tx.send(AppEvent::SyncFailed(e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::RecordKind;
    use serde_json::json;

    fn pending(id: u64) -> OfflineRecord {
        OfflineRecord {
            id,
            kind: RecordKind::CommunityReport,
            payload: json!({"title": "Road flooding"}),
            captured_at: 0,
            synced: false,
        }
    }

    #[tokio::test]
    async fn test_simulated_backend_accepts_all_when_online() {
        let backend = SimulatedSyncBackend::new(Duration::from_millis(10), Arc::new(AtomicBool::new(true)));
        let flag = AtomicBool::new(false);

        let ids = backend.push(&[pending(1), pending(2)], &flag).await.unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_simulated_backend_offline() {
        let backend = SimulatedSyncBackend::new(Duration::from_millis(10), Arc::new(AtomicBool::new(false)));
        let flag = AtomicBool::new(false);

        assert_eq!(backend.push(&[pending(1)], &flag).await, Err(SyncError::Offline));
    }

    #[tokio::test]
    async fn test_simulated_backend_empty_batch() {
        let backend = SimulatedSyncBackend::new(Duration::ZERO, Arc::new(AtomicBool::new(true)));
        let flag = AtomicBool::new(false);

        assert_eq!(backend.push(&[], &flag).await, Err(SyncError::Empty));
    }

    #[tokio::test]
    async fn test_run_sync_reports_completion() {
        let backend: Arc<dyn SyncBackend> =
            Arc::new(SimulatedSyncBackend::new(Duration::from_millis(10), Arc::new(AtomicBool::new(true))));
        let (tx, mut rx) = mpsc::unbounded_channel();

        run_sync(backend, vec![pending(7)], tx, Arc::new(AtomicBool::new(false))).await;

        assert_eq!(rx.recv().await, Some(AppEvent::SyncStarted(1)));
        match rx.recv().await {
            Some(AppEvent::SyncCompleted { ids, at }) => {
                assert_eq!(ids, vec![7]);
                assert!(at > 0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_sync_reports_failure() {
        let backend: Arc<dyn SyncBackend> =
            Arc::new(SimulatedSyncBackend::new(Duration::ZERO, Arc::new(AtomicBool::new(false))));
        let (tx, mut rx) = mpsc::unbounded_channel();

        run_sync(backend, vec![pending(1)], tx, Arc::new(AtomicBool::new(false))).await;

        assert_eq!(rx.recv().await, Some(AppEvent::SyncStarted(1)));
        assert!(matches!(rx.recv().await, Some(AppEvent::SyncFailed(_))));
    }

    #[tokio::test]
    async fn test_run_sync_cancelled_is_silent() {
        let backend: Arc<dyn SyncBackend> =
            Arc::new(SimulatedSyncBackend::new(Duration::from_secs(10), Arc::new(AtomicBool::new(true))));
        let (tx, mut rx) = mpsc::unbounded_channel();

        run_sync(backend, vec![pending(1)], tx, Arc::new(AtomicBool::new(true))).await;

        assert_eq!(rx.recv().await, Some(AppEvent::SyncStarted(1)));
        // Отправитель закрыт, других событий нет
        assert_eq!(rx.recv().await, None);
    }
}
