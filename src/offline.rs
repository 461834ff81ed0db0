//! Очередь офлайн-записей
//!
//! Записи создаются, когда действие выполняется без сети, и переходят
//! `synced = false -> true` после синхронизации. Записи не удаляются:
//! синхронизированные остаются для списка "Recently Synced".

use serde::{Deserialize, Serialize};

/// Сколько ожидающих записей показывать в деталях
pub const PENDING_PREVIEW_LIMIT: usize = 5;

/// Сколько синхронизированных записей показывать в деталях
pub const SYNCED_PREVIEW_LIMIT: usize = 3;

/// Тип офлайн-записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    SensorReading,
    CommunityReport,
    Alert,
    Prediction,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::SensorReading => "Sensor Reading",
            RecordKind::CommunityReport => "Community Report",
            RecordKind::Alert => "Alert",
            RecordKind::Prediction => "AI Prediction",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RecordKind::SensorReading => "🗄",
            RecordKind::CommunityReport => "📤",
            RecordKind::Alert => "⚠",
            RecordKind::Prediction => "✅",
        }
    }
}

/// Запись, ожидающая синхронизации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineRecord {
    pub id: u64,
    pub kind: RecordKind,
    pub payload: serde_json::Value,
    /// Время создания (Unix timestamp)
    pub captured_at: u64,
    pub synced: bool,
}

/// Разбиение записей на ожидающие и синхронизированные
///
/// Порядок внутри каждой группы совпадает с порядком входа.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub pending: Vec<&'a OfflineRecord>,
    pub synced: Vec<&'a OfflineRecord>,
}

impl<'a> Partition<'a> {
    /// Разбить записи по флагу `synced`
    pub fn of(records: &'a [OfflineRecord]) -> Self {
        let (synced, pending): (Vec<&OfflineRecord>, Vec<&OfflineRecord>) =
            records.iter().partition(|r| r.synced);
        Self { pending, synced }
    }

    pub fn total(&self) -> usize {
        self.pending.len() + self.synced.len()
    }

    /// Первые ожидающие записи для отображения
    pub fn pending_preview(&self) -> &[&'a OfflineRecord] {
        &self.pending[..self.pending.len().min(PENDING_PREVIEW_LIMIT)]
    }

    /// Сколько ожидающих записей не поместилось в превью ("+N more items")
    pub fn pending_overflow(&self) -> usize {
        self.pending.len().saturating_sub(PENDING_PREVIEW_LIMIT)
    }

    /// Первые синхронизированные записи для отображения
    pub fn synced_preview(&self) -> &[&'a OfflineRecord] {
        &self.synced[..self.synced.len().min(SYNCED_PREVIEW_LIMIT)]
    }
}

/// Очередь офлайн-записей (новые записи в начале)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfflineQueue {
    records: Vec<OfflineRecord>,
    next_id: u64,
    last_sync: Option<u64>,
}

impl OfflineQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать очередь из готовых записей (порядок сохраняется)
    pub fn from_records(records: Vec<OfflineRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id.saturating_add(1)).max().unwrap_or(0);
        Self {
            records,
            next_id,
            last_sync: None,
        }
    }

    /// Поставить запись в очередь, вернуть её id
    pub fn enqueue(&mut self, kind: RecordKind, payload: serde_json::Value, captured_at: u64) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        self.records.insert(0, OfflineRecord {
            id,
            kind,
            payload,
            captured_at,
            synced: false,
        });

        tracing::debug!(id, kind = kind.label(), "offline record queued");
        id
    }

    pub fn records(&self) -> &[OfflineRecord] {
        &self.records
    }

    pub fn partition(&self) -> Partition<'_> {
        Partition::of(&self.records)
    }

    pub fn pending_count(&self) -> usize {
        self.records.iter().filter(|r| !r.synced).count()
    }

    pub fn synced_count(&self) -> usize {
        self.records.iter().filter(|r| r.synced).count()
    }

    /// Копии ожидающих записей для передачи в задачу синхронизации
    pub fn pending_records(&self) -> Vec<OfflineRecord> {
        self.records.iter().filter(|r| !r.synced).cloned().collect()
    }

    /// Отметить записи как синхронизированные
    ///
    /// Возвращает количество реально изменённых записей. Время последней
    /// синхронизации обновляется при любом завершении синхронизации.
    pub fn mark_synced(&mut self, ids: &[u64], at: u64) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut() {
            if !record.synced && ids.contains(&record.id) {
                record.synced = true;
                changed += 1;
            }
        }
        self.last_sync = Some(at);
        changed
    }

    /// Время последней синхронизации
    pub fn last_sync(&self) -> Option<u64> {
        self.last_sync
    }
}

/// Локальное состояние индикатора (показ деталей)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorState {
    pub show_details: bool,
}

impl IndicatorState {
    /// Переключить видимость деталей (без побочных эффектов)
    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    pub fn details_button_label(&self) -> &'static str {
        if self.show_details {
            "Hide Details"
        } else {
            "Show Details"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64, synced: bool) -> OfflineRecord {
        OfflineRecord {
            id,
            kind: RecordKind::SensorReading,
            payload: json!({}),
            captured_at: 0,
            synced,
        }
    }

    #[test]
    fn test_partition_counts() {
        let records = vec![record(1, false), record(2, true), record(3, false)];
        let part = Partition::of(&records);

        assert_eq!(part.pending.len(), 2);
        assert_eq!(part.synced.len(), 1);
        assert_eq!(part.total(), records.len());
    }

    #[test]
    fn test_partition_exhaustive_and_disjoint() {
        let records: Vec<_> = (0..17).map(|i| record(i, i % 3 == 0)).collect();
        let part = Partition::of(&records);

        assert_eq!(part.total(), records.len());
        assert!(part.pending.iter().all(|r| !r.synced));
        assert!(part.synced.iter().all(|r| r.synced));
        for r in &part.pending {
            assert!(!part.synced.iter().any(|s| s.id == r.id));
        }
    }

    #[test]
    fn test_partition_preserves_order() {
        let records = vec![record(5, false), record(1, true), record(3, false), record(2, false)];
        let part = Partition::of(&records);
        let ids: Vec<u64> = part.pending.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 3, 2]);
    }

    #[test]
    fn test_partition_empty() {
        let part = Partition::of(&[]);
        assert_eq!(part.total(), 0);
        assert!(part.pending_preview().is_empty());
        assert_eq!(part.pending_overflow(), 0);
    }

    #[test]
    fn test_preview_caps() {
        let mut records: Vec<_> = (0..8).map(|i| record(i, false)).collect();
        records.extend((8..14).map(|i| record(i, true)));
        let part = Partition::of(&records);

        assert_eq!(part.pending_preview().len(), PENDING_PREVIEW_LIMIT);
        assert_eq!(part.pending_overflow(), 3);
        assert_eq!(part.synced_preview().len(), SYNCED_PREVIEW_LIMIT);
        assert_eq!(part.pending_preview()[0].id, 0);
    }

    #[test]
    fn test_queue_enqueue_newest_first() {
        let mut queue = OfflineQueue::new();
        let a = queue.enqueue(RecordKind::Alert, json!({"n": 1}), 10);
        let b = queue.enqueue(RecordKind::CommunityReport, json!({"n": 2}), 20);

        assert_ne!(a, b);
        assert_eq!(queue.records()[0].id, b);
        assert_eq!(queue.pending_count(), 2);
        assert_eq!(queue.synced_count(), 0);
    }

    #[test]
    fn test_queue_mark_synced() {
        let mut queue = OfflineQueue::new();
        let a = queue.enqueue(RecordKind::Alert, json!(null), 10);
        let b = queue.enqueue(RecordKind::Prediction, json!(null), 20);
        assert!(queue.last_sync().is_none());

        assert_eq!(queue.mark_synced(&[a], 100), 1);
        assert_eq!(queue.pending_count(), 1);
        assert_eq!(queue.synced_count(), 1);
        assert_eq!(queue.last_sync(), Some(100));

        // Повторная отметка ничего не меняет
        assert_eq!(queue.mark_synced(&[a], 120), 0);
        assert_eq!(queue.pending_records()[0].id, b);
    }

    #[test]
    fn test_queue_from_records_continues_ids() {
        let mut queue = OfflineQueue::from_records(vec![record(4, false), record(9, true)]);
        let id = queue.enqueue(RecordKind::Alert, json!(null), 0);
        assert_eq!(id, 10);
    }

    #[test]
    fn test_queue_from_records_max_id() {
        let queue = OfflineQueue::from_records(vec![record(u64::MAX, false), record(3, true)]);
        assert_eq!(queue.records().len(), 2);
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_toggle_details_twice_restores() {
        let mut state = IndicatorState::default();
        let original = state;

        state.toggle_details();
        assert_ne!(state, original);
        assert_eq!(state.details_button_label(), "Hide Details");

        state.toggle_details();
        assert_eq!(state, original);
    }

    #[test]
    fn test_record_kind_serde_names() {
        let json = serde_json::to_string(&RecordKind::CommunityReport).unwrap();
        assert_eq!(json, "\"community_report\"");
    }
}
