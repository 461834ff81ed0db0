//! События фоновых задач для GUI

/// Что обновляется фоновой задачей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTarget {
    Sensors,
    Predictions,
    Alerts,
}

impl RefreshTarget {
    pub fn label(&self) -> &'static str {
        match self {
            RefreshTarget::Sensors => "sensor feed",
            RefreshTarget::Predictions => "AI predictions",
            RefreshTarget::Alerts => "alerts",
        }
    }
}

/// События фоновых задач
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Сеть ===
    
    /// Результат проверки сети изменился (онлайн?)
    ConnectivityChanged(bool),
    
    // === Синхронизация ===
    
    /// Синхронизация начата (кол-во записей)
    SyncStarted(usize),
    /// Синхронизация завершена (принятые id, Unix timestamp)
    SyncCompleted { ids: Vec<u64>, at: u64 },
    /// Ошибка синхронизации
    SyncFailed(String),
    
    // === Обновление данных ===
    
    /// Обновление завершено
    RefreshCompleted(RefreshTarget),
    
    // === Сообщения жителей ===
    
    /// Сообщение отправлено (заголовок)
    ReportSubmitted(String),
    /// Сеть пропала во время отправки, сообщение уходит в офлайн-очередь
    ReportDeferred { title: String, payload: serde_json::Value },
    
    // === Онбординг ===
    
    /// Подписка на оповещения оформлена (телефон)
    Subscribed(String),
}
