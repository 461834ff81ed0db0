//! Прогнозы и модели ИИ
//!
//! Реального вывода моделей нет: прогнозы берутся из демонстрационных данных,
//! "обновление" - фоновая задача с задержкой.

use crate::events::{AppEvent, RefreshTarget};
use crate::reports::Severity;
use crate::task::simulated_delay;
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Длительность имитации обновления
pub const REFRESH_DELAY: Duration = Duration::from_secs(2);

/// Тип угрозы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Flood,
    Landslide,
    Drought,
    Fire,
}

impl HazardType {
    pub fn label(&self) -> &'static str {
        match self {
            HazardType::Flood => "Flood",
            HazardType::Landslide => "Landslide",
            HazardType::Drought => "Drought",
            HazardType::Fire => "Fire",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HazardType::Flood => "🌊",
            HazardType::Landslide => "⛰",
            HazardType::Drought => "☀",
            HazardType::Fire => "🔥",
        }
    }
}

/// Направление изменения риска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl RiskTrend {
    pub fn arrow(&self) -> &'static str {
        match self {
            RiskTrend::Increasing => "↗",
            RiskTrend::Decreasing => "↘",
            RiskTrend::Stable => "→",
        }
    }
}

/// Прогноз ИИ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub hazard: HazardType,
    pub location: String,
    pub barangay: String,
    /// Вероятность, %
    pub probability: u8,
    /// Уверенность модели, %
    pub confidence: u8,
    pub timeframe: String,
    pub factors: Vec<String>,
    pub risk_level: Severity,
    pub trend: RiskTrend,
    /// Unix timestamp
    pub last_update: u64,
}

/// Состояние модели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Active,
    Training,
    Offline,
}

/// Модель прогнозирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionModel {
    pub name: String,
    /// Точность, %
    pub accuracy: f32,
    pub last_training: u64,
    pub status: ModelStatus,
    pub predictions: u32,
}

/// Сводка для вкладки аналитики
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionAnalytics {
    pub total_predictions: u32,
    pub average_accuracy: f32,
    pub active_models: usize,
    pub high_risk_predictions: usize,
}

impl PredictionAnalytics {
    pub fn compute(predictions: &[Prediction], models: &[PredictionModel]) -> Self {
        let average_accuracy = if models.is_empty() {
            0.0
        } else {
            models.iter().map(|m| m.accuracy).sum::<f32>() / models.len() as f32
        };

        Self {
            total_predictions: models.iter().map(|m| m.predictions).sum(),
            average_accuracy,
            active_models: models.iter().filter(|m| m.status == ModelStatus::Active).count(),
            high_risk_predictions: predictions.iter().filter(|p| p.risk_level.is_urgent()).count(),
        }
    }
}

/// Самый свежий прогноз (для "Last update: Nm ago")
pub fn latest_update(predictions: &[Prediction]) -> Option<u64> {
    predictions.iter().map(|p| p.last_update).max()
}

/// Задача имитации обновления данных
pub async fn run_refresh(
    target: RefreshTarget,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    stop_flag: Arc<AtomicBool>,
) {
    tracing::debug!(target = target.label(), "refresh started");

    if simulated_delay(REFRESH_DELAY, &stop_flag).await {
        let _ = event_tx.send(AppEvent::RefreshCompleted(target));
    }
}
