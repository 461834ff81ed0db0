//! Демонстрационные данные
//!
//! Загружаются один раз при запуске. Времена задаются относительно `now`.

use crate::offline::{OfflineQueue, OfflineRecord, RecordKind};
use crate::predictions::{HazardType, ModelStatus, Prediction, PredictionModel, RiskTrend};
use crate::reports::{AiAnalysis, CommunityReport, ReportCategory, ReportStatus, Reporter, Severity, Votes};
use crate::sensors::{
    Barangay, BarangayConnectivity, SensorReading, SensorStatus, SensorType, StationReadings, StationStatus,
    Threshold, Trend, WeatherStation,
};
use serde_json::json;

const MIN: u64 = 60;
const HOUR: u64 = 60 * MIN;
const DAY: u64 = 24 * HOUR;

/// Общая сводка системы
#[derive(Debug, Clone, PartialEq)]
pub struct SystemStats {
    pub active_threats: u32,
    pub evacuation_zones: u32,
    pub response_teams: u32,
    pub communication_status: &'static str,
    pub satellite_coverage: u8,
    pub data_latency_secs: f32,
    pub system_load: u8,
}

/// Оценка одной угрозы
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatLevel {
    pub level: Severity,
    pub confidence: u8,
}

/// Оценка угроз ИИ
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatAssessment {
    pub flood: ThreatLevel,
    pub landslide: ThreatLevel,
    pub fire: ThreatLevel,
    pub heatwave: ThreatLevel,
    pub last_updated: u64,
}

impl ThreatAssessment {
    /// Пары (название, оценка) для отображения
    pub fn entries(&self) -> [(&'static str, ThreatLevel); 4] {
        [
            ("Flood Risk", self.flood),
            ("Landslide Risk", self.landslide),
            ("Fire Risk", self.fire),
            ("Heatwave Risk", self.heatwave),
        ]
    }
}

/// Событие ленты
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub time: &'static str,
    pub event: &'static str,
    pub severity: Severity,
}

/// Тип активного оповещения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Flood,
    Heat,
    Misinformation,
    Satellite,
}

impl AlertKind {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Flood => "🌊",
            AlertKind::Heat => "🌡",
            AlertKind::Misinformation => "💬",
            AlertKind::Satellite => "🛰",
        }
    }
}

/// Активное оповещение
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAlert {
    pub id: &'static str,
    pub kind: AlertKind,
    pub title: &'static str,
    pub region: &'static str,
    pub risk_score: u8,
    pub severity: Severity,
    pub trend: Trend,
    pub affected: u64,
    pub description: &'static str,
}

/// Количество срочных оповещений (high + critical)
pub fn urgent_alert_count(alerts: &[ActiveAlert]) -> usize {
    alerts.iter().filter(|a| a.severity.is_urgent()).count()
}

/// Сколько людей затронуто всеми оповещениями
pub fn total_affected(alerts: &[ActiveAlert]) -> u64 {
    alerts.iter().map(|a| a.affected).sum()
}

/// Все демонстрационные данные
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub system_stats: SystemStats,
    pub threat_assessment: ThreatAssessment,
    pub timeline: Vec<TimelineEvent>,
    pub alerts: Vec<ActiveAlert>,
    pub weather_stations: Vec<WeatherStation>,
    pub barangays: Vec<Barangay>,
    pub predictions: Vec<Prediction>,
    pub models: Vec<PredictionModel>,
    pub reports: Vec<CommunityReport>,
}

impl Fixtures {
    /// Загрузить данные относительно текущего времени
    pub fn load(now: u64) -> Self {
        Self {
            system_stats: system_stats(),
            threat_assessment: threat_assessment(now),
            timeline: timeline(),
            alerts: alerts(),
            weather_stations: weather_stations(now),
            barangays: barangays(now),
            predictions: predictions(now),
            models: models(now),
            reports: reports(now),
        }
    }
}

fn system_stats() -> SystemStats {
    SystemStats {
        active_threats: 12,
        evacuation_zones: 3,
        response_teams: 8,
        communication_status: "Operational",
        satellite_coverage: 100,
        data_latency_secs: 2.3,
        system_load: 78,
    }
}

fn threat_assessment(now: u64) -> ThreatAssessment {
    ThreatAssessment {
        flood: ThreatLevel { level: Severity::High, confidence: 87 },
        landslide: ThreatLevel { level: Severity::Medium, confidence: 65 },
        fire: ThreatLevel { level: Severity::Low, confidence: 23 },
        heatwave: ThreatLevel { level: Severity::Critical, confidence: 94 },
        last_updated: now.saturating_sub(MIN),
    }
}

fn timeline() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            time: "14:32",
            event: "Flash flood alert issued for Central Valley",
            severity: Severity::High,
        },
        TimelineEvent {
            time: "14:15",
            event: "Heatwave warning updated for Metropolitan Area",
            severity: Severity::Medium,
        },
        TimelineEvent {
            time: "13:58",
            event: "Misinformation detected: False evacuation order",
            severity: Severity::Low,
        },
        TimelineEvent {
            time: "13:45",
            event: "Landslide risk detected in Northern Districts - heavy rain and soil saturation",
            severity: Severity::Critical,
        },
        TimelineEvent {
            time: "13:30",
            event: "Community report verified: Road flooding on Highway 101",
            severity: Severity::Medium,
        },
    ]
}

fn alerts() -> Vec<ActiveAlert> {
    vec![
        ActiveAlert {
            id: "flood-001",
            kind: AlertKind::Flood,
            title: "Satellite Analysis: Flash Flood Risk",
            region: "Barangay Central Valley",
            risk_score: 78,
            severity: Severity::High,
            trend: Trend::Up,
            affected: 12_500,
            description: "Heavy rainfall upstream, soil saturation at 91%",
        },
        ActiveAlert {
            id: "heat-001",
            kind: AlertKind::Heat,
            title: "Heat Stress Alert",
            region: "Metro Area",
            risk_score: 45,
            severity: Severity::Medium,
            trend: Trend::Stable,
            affected: 8_900,
            description: "Temperature 38°C, UV index extreme",
        },
        ActiveAlert {
            id: "misinfo-001",
            kind: AlertKind::Misinformation,
            title: "Misinformation Detected",
            region: "Social Networks",
            risk_score: 23,
            severity: Severity::Low,
            trend: Trend::Down,
            affected: 0,
            description: "3 flagged posts about false evacuation orders",
        },
        ActiveAlert {
            id: "sat-001",
            kind: AlertKind::Satellite,
            title: "Thermal Anomaly",
            region: "Northern Districts",
            risk_score: 89,
            severity: Severity::Critical,
            trend: Trend::Up,
            affected: 25_000,
            description: "Multiple heat sources detected via FIRMS",
        },
    ]
}

fn weather_stations(now: u64) -> Vec<WeatherStation> {
    vec![
        WeatherStation {
            id: "WS-001".to_string(),
            location: "Central Valley".to_string(),
            status: StationStatus::Online,
            readings: StationReadings {
                temperature: 32.5,
                humidity: 85.0,
                rainfall: 45.2,
                wind_speed: 15.0,
                wind_direction: 180,
                pressure: 1013.2,
            },
            last_update: now.saturating_sub(30),
            battery_level: 95,
            signal_strength: 87,
        },
        WeatherStation {
            id: "WS-002".to_string(),
            location: "Riverside".to_string(),
            status: StationStatus::Offline,
            readings: StationReadings::default(),
            last_update: now.saturating_sub(2 * HOUR),
            battery_level: 0,
            signal_strength: 0,
        },
        WeatherStation {
            id: "WS-003".to_string(),
            location: "Northern District".to_string(),
            status: StationStatus::Online,
            readings: StationReadings {
                temperature: 35.2,
                humidity: 72.0,
                rainfall: 12.8,
                wind_speed: 8.0,
                wind_direction: 270,
                pressure: 1010.5,
            },
            last_update: now.saturating_sub(45),
            battery_level: 87,
            signal_strength: 92,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn sensor(
    id: &str,
    sensor_type: SensorType,
    value: f64,
    unit: &str,
    location: &str,
    barangay: &str,
    timestamp: u64,
    status: SensorStatus,
    threshold: (f64, f64, f64),
    trend: Trend,
) -> SensorReading {
    SensorReading {
        id: id.to_string(),
        sensor_type,
        value,
        unit: unit.to_string(),
        location: location.to_string(),
        barangay: barangay.to_string(),
        timestamp,
        status,
        threshold: Threshold {
            normal: threshold.0,
            warning: threshold.1,
            critical: threshold.2,
        },
        trend,
    }
}

fn barangays(now: u64) -> Vec<Barangay> {
    vec![
        Barangay {
            name: "Barangay Central Valley".to_string(),
            last_update: now.saturating_sub(2 * MIN),
            connectivity: BarangayConnectivity::Online,
            sensors: vec![
                sensor("rain-001", SensorType::Rainfall, 45.2, "mm/hr", "Weather Station Alpha", "Central Valley",
                    now.saturating_sub(2 * MIN), SensorStatus::Online, (10.0, 25.0, 40.0), Trend::Up),
                sensor("water-001", SensorType::WaterLevel, 2.3, "m", "River Gauge Station", "Central Valley",
                    now.saturating_sub(MIN), SensorStatus::Warning, (1.0, 2.0, 3.0), Trend::Up),
                sensor("soil-001", SensorType::SoilMoisture, 91.0, "%", "Soil Station Beta", "Central Valley",
                    now.saturating_sub(3 * MIN), SensorStatus::Online, (40.0, 70.0, 85.0), Trend::Up),
            ],
        },
        Barangay {
            name: "Barangay Riverside".to_string(),
            last_update: now.saturating_sub(5 * MIN),
            connectivity: BarangayConnectivity::Partial,
            sensors: vec![
                sensor("water-002", SensorType::WaterLevel, 1.8, "m", "Main River Gauge", "Riverside",
                    now.saturating_sub(5 * MIN), SensorStatus::Warning, (1.0, 2.0, 3.0), Trend::Up),
                sensor("humidity-001", SensorType::Humidity, 85.0, "%", "Weather Station Gamma", "Riverside",
                    now.saturating_sub(4 * MIN), SensorStatus::Online, (60.0, 80.0, 95.0), Trend::Stable),
            ],
        },
        Barangay {
            name: "Barangay Northern District".to_string(),
            last_update: now.saturating_sub(45 * MIN),
            connectivity: BarangayConnectivity::Offline,
            sensors: vec![
                sensor("temp-001", SensorType::Temperature, 35.2, "°C", "Hilltop Station", "Northern District",
                    now.saturating_sub(45 * MIN), SensorStatus::Offline, (30.0, 35.0, 40.0), Trend::Down),
            ],
        },
    ]
}

fn predictions(now: u64) -> Vec<Prediction> {
    let factors = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Prediction {
            id: "pred-001".to_string(),
            hazard: HazardType::Flood,
            location: "Central Valley Region".to_string(),
            barangay: "Central Valley".to_string(),
            probability: 78,
            confidence: 87,
            timeframe: "Next 6 hours".to_string(),
            factors: factors(&["Heavy rainfall", "High soil saturation", "Rising water levels"]),
            risk_level: Severity::High,
            trend: RiskTrend::Increasing,
            last_update: now.saturating_sub(5 * MIN),
        },
        Prediction {
            id: "pred-002".to_string(),
            hazard: HazardType::Landslide,
            location: "Hillside District".to_string(),
            barangay: "Hillside".to_string(),
            probability: 45,
            confidence: 84,
            timeframe: "Next 12 hours".to_string(),
            factors: factors(&["Soil moisture 78%", "Slope instability", "Heavy rainfall"]),
            risk_level: Severity::Medium,
            trend: RiskTrend::Stable,
            last_update: now.saturating_sub(8 * MIN),
        },
        Prediction {
            id: "pred-003".to_string(),
            hazard: HazardType::Fire,
            location: "Northern District".to_string(),
            barangay: "Northern District".to_string(),
            probability: 23,
            confidence: 76,
            timeframe: "Next 24 hours".to_string(),
            factors: factors(&["Low humidity", "High temperature", "Dry vegetation"]),
            risk_level: Severity::Low,
            trend: RiskTrend::Decreasing,
            last_update: now.saturating_sub(15 * MIN),
        },
    ]
}

fn models(now: u64) -> Vec<PredictionModel> {
    vec![
        PredictionModel {
            name: "Flood Prediction Model v2.1".to_string(),
            accuracy: 94.2,
            last_training: now.saturating_sub(2 * DAY),
            status: ModelStatus::Active,
            predictions: 1247,
        },
        PredictionModel {
            name: "Landslide Risk Assessment v1.8".to_string(),
            accuracy: 89.7,
            last_training: now.saturating_sub(5 * DAY),
            status: ModelStatus::Active,
            predictions: 892,
        },
        PredictionModel {
            name: "Fire Risk Model v3.0".to_string(),
            accuracy: 91.3,
            last_training: now.saturating_sub(DAY),
            status: ModelStatus::Training,
            predictions: 634,
        },
    ]
}

fn reports(now: u64) -> Vec<CommunityReport> {
    vec![
        CommunityReport {
            id: "report-001".to_string(),
            title: "Road flooding on Highway 101".to_string(),
            description: "Water level reaching car bumpers. Traffic severely impacted. Multiple vehicles stranded."
                .to_string(),
            category: ReportCategory::Flood,
            location: "Highway 101, Mile Marker 23".to_string(),
            barangay: "Central Valley".to_string(),
            coordinates: (14.5995, 120.9842),
            timestamp: now.saturating_sub(15 * MIN),
            status: ReportStatus::Verified,
            severity: Severity::High,
            reporter: Reporter {
                id: "user-001".to_string(),
                name: "Juan Santos".to_string(),
                phone: Some("+63 912 345 6789".to_string()),
            },
            votes: Votes { helpful: 24, not_helpful: 2 },
            ai_analysis: Some(AiAnalysis {
                confidence: 92,
                risk_score: 85,
                recommendation: "High flood risk confirmed. Evacuation recommended for low-lying areas.".to_string(),
            }),
        },
        CommunityReport {
            id: "report-002".to_string(),
            title: "Extreme heat affecting elderly".to_string(),
            description: "Multiple elderly residents showing signs of heat exhaustion at community center."
                .to_string(),
            category: ReportCategory::Other,
            location: "Sunset Community Center".to_string(),
            barangay: "Riverside".to_string(),
            coordinates: (14.6042, 120.9822),
            timestamp: now.saturating_sub(45 * MIN),
            status: ReportStatus::Investigating,
            severity: Severity::Critical,
            reporter: Reporter {
                id: "user-002".to_string(),
                name: "Maria Garcia".to_string(),
                phone: Some("+63 917 234 5678".to_string()),
            },
            votes: Votes { helpful: 18, not_helpful: 1 },
            ai_analysis: Some(AiAnalysis {
                confidence: 88,
                risk_score: 91,
                recommendation: "Heat emergency protocol activated. Medical assistance dispatched.".to_string(),
            }),
        },
        CommunityReport {
            id: "report-003".to_string(),
            title: "False evacuation notice spreading".to_string(),
            description: "Fake evacuation order being shared on social media for downtown area.".to_string(),
            category: ReportCategory::Misinformation,
            location: "Downtown District".to_string(),
            barangay: "Northern District".to_string(),
            coordinates: (14.6091, 120.9896),
            timestamp: now.saturating_sub(2 * HOUR),
            status: ReportStatus::False,
            severity: Severity::Medium,
            reporter: Reporter {
                id: "user-003".to_string(),
                name: "Pedro Cruz".to_string(),
                phone: Some("+63 918 345 6789".to_string()),
            },
            votes: Votes { helpful: 31, not_helpful: 4 },
            ai_analysis: Some(AiAnalysis {
                confidence: 95,
                risk_score: 40,
                recommendation: "Misinformation detected. Official channels only for evacuation orders.".to_string(),
            }),
        },
        CommunityReport {
            id: "report-004".to_string(),
            title: "Cracks on hillside road".to_string(),
            description: "New cracks appeared after overnight rain, small rocks falling onto the road.".to_string(),
            category: ReportCategory::Landslide,
            location: "Ridge Road, km 4".to_string(),
            barangay: "Hillside".to_string(),
            coordinates: (14.6180, 121.0010),
            timestamp: now.saturating_sub(20 * MIN),
            status: ReportStatus::Pending,
            severity: Severity::High,
            reporter: Reporter {
                id: "user-001".to_string(),
                name: "Juan Santos".to_string(),
                phone: Some("+63 912 345 6789".to_string()),
            },
            votes: Votes { helpful: 5, not_helpful: 0 },
            ai_analysis: None,
        },
    ]
}

/// Демонстрационная офлайн-очередь (новые записи в начале)
pub fn demo_offline_queue(now: u64) -> OfflineQueue {
    let record = |id: u64, kind: RecordKind, payload: serde_json::Value, age: u64, synced: bool| OfflineRecord {
        id,
        kind,
        payload,
        captured_at: now.saturating_sub(age),
        synced,
    };

    OfflineQueue::from_records(vec![
        record(4, RecordKind::CommunityReport, json!({"title": "Clogged drainage on Rizal St."}), 2 * MIN, false),
        record(3, RecordKind::SensorReading, json!({"sensor": "rain-001", "value": 47.9}), 6 * MIN, false),
        record(2, RecordKind::Alert, json!({"alert": "flood-001"}), 11 * MIN, false),
        record(1, RecordKind::Prediction, json!({"prediction": "pred-002"}), 40 * MIN, true),
        record(0, RecordKind::SensorReading, json!({"sensor": "water-001", "value": 2.1}), 55 * MIN, true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let fixtures = Fixtures::load(1_700_000_000);

        assert_eq!(fixtures.alerts.len(), 4);
        assert_eq!(fixtures.reports.len(), 4);
        assert_eq!(fixtures.predictions.len(), 3);
        assert_eq!(fixtures.weather_stations.len(), 3);
        assert!(fixtures.barangays.iter().all(|b| !b.sensors.is_empty()));
    }

    #[test]
    fn test_urgent_alert_count() {
        let alerts = alerts();
        assert_eq!(urgent_alert_count(&alerts), 2);
        assert_eq!(total_affected(&alerts), 46_400);
    }

    #[test]
    fn test_fixture_ids_unique() {
        let fixtures = Fixtures::load(1_700_000_000);
        let mut ids: Vec<&str> = fixtures.reports.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), fixtures.reports.len());
    }

    #[test]
    fn test_demo_queue() {
        let mut queue = demo_offline_queue(10_000);
        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.synced_count(), 2);
        // Новые id продолжают нумерацию
        assert_eq!(queue.enqueue(RecordKind::Alert, json!(null), 10_000), 5);
    }

    #[test]
    fn test_timestamps_do_not_underflow() {
        // Очень маленькое "сейчас" не должно паниковать
        let fixtures = Fixtures::load(10);
        assert!(fixtures.reports.iter().all(|r| r.timestamp <= 10));
    }
}
