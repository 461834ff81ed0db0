//! Показания датчиков по барангаям и метеостанции

use crate::reports::Filter;
use serde::{Deserialize, Serialize};

/// Тип датчика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Rainfall,
    WaterLevel,
    SoilMoisture,
    Humidity,
    Temperature,
}

impl SensorType {
    pub fn label(&self) -> &'static str {
        match self {
            SensorType::Rainfall => "Rainfall",
            SensorType::WaterLevel => "Water Level",
            SensorType::SoilMoisture => "Soil Moisture",
            SensorType::Humidity => "Humidity",
            SensorType::Temperature => "Temperature",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SensorType::Rainfall => "💧",
            SensorType::WaterLevel => "📏",
            SensorType::SoilMoisture => "🌱",
            SensorType::Humidity | SensorType::Temperature => "🌡",
        }
    }
}

/// Состояние датчика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Online,
    Offline,
    Warning,
}

/// Направление изменения показаний
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Stable => "→",
        }
    }
}

/// Пороги показаний
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub normal: f64,
    pub warning: f64,
    pub critical: f64,
}

/// Уровень риска по порогам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Normal,
    Warning,
    Critical,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Normal => "normal",
            RiskBand::Warning => "warning",
            RiskBand::Critical => "critical",
        }
    }
}

impl Threshold {
    pub fn classify(&self, value: f64) -> RiskBand {
        if value >= self.critical {
            RiskBand::Critical
        } else if value >= self.warning {
            RiskBand::Warning
        } else {
            RiskBand::Normal
        }
    }
}

/// Показание датчика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: String,
    pub sensor_type: SensorType,
    pub value: f64,
    pub unit: String,
    pub location: String,
    pub barangay: String,
    /// Unix timestamp
    pub timestamp: u64,
    pub status: SensorStatus,
    pub threshold: Threshold,
    pub trend: Trend,
}

impl SensorReading {
    pub fn risk(&self) -> RiskBand {
        self.threshold.classify(self.value)
    }

    /// Доля от критического порога (для прогресс-бара), 0.0..=1.0
    pub fn fill_ratio(&self) -> f32 {
        if self.threshold.critical <= 0.0 {
            return 0.0;
        }
        (self.value / self.threshold.critical).clamp(0.0, 1.0) as f32
    }
}

/// Связь барангая с сетью датчиков
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarangayConnectivity {
    Online,
    Offline,
    Partial,
}

/// Барангай с датчиками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barangay {
    pub name: String,
    pub last_update: u64,
    pub connectivity: BarangayConnectivity,
    pub sensors: Vec<SensorReading>,
}

/// Сводка по датчикам
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorSummary {
    pub total: usize,
    pub online: usize,
    pub warning: usize,
    pub offline: usize,
    pub critical_readings: usize,
}

impl SensorSummary {
    pub fn from_barangays(barangays: &[Barangay]) -> Self {
        let mut summary = Self::default();

        for sensor in barangays.iter().flat_map(|b| b.sensors.iter()) {
            summary.total += 1;
            match sensor.status {
                SensorStatus::Online => summary.online += 1,
                SensorStatus::Warning => summary.warning += 1,
                SensorStatus::Offline => summary.offline += 1,
            }
            if sensor.risk() == RiskBand::Critical {
                summary.critical_readings += 1;
            }
        }

        summary
    }
}

/// Все показания с фильтрами по барангаю и типу (порядок сохраняется)
pub fn filter_readings<'a>(
    barangays: &'a [Barangay],
    barangay: Filter<&str>,
    sensor_type: Filter<SensorType>,
) -> Vec<&'a SensorReading> {
    barangays
        .iter()
        .flat_map(|b| b.sensors.iter())
        .filter(|s| {
            let barangay_ok = match barangay {
                Filter::All => true,
                Filter::Only(name) => s.barangay == name,
            };
            barangay_ok && sensor_type.matches(&s.sensor_type)
        })
        .collect()
}

/// Состояние метеостанции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Online,
    Offline,
    Maintenance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StationReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
    pub wind_direction: u16,
    pub pressure: f64,
}

/// Метеостанция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherStation {
    pub id: String,
    pub location: String,
    pub status: StationStatus,
    pub readings: StationReadings,
    pub last_update: u64,
    pub battery_level: u8,
    pub signal_strength: u8,
}

/// Доля работающих станций в процентах
pub fn station_health(stations: &[WeatherStation]) -> u8 {
    if stations.is_empty() {
        return 0;
    }
    let online = stations.iter().filter(|s| s.status == StationStatus::Online).count();
    (online * 100 / stations.len()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(id: &str, barangay: &str, sensor_type: SensorType, value: f64, status: SensorStatus) -> SensorReading {
        SensorReading {
            id: id.to_string(),
            sensor_type,
            value,
            unit: "mm/hr".to_string(),
            location: "Station".to_string(),
            barangay: barangay.to_string(),
            timestamp: 0,
            status,
            threshold: Threshold { normal: 10.0, warning: 25.0, critical: 40.0 },
            trend: Trend::Up,
        }
    }

    fn barangays() -> Vec<Barangay> {
        vec![
            Barangay {
                name: "Barangay Central Valley".to_string(),
                last_update: 0,
                connectivity: BarangayConnectivity::Online,
                sensors: vec![
                    reading("rain-001", "Central Valley", SensorType::Rainfall, 45.2, SensorStatus::Online),
                    reading("water-001", "Central Valley", SensorType::WaterLevel, 30.0, SensorStatus::Warning),
                ],
            },
            Barangay {
                name: "Barangay Riverside".to_string(),
                last_update: 0,
                connectivity: BarangayConnectivity::Partial,
                sensors: vec![reading("water-002", "Riverside", SensorType::WaterLevel, 5.0, SensorStatus::Offline)],
            },
        ]
    }

    #[test]
    fn test_threshold_classify() {
        let t = Threshold { normal: 10.0, warning: 25.0, critical: 40.0 };
        assert_eq!(t.classify(5.0), RiskBand::Normal);
        assert_eq!(t.classify(25.0), RiskBand::Warning);
        assert_eq!(t.classify(39.9), RiskBand::Warning);
        assert_eq!(t.classify(40.0), RiskBand::Critical);
    }

    #[test]
    fn test_fill_ratio_clamped() {
        let r = reading("x", "b", SensorType::Rainfall, 80.0, SensorStatus::Online);
        assert_eq!(r.fill_ratio(), 1.0);
        let r = reading("x", "b", SensorType::Rainfall, 20.0, SensorStatus::Online);
        assert!((r.fill_ratio() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_summary() {
        let summary = SensorSummary::from_barangays(&barangays());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.online, 1);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.offline, 1);
        assert_eq!(summary.critical_readings, 1);
    }

    #[test]
    fn test_filter_readings() {
        let data = barangays();

        assert_eq!(filter_readings(&data, Filter::All, Filter::All).len(), 3);

        let water = filter_readings(&data, Filter::All, Filter::Only(SensorType::WaterLevel));
        let ids: Vec<&str> = water.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["water-001", "water-002"]);

        let riverside = filter_readings(&data, Filter::Only("Riverside"), Filter::All);
        assert_eq!(riverside.len(), 1);
    }

    #[test]
    fn test_station_health() {
        let station = |status| WeatherStation {
            id: "WS".to_string(),
            location: "Central Valley".to_string(),
            status,
            readings: StationReadings::default(),
            last_update: 0,
            battery_level: 90,
            signal_strength: 80,
        };

        assert_eq!(station_health(&[]), 0);
        assert_eq!(
            station_health(&[station(StationStatus::Online), station(StationStatus::Offline)]),
            50
        );
    }
}
