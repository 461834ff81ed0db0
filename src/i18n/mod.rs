//! Модуль интернационализации (i18n)
//! 
//! Поддерживаемые языки: английский, филиппинский

mod translations;

use serde::{Deserialize, Serialize};

/// Поддерживаемые языки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Filipino,
}

impl Language {
    /// Название языка на этом языке
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Filipino => "Filipino",
        }
    }
    
    /// Флаг/эмодзи для языка
    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            Language::Filipino => "🇵🇭",
        }
    }
    
    /// Короткий код языка
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Filipino => "fil",
        }
    }
    
    /// Все доступные языки
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Filipino]
    }
}

/// Структура с переводами всех строк интерфейса
#[derive(Debug, Clone)]
pub struct Translations {
    // === Главное меню ===
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub nav_dashboard: &'static str,
    pub nav_sensor_feed: &'static str,
    pub nav_ai_predictions: &'static str,
    pub nav_satellite_feed: &'static str,
    pub nav_misinformation: &'static str,
    pub nav_community_reports: &'static str,
    pub nav_flood_watch: &'static str,
    pub nav_heatwave_alert: &'static str,
    pub nav_map: &'static str,
    pub nav_home: &'static str,
    pub nav_alerts: &'static str,
    pub nav_report: &'static str,
    pub nav_settings: &'static str,
    pub coming_soon: &'static str,
    pub coming_soon_hint: &'static str,
    
    // === Сеть и очередь ===
    pub online: &'static str,
    pub offline_mode: &'static str,
    pub pending: &'static str,
    pub last_sync: &'static str,
    pub sync_when_restored: &'static str,
    pub sync_now: &'static str,
    pub syncing: &'static str,
    pub pending_sync: &'static str,
    pub recently_synced: &'static str,
    pub more_items: &'static str,
    pub simulate_offline: &'static str,
    
    // === Панель ===
    pub active_threats: &'static str,
    pub evacuation_zones: &'static str,
    pub response_teams: &'static str,
    pub system_load: &'static str,
    pub threat_assessment: &'static str,
    pub confidence: &'static str,
    pub last_updated: &'static str,
    pub weather_stations: &'static str,
    pub system_status: &'static str,
    pub timeline: &'static str,
    
    // === Датчики ===
    pub sensors_title: &'static str,
    pub sensors_subtitle: &'static str,
    pub live_data: &'static str,
    pub refresh: &'static str,
    pub refreshing: &'static str,
    pub tab_live_feed: &'static str,
    pub tab_sensor_status: &'static str,
    pub tab_connectivity: &'static str,
    pub sensors_count: &'static str,
    
    // === Прогнозы ===
    pub predictions_title: &'static str,
    pub predictions_subtitle: &'static str,
    pub tab_active_predictions: &'static str,
    pub tab_ai_models: &'static str,
    pub tab_analytics: &'static str,
    pub probability: &'static str,
    pub timeframe: &'static str,
    pub risk_factors: &'static str,
    pub accuracy: &'static str,
    pub model_predictions: &'static str,
    
    // === Сообщения жителей ===
    pub reports_title: &'static str,
    pub reports_subtitle: &'static str,
    pub status_filter: &'static str,
    pub severity_filter: &'static str,
    pub all: &'static str,
    pub total_reports: &'static str,
    pub verified: &'static str,
    pub pending_review: &'static str,
    pub unique_reporters: &'static str,
    pub helpful: &'static str,
    pub not_helpful: &'static str,
    pub ai_analysis: &'static str,
    pub no_reports: &'static str,
    
    // === Форма сообщения ===
    pub report_title_label: &'static str,
    pub report_description_label: &'static str,
    pub report_location_label: &'static str,
    pub report_category_label: &'static str,
    pub submit_report: &'static str,
    pub submitting: &'static str,
    pub report_queued_offline: &'static str,
    pub report_submitted: &'static str,
    
    // === Настройки ===
    pub settings_title: &'static str,
    pub push_notifications: &'static str,
    pub sound_alerts: &'static str,
    pub dark_mode: &'static str,
    pub auto_sync: &'static str,
    pub auto_sync_tooltip: &'static str,
    pub language: &'static str,
    
    // === Приветствие ===
    pub welcome_next: &'static str,
    pub welcome_back: &'static str,
    pub welcome_skip: &'static str,
    pub get_started: &'static str,
    pub phone_number: &'static str,
    pub subscribe: &'static str,
    pub subscribed: &'static str,
    
    // === Общее ===
    pub status: &'static str,
    pub log: &'static str,
    pub clear: &'static str,
    pub cancel: &'static str,
    pub log_empty: &'static str,
}

impl Translations {
    /// Получить переводы для указанного языка
    pub fn for_language(lang: Language) -> &'static Translations {
        match lang {
            Language::English => &translations::EN,
            Language::Filipino => &translations::FIL,
        }
    }
}

/// Глобальный доступ к текущему языку (для удобства)
pub fn t(lang: Language) -> &'static Translations {
    Translations::for_language(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_default_language() {
        assert_eq!(Language::default(), Language::English);
    }
    
    #[test]
    fn test_all_languages_have_translations() {
        for lang in Language::all() {
            let tr = t(*lang);
            assert!(!tr.app_title.is_empty());
            assert!(!tr.coming_soon.is_empty());
            assert!(!tr.sync_now.is_empty());
        }
    }
    
    #[test]
    fn test_language_codes_unique() {
        let codes: Vec<_> = Language::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "fil"]);
    }
    
    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Filipino).unwrap(), "\"filipino\"");
        let lang: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
