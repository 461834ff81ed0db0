//! Сообщения жителей: модель, фильтры, статистика, форма отправки

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Статус проверки сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Verified,
    False,
    Investigating,
}

impl ReportStatus {
    pub fn all() -> &'static [ReportStatus] {
        &[
            ReportStatus::Pending,
            ReportStatus::Verified,
            ReportStatus::False,
            ReportStatus::Investigating,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Verified => "verified",
            ReportStatus::False => "false",
            ReportStatus::Investigating => "investigating",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

/// Уровень опасности (общий для сообщений, оповещений и прогнозов)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[Severity::Low, Severity::Medium, Severity::High, Severity::Critical]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }

    /// High и Critical считаются критическими для счётчиков
    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

/// Категория сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Flood,
    Landslide,
    Fire,
    Rain,
    Infrastructure,
    Misinformation,
    Other,
}

impl ReportCategory {
    pub fn all() -> &'static [ReportCategory] {
        &[
            ReportCategory::Flood,
            ReportCategory::Landslide,
            ReportCategory::Fire,
            ReportCategory::Rain,
            ReportCategory::Infrastructure,
            ReportCategory::Misinformation,
            ReportCategory::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Flood => "Flooding",
            ReportCategory::Landslide => "Landslide",
            ReportCategory::Fire => "Fire",
            ReportCategory::Rain => "Heavy Rain",
            ReportCategory::Infrastructure => "Infrastructure",
            ReportCategory::Misinformation => "Misinformation",
            ReportCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReportCategory::Flood => "🌊",
            ReportCategory::Landslide => "⛰",
            ReportCategory::Fire => "🔥",
            ReportCategory::Rain => "🌧",
            ReportCategory::Infrastructure => "🏗",
            ReportCategory::Misinformation => "💬",
            ReportCategory::Other => "❔",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reporter {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    pub helpful: u32,
    pub not_helpful: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub confidence: u8,
    pub risk_score: u8,
    pub recommendation: String,
}

/// Сообщение жителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub location: String,
    pub barangay: String,
    /// (широта, долгота)
    pub coordinates: (f64, f64),
    /// Unix timestamp
    pub timestamp: u64,
    pub status: ReportStatus,
    pub severity: Severity,
    pub reporter: Reporter,
    pub votes: Votes,
    pub ai_analysis: Option<AiAnalysis>,
}

/// Фильтр по равенству: всё или одно значение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }
}

/// Отфильтровать сообщения по статусу и опасности (порядок сохраняется)
pub fn filter_reports<'a>(
    reports: &'a [CommunityReport],
    status: Filter<ReportStatus>,
    severity: Filter<Severity>,
) -> Vec<&'a CommunityReport> {
    reports
        .iter()
        .filter(|r| status.matches(&r.status) && severity.matches(&r.severity))
        .collect()
}

/// Отфильтровать сообщения по категории и статусу (мобильная история)
pub fn filter_by_category<'a>(
    reports: &'a [CommunityReport],
    category: Filter<ReportCategory>,
    status: Filter<ReportStatus>,
) -> Vec<&'a CommunityReport> {
    reports
        .iter()
        .filter(|r| category.matches(&r.category) && status.matches(&r.status))
        .collect()
}

/// Сводка по сообщениям
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub unique_reporters: usize,
}

impl ReportStats {
    pub fn from_reports(reports: &[CommunityReport]) -> Self {
        let reporters: HashSet<&str> = reports.iter().map(|r| r.reporter.id.as_str()).collect();

        Self {
            total: reports.len(),
            verified: reports.iter().filter(|r| r.status == ReportStatus::Verified).count(),
            pending: reports.iter().filter(|r| r.status == ReportStatus::Pending).count(),
            unique_reporters: reporters.len(),
        }
    }
}

/// Черновик сообщения из формы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Option<ReportCategory>,
    pub severity: Option<Severity>,
}

impl ReportDraft {
    /// Можно ли отправить: заголовок, описание и категория заполнены
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.category.is_some()
    }

    /// Данные для офлайн-очереди
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title.trim(),
            "description": self.description.trim(),
            "location": self.location.trim(),
            "category": self.category,
            "severity": self.severity,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, status: ReportStatus, severity: Severity, reporter: &str) -> CommunityReport {
        CommunityReport {
            id: id.to_string(),
            title: format!("Report {}", id),
            description: String::new(),
            category: ReportCategory::Flood,
            location: "Highway 101".to_string(),
            barangay: "Central Valley".to_string(),
            coordinates: (14.59, 120.98),
            timestamp: 0,
            status,
            severity,
            reporter: Reporter {
                id: reporter.to_string(),
                name: reporter.to_string(),
                phone: None,
            },
            votes: Votes::default(),
            ai_analysis: None,
        }
    }

    fn sample() -> Vec<CommunityReport> {
        vec![
            report("1", ReportStatus::Verified, Severity::High, "u1"),
            report("2", ReportStatus::Investigating, Severity::Critical, "u2"),
            report("3", ReportStatus::False, Severity::Medium, "u1"),
            report("4", ReportStatus::Verified, Severity::Low, "u3"),
            report("5", ReportStatus::Pending, Severity::High, "u4"),
        ]
    }

    #[test]
    fn test_filter_verified_only() {
        let reports = sample();
        let filtered = filter_reports(&reports, Filter::Only(ReportStatus::Verified), Filter::All);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.status == ReportStatus::Verified));
    }

    #[test]
    fn test_filter_all_returns_input_in_order() {
        let reports = sample();
        let filtered = filter_reports(&reports, Filter::All, Filter::All);

        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_status_and_severity() {
        let reports = sample();
        let filtered = filter_reports(
            &reports,
            Filter::Only(ReportStatus::Verified),
            Filter::Only(Severity::High),
        );

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_filter_no_match() {
        let reports = sample();
        let filtered = filter_reports(
            &reports,
            Filter::Only(ReportStatus::False),
            Filter::Only(Severity::Critical),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let mut reports = sample();
        reports[2].category = ReportCategory::Misinformation;

        let filtered = filter_by_category(&reports, Filter::Only(ReportCategory::Misinformation), Filter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn test_report_stats() {
        let stats = ReportStats::from_reports(&sample());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.verified, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.unique_reporters, 4);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ReportStatus::parse("verified"), Some(ReportStatus::Verified));
        assert_eq!(ReportStatus::parse("Verified"), None);
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("all"), None);
    }

    #[test]
    fn test_severity_ordering_and_urgency() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High.is_urgent());
        assert!(!Severity::Medium.is_urgent());
    }

    #[test]
    fn test_draft_requires_fields() {
        let mut draft = ReportDraft::default();
        assert!(!draft.can_submit());

        draft.title = "Road flooding".to_string();
        draft.description = "   ".to_string();
        draft.category = Some(ReportCategory::Flood);
        assert!(!draft.can_submit());

        draft.description = "Water reaching car bumpers".to_string();
        assert!(draft.can_submit());

        // Локация необязательна
        assert!(draft.location.is_empty());

        draft.clear();
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_draft_payload() {
        let draft = ReportDraft {
            title: " Landslide ".to_string(),
            description: "Road blocked".to_string(),
            location: String::new(),
            category: Some(ReportCategory::Landslide),
            severity: Some(Severity::High),
        };

        let payload = draft.to_payload();
        assert_eq!(payload["title"], "Landslide");
        assert_eq!(payload["category"], "landslide");
        assert_eq!(payload["severity"], "high");
    }
}
