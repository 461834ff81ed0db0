//! Разделы интерфейса и приветственный экран

use crate::i18n::Translations;
use crate::utils::title_from_slug;

/// Раздел десктопной раскладки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesktopView {
    #[default]
    Dashboard,
    SensorFeed,
    AiPredictions,
    SatelliteFeed,
    Misinformation,
    CommunityReports,
    FloodWatch,
    HeatwaveAlert,
    Map,
}

impl DesktopView {
    pub fn all() -> &'static [DesktopView] {
        &[
            DesktopView::Dashboard,
            DesktopView::SensorFeed,
            DesktopView::AiPredictions,
            DesktopView::SatelliteFeed,
            DesktopView::Misinformation,
            DesktopView::CommunityReports,
            DesktopView::FloodWatch,
            DesktopView::HeatwaveAlert,
            DesktopView::Map,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DesktopView::Dashboard => "dashboard",
            DesktopView::SensorFeed => "sensor-feed",
            DesktopView::AiPredictions => "ai-predictions",
            DesktopView::SatelliteFeed => "satellite-feed",
            DesktopView::Misinformation => "misinformation",
            DesktopView::CommunityReports => "community-reports",
            DesktopView::FloodWatch => "flood-watch",
            DesktopView::HeatwaveAlert => "heatwave-alert",
            DesktopView::Map => "map",
        }
    }

    /// Есть ли у раздела содержимое (остальные показывают "Coming Soon")
    pub fn is_implemented(&self) -> bool {
        matches!(
            self,
            DesktopView::Dashboard
                | DesktopView::SensorFeed
                | DesktopView::AiPredictions
                | DesktopView::CommunityReports
        )
    }

    /// Заголовок заглушки, полученный из slug
    pub fn placeholder_title(&self) -> String {
        title_from_slug(self.slug())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DesktopView::Dashboard => "📊",
            DesktopView::SensorFeed => "📡",
            DesktopView::AiPredictions => "🧠",
            DesktopView::SatelliteFeed => "🛰",
            DesktopView::Misinformation => "💬",
            DesktopView::CommunityReports => "👥",
            DesktopView::FloodWatch => "🌊",
            DesktopView::HeatwaveAlert => "🌡",
            DesktopView::Map => "🗺",
        }
    }

    pub fn label(&self, t: &Translations) -> &'static str {
        match self {
            DesktopView::Dashboard => t.nav_dashboard,
            DesktopView::SensorFeed => t.nav_sensor_feed,
            DesktopView::AiPredictions => t.nav_ai_predictions,
            DesktopView::SatelliteFeed => t.nav_satellite_feed,
            DesktopView::Misinformation => t.nav_misinformation,
            DesktopView::CommunityReports => t.nav_community_reports,
            DesktopView::FloodWatch => t.nav_flood_watch,
            DesktopView::HeatwaveAlert => t.nav_heatwave_alert,
            DesktopView::Map => t.nav_map,
        }
    }
}

/// Раздел компактной раскладки (нижняя панель)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileView {
    #[default]
    Home,
    Alerts,
    Report,
    Settings,
}

impl MobileView {
    pub fn all() -> &'static [MobileView] {
        &[MobileView::Home, MobileView::Alerts, MobileView::Report, MobileView::Settings]
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MobileView::Home => "🏠",
            MobileView::Alerts => "🔔",
            MobileView::Report => "📝",
            MobileView::Settings => "⚙",
        }
    }

    pub fn label(&self, t: &Translations) -> &'static str {
        match self {
            MobileView::Home => t.nav_home,
            MobileView::Alerts => t.nav_alerts,
            MobileView::Report => t.nav_report,
            MobileView::Settings => t.nav_settings,
        }
    }
}

/// Слайд приветственного экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSlide {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub static ONBOARDING_SLIDES: [OnboardingSlide; 3] = [
    OnboardingSlide {
        icon: "🛡",
        title: "SentinelX",
        subtitle: "Disaster Monitoring & Alert Platform",
        description: "Real-time AI-powered disaster prediction and community safety alerts",
    },
    OnboardingSlide {
        icon: "🧠",
        title: "AI-Powered Predictions",
        subtitle: "Machine Learning & Satellite Data",
        description: "Advanced ML algorithms analyze flood risks, heatwaves, and misinformation patterns",
    },
    OnboardingSlide {
        icon: "👥",
        title: "Community Protection",
        subtitle: "Real-time Alerts & Verification",
        description: "Get instant notifications and report incidents with AI verification",
    },
];

/// Состояние приветственного экрана
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingFlow {
    slide: usize,
    pub phone: String,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.slide
    }

    pub fn current(&self) -> &'static OnboardingSlide {
        &ONBOARDING_SLIDES[self.slide]
    }

    pub fn is_first(&self) -> bool {
        self.slide == 0
    }

    pub fn is_last(&self) -> bool {
        self.slide + 1 == ONBOARDING_SLIDES.len()
    }

    /// Следующий слайд; на последнем ничего не меняется
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.slide += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.slide -= 1;
        true
    }

    /// Перейти к последнему слайду
    pub fn skip(&mut self) {
        self.slide = ONBOARDING_SLIDES.len() - 1;
    }

    /// Номер телефона для подписки (не менее 7 цифр)
    pub fn phone_is_valid(&self) -> bool {
        self.phone.chars().filter(|c| c.is_ascii_digit()).count() >= 7
    }
}
