//! Выбор раскладки по ширине окна
//!
//! Ширина окна меньше `COMPACT_BREAKPOINT` - компактная (мобильная) раскладка,
//! иначе десктопная. Без гистерезиса и задержек: строгое сравнение на каждом
//! наблюдении.

/// Граница компактной раскладки (логические пиксели)
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Класс устройства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    /// Мобильная раскладка
    Compact,
    /// Десктопная раскладка
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Определить класс по ширине окна
    ///
    /// Без окна (`None`) или с некорректной шириной - десктопная раскладка.
    pub fn from_width(width: Option<f32>) -> Self {
        match width {
            Some(w) if w < COMPACT_BREAKPOINT => ViewportClass::Compact,
            _ => ViewportClass::Desktop,
        }
    }

    pub fn is_compact(self) -> bool {
        self == ViewportClass::Compact
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewportClass::Compact => "compact",
            ViewportClass::Desktop => "desktop",
        }
    }
}

/// Отслеживание класса устройства между кадрами
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    class: ViewportClass,
    last_width: Option<f32>,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Пересчитать класс по текущей ширине
    ///
    /// Возвращает `true`, если класс изменился. Одинаковая ширина подряд
    /// никогда не переключает состояние.
    pub fn observe(&mut self, width: Option<f32>) -> bool {
        let class = ViewportClass::from_width(width);
        let changed = class != self.class;

        self.class = class;
        self.last_width = width;

        if changed {
            tracing::debug!(class = class.name(), ?width, "viewport class changed");
        }

        changed
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_compact(&self) -> bool {
        self.class.is_compact()
    }

    pub fn last_width(&self) -> Option<f32> {
        self.last_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_threshold() {
        assert_eq!(ViewportClass::from_width(Some(767.9)), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(Some(768.0)), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(Some(1920.0)), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(Some(320.0)), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(Some(0.0)), ViewportClass::Compact);
    }

    #[test]
    fn test_no_viewport_falls_back_to_desktop() {
        assert_eq!(ViewportClass::from_width(None), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(Some(f32::NAN)), ViewportClass::Desktop);
    }

    #[test]
    fn test_tracker_initial_mount() {
        let mut tracker = ViewportTracker::new();
        assert!(tracker.last_width().is_none());
        assert!(!tracker.is_compact());

        // Первый кадр на узком окне переключает в компактный режим
        assert!(tracker.observe(Some(400.0)));
        assert_eq!(tracker.last_width(), Some(400.0));
        assert!(tracker.is_compact());
    }

    #[test]
    fn test_tracker_idempotent_for_same_width() {
        let mut tracker = ViewportTracker::new();
        tracker.observe(Some(500.0));

        for _ in 0..10 {
            assert!(!tracker.observe(Some(500.0)));
            assert!(tracker.is_compact());
        }
    }

    #[test]
    fn test_tracker_resize_sequence() {
        let mut tracker = ViewportTracker::new();

        assert!(!tracker.observe(Some(1024.0)));
        assert!(tracker.observe(Some(700.0)));
        assert!(!tracker.observe(Some(600.0)));
        assert!(tracker.observe(Some(768.0)));
        assert_eq!(tracker.class(), ViewportClass::Desktop);
        assert_eq!(tracker.last_width(), Some(768.0));
    }
}
