//! Вспомогательные утилиты

use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MIN;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Безопасно обрезает строку до max_chars символов (не байт!)
/// Если строка длиннее - показывает начало и "..."
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let keep = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(keep).collect::<String>())
    }
}

/// Текущий Unix timestamp (секунды)
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Относительное время: "Just now", "5m ago", "3h ago", "2d ago"
pub fn format_time_ago(then: u64, now: u64) -> String {
    let elapsed = now.saturating_sub(then);

    if elapsed < SECS_PER_MIN {
        "Just now".to_string()
    } else if elapsed < SECS_PER_HOUR {
        format!("{}m ago", elapsed / SECS_PER_MIN)
    } else if elapsed < SECS_PER_DAY {
        format!("{}h ago", elapsed / SECS_PER_HOUR)
    } else {
        format!("{}d ago", elapsed / SECS_PER_DAY)
    }
}

/// Заголовок из slug раздела: "flood-watch" -> "Flood Watch"
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Число с разделителями тысяч: 12500 -> "12,500"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
