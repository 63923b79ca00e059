use crate::domain::value_objects::Timestamp;
use chrono::{DateTime, Utc};

/// "just now", "5m ago", "3h ago", "2d ago", then a short date.
/// Timestamps in the future count as "just now".
pub fn relative_time(timestamp: Timestamp, now: DateTime<Utc>) -> String {
    let then = timestamp.to_datetime();
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{}h ago", elapsed.num_hours());
    }
    if elapsed.num_days() < 7 {
        return format!("{}d ago", elapsed.num_days());
    }
    then.format("%b %-d, %Y").to_string()
}

/// "March 4, 2025"
pub fn long_date(timestamp: Timestamp) -> String {
    timestamp.to_datetime().format("%B %-d, %Y").to_string()
}

/// "Joined Mar 2025"
pub fn joined_label(timestamp: Timestamp) -> String {
    format!("Joined {}", timestamp.to_datetime().format("%b %Y"))
}

pub fn reply_count_label(count: usize) -> String {
    if count == 1 {
        "1 reply".to_string()
    } else {
        format!("{count} replies")
    }
}

/// First `limit` tags plus how many were left out.
pub fn interest_preview(interests: &[String], limit: usize) -> (Vec<String>, usize) {
    let shown: Vec<String> = interests.iter().take(limit).cloned().collect();
    let hidden = interests.len().saturating_sub(shown.len());
    (shown, hidden)
}
