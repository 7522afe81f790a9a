//! Elapsed-time and duration formatting for display

use chrono::{DateTime, Utc};

/// Human-readable elapsed time between `start` and `now`
///
/// "2d 5h" past one day, "3h 12m" past one hour, otherwise "45m".
pub fn elapsed_since(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - start).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a minute count as "Xh Ym" or "Xm"
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_elapsed_minutes_only() {
        let now = Utc::now();
        assert_eq!(elapsed_since(now - Duration::minutes(45), now), "45m");
    }

    #[test]
    fn test_elapsed_hours_and_minutes() {
        let now = Utc::now();
        assert_eq!(elapsed_since(now - Duration::minutes(3 * 60 + 12), now), "3h 12m");
    }

    #[test]
    fn test_elapsed_days_and_hours() {
        let now = Utc::now();
        assert_eq!(elapsed_since(now - Duration::hours(29), now), "1d 5h");
    }

    #[test]
    fn test_elapsed_future_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(elapsed_since(now + Duration::minutes(5), now), "0m");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(135), "2h 15m");
        assert_eq!(format_minutes(0), "0m");
    }
}
