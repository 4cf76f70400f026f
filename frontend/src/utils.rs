use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const WEEK: i64 = 604_800;

pub fn youtube_watch_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        urlencoding::encode(video_id)
    )
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.unsigned_abs().to_string();
    let mut result = String::new();
    let len = num_str.len();

    if number < 0 {
        result.push('-');
    }
    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `1.5M`, `2.3K`, or the grouped integer below a thousand.
pub fn format_compact(number: i64) -> String {
    let magnitude = number.unsigned_abs() as f64;
    let sign = if number < 0 { "-" } else { "" };
    // Values that would round up to "1000.0K" move to the M unit.
    let rounded_thousands = (magnitude / 100.0).round() / 10.0;

    if magnitude >= 1_000_000.0 || rounded_thousands >= 1_000.0 {
        format!("{sign}{:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{sign}{:.1}K", magnitude / 1_000.0)
    } else {
        format_number(number)
    }
}

pub fn format_change(delta: i64) -> String {
    if delta >= 0 {
        format!("+{}", format_compact(delta))
    } else {
        format_compact(delta)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_duration(seconds: Option<u64>) -> String {
    let seconds = seconds.unwrap_or(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%B %-d, %Y, %-I:%M %p").to_string()
}

/// Long local date and time for an API timestamp, or the raw text when it
/// does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(date) => format_date_time(&date.with_timezone(&Local)),
        None => raw.to_string(),
    }
}

pub fn format_relative(elapsed_seconds: i64) -> String {
    if elapsed_seconds < MINUTE {
        return "just now".to_string();
    }

    let (amount, unit) = if elapsed_seconds < HOUR {
        (elapsed_seconds / MINUTE, "minute")
    } else if elapsed_seconds < DAY {
        (elapsed_seconds / HOUR, "hour")
    } else if elapsed_seconds < WEEK {
        (elapsed_seconds / DAY, "day")
    } else {
        (elapsed_seconds / WEEK, "week")
    };

    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

pub fn format_time_since(raw: &str, now: DateTime<Utc>) -> Option<String> {
    let date = parse_timestamp(raw)?;
    let elapsed = now.signed_duration_since(date.with_timezone(&Utc));
    Some(format_relative(elapsed.num_seconds()))
}

/// `MM/DD` label for chart axes.
pub fn format_short_date(raw: &str) -> String {
    if let Some(date) = parse_timestamp(raw) {
        return date.with_timezone(&Local).format("%m/%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%m/%d").to_string();
    }
    raw.to_string()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact(1_500_000), "1.5M");
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(2_300), "2.3K");
        assert_eq!(format_compact(999_949), "999.9K");
        assert_eq!(format_compact(999_950), "1.0M");
        assert_eq!(format_compact(-999_950), "-1.0M");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(450), "450");
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(-2_300), "-2.3K");
    }

    #[test]
    fn grouped_numbers() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(-150), "-150");
        assert_eq!(format_number(-1_500), "-1,500");
    }

    #[test]
    fn change_is_always_signed() {
        assert_eq!(format_change(0), "+0");
        assert_eq!(format_change(1_500), "+1.5K");
        assert_eq!(format_change(-300), "-300");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Some(0)), "0:00");
        assert_eq!(format_duration(None), "0:00");
        assert_eq!(format_duration(Some(65)), "1:05");
        assert_eq!(format_duration(Some(599)), "9:59");
    }

    #[test]
    fn relative_time_escalates_at_thresholds() {
        assert_eq!(format_relative(30), "just now");
        assert_eq!(format_relative(-5), "just now");
        assert_eq!(format_relative(60), "1 minute ago");
        assert_eq!(format_relative(3_599), "59 minutes ago");
        assert_eq!(format_relative(3_600), "1 hour ago");
        assert_eq!(format_relative(86_399), "23 hours ago");
        assert_eq!(format_relative(86_400), "1 day ago");
        assert_eq!(format_relative(604_799), "6 days ago");
        assert_eq!(format_relative(604_800), "1 week ago");
        assert_eq!(format_relative(3 * 604_800 + 10), "3 weeks ago");
    }

    #[test]
    fn time_since_parses_rfc3339() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(
            format_time_since("2026-01-05T09:30:00Z", now),
            Some("2 hours ago".to_string())
        );
        assert_eq!(format_time_since("yesterday", now), None);
    }

    #[test]
    fn absolute_date_uses_long_form() {
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_date_time(&date), "January 5, 2026, 3:04 PM");
    }

    #[test]
    fn short_date_handles_plain_dates() {
        assert_eq!(format_short_date("2026-01-05"), "01/05");
        assert_eq!(format_short_date("week 3"), "week 3");
    }

    #[test]
    fn watch_url_encodes_id() {
        assert_eq!(
            youtube_watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
