use chrono::{DateTime, Local, NaiveDate, Timelike};

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp as sent by the API.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    raw.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// "Jan 10, 2024"; unparseable input is shown as-is.
pub fn format_display_date(raw: &str) -> String {
    parse_api_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_long_date(raw: &str) -> String {
    parse_api_date(raw)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Inclusive day count between two dates, in either order.
pub fn leave_days(start: &str, end: &str) -> Option<i64> {
    let start = parse_api_date(start)?;
    let end = parse_api_date(end)?;
    Some((end - start).num_days().abs() + 1)
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

pub fn today_display() -> String {
    Local::now().format("%b %-d, %Y").to_string()
}
