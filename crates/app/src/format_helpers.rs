//! Human-readable Spanish formatting for the dates the backend sends as
//! ISO-8601 strings (`2026-01-20` or `2026-01-20T09:35:00Z`).

use chrono::{NaiveDate, NaiveTime};
use shared_types::NOT_AVAILABLE;

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn parse_date(s: &str) -> Option<NaiveDate> {
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let sep = s.as_bytes().get(10)?;
    if *sep != b'T' && *sep != b' ' {
        return None;
    }
    let hm = s.get(11..16)?;
    NaiveTime::parse_from_str(hm, "%H:%M").ok()
}

/// Format a date as "20 de enero de 2026".
///
/// Unparseable input is returned unchanged.
pub fn format_date_es(date_str: &str) -> String {
    use chrono::Datelike;

    match parse_date(date_str) {
        Some(d) => format!(
            "{} de {} de {}",
            d.day(),
            MONTH_NAMES[d.month0() as usize],
            d.year()
        ),
        None => date_str.to_string(),
    }
}

/// Format a datetime as "20 de enero de 2026, 09:35". Falls back to the
/// date alone when there is no time part.
pub fn format_datetime_es(date_str: &str) -> String {
    let date = format_date_es(date_str);
    match (parse_date(date_str), parse_time(date_str)) {
        (Some(_), Some(t)) => format!("{}, {}", date, t.format("%H:%M")),
        _ => date,
    }
}

/// Optional date for a detail row: `N/A` when absent or blank.
pub fn date_or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_date_es(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn datetime_or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_datetime_es(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}
