// src/aggregate/dates.rs
use chrono::NaiveDate;

/// Formats tried in order; day-first forms come before ISO so an ambiguous
/// "03/04/2025" reads as 3 April, matching how the sheets are filled in.
const FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

/// Tolerant parse of a sheet cell into a date, day-first preference.
/// None on failure; callers skip the row rather than failing the view.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let s = s.trim().trim_matches('"');
    if s.is_empty() {
        return None;
    }
    for fmt in FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Cells sometimes carry a time component; retry on the date prefix.
    let date_part = s.split_whitespace().next()?;
    if date_part != s {
        for fmt in FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(date_part, fmt) {
                return Some(d);
            }
        }
    }
    None
}
