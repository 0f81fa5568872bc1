//! 12-hour clock entry for shift times.
//!
//! Operators often write shift times as `2:30 PM`. Logsheets store 24-hour
//! `HH:MM`, so entered values are normalized here before they reach the form.

use super::totals::parse_time_of_day;
use chrono::{NaiveTime, Timelike};

/// Normalizes a time entered as `HH:MM` (24-hour) or `h:MM AM|PM` to `HH:MM`.
///
/// Returns `None` when the input matches neither layout. Blank input is
/// returned as an empty string so an optional field can stay unset.
pub fn normalize_time(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return Some(String::new());
    }

    let upper = input.to_uppercase();
    let (clock, period) = if let Some(clock) = upper.strip_suffix("AM") {
        (clock.trim(), Some(false))
    } else if let Some(clock) = upper.strip_suffix("PM") {
        (clock.trim(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let time = match period {
        None => parse_time_of_day(clock)?,
        Some(pm) => {
            let (hour, minute) = clock.split_once(':')?;
            let hour: u32 = hour.trim().parse().ok()?;
            let minute: u32 = minute.trim().parse().ok()?;
            if !(1..=12).contains(&hour) {
                return None;
            }
            NaiveTime::from_hms_opt(to_24_hour(hour, pm), minute, 0)?
        }
    };

    Some(time.format("%H:%M").to_string())
}

/// 12 AM is midnight, 12 PM is noon.
fn to_24_hour(hour12: u32, pm: bool) -> u32 {
    match (hour12, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    }
}

/// Renders a stored `HH:MM` value as `h:MM AM|PM` for display.
pub fn to_12_hour(value: &str) -> Option<String> {
    let time = parse_time_of_day(value)?;
    let (pm, hour) = time.hour12();
    Some(format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" }))
}
