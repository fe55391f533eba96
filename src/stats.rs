//! Sleep record model, clock-time arithmetic, and aggregate statistics.
//!
//! All functions here are pure and total. Time parsing is deliberately
//! lenient: missing or unparsable tokens default to 0 rather than erroring,
//! because rejection of malformed input is the job of
//! [`crate::validation::is_valid_time_format`] and happens before a record
//! is ever written. Changing the fallback to an error would break callers
//! that rely on that split.

use chrono::Duration as ChronoDuration;
use serde::{Deserialize, Serialize};

use crate::traits::{Clock, SystemClock};

/// One night's sleep as entered by the user.
///
/// `bedtime` and `waketime` are 24-hour `HH:mm` strings; `date` is an
/// optional `YYYY-MM-DD` calendar date. Multiple entries may share or omit
/// a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub bedtime: String,
    pub waketime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Parse `"HH:mm"` (or whitespace-separated) to minutes since midnight.
///
/// Unparsable hour or minute tokens default to 0.
pub fn minutes_since_midnight(time: &str) -> u32 {
    let mut tokens = time.trim().split(|c: char| c == ':' || c.is_whitespace());
    let hour: u32 = tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0);
    let minute: u32 = tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0);
    hour * 60 + minute
}

/// Duration in hours between bedtime and waketime.
///
/// A waketime at or before the bedtime is treated as the following day
/// (bedtime 22:00, waketime 06:00 -> 8.0). Identical times therefore yield
/// a full 24 hours; that is policy, not an accident.
pub fn duration_hours(bedtime: &str, waketime: &str) -> f64 {
    let bed = i64::from(minutes_since_midnight(bedtime));
    let mut wake = i64::from(minutes_since_midnight(waketime));
    if wake <= bed {
        wake += 24 * 60;
    }
    (wake - bed) as f64 / 60.0
}

/// Format an hour count for display: `"8h"` or `"7h 30m"`.
pub fn format_duration(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round() as u32;
    if minutes == 0 {
        format!("{}h", whole as i64)
    } else {
        format!("{}h {}m", whole as i64, minutes)
    }
}

/// Mean sleep duration across entries; 0.0 for an empty slice.
pub fn average_hours(entries: &[SleepEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: f64 = entries
        .iter()
        .map(|e| duration_hours(&e.bedtime, &e.waketime))
        .sum();
    total / entries.len() as f64
}

/// Filter entries to the last `days` days using the system clock.
/// This is a convenience wrapper for the common case.
pub fn filter_recent(entries: &[SleepEntry], days: i64) -> Vec<SleepEntry> {
    filter_recent_with_clock(entries, days, &SystemClock)
}

/// Filter entries to the last `days` days with a custom clock.
///
/// `days <= 0` means no filtering. Undated entries are always kept. Dated
/// entries are kept when their date is on or after `today - days`; since
/// `YYYY-MM-DD` sorts lexicographically in chronological order, a plain
/// string compare suffices. Relative order is preserved.
pub fn filter_recent_with_clock<C: Clock>(
    entries: &[SleepEntry],
    days: i64,
    clock: &C,
) -> Vec<SleepEntry> {
    if days <= 0 {
        return entries.to_vec();
    }

    // A window so large it reaches past the representable date range cannot
    // exclude anything, so treat overflow as "keep everything".
    let Some(cutoff_date) = ChronoDuration::try_days(days)
        .and_then(|window| clock.today_utc().checked_sub_signed(window))
    else {
        return entries.to_vec();
    };
    let cutoff = cutoff_date.format("%Y-%m-%d").to_string();

    entries
        .iter()
        .filter(|e| e.date.as_deref().is_none_or(|d| d >= cutoff.as_str()))
        .cloned()
        .collect()
}
