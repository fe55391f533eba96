//! Alarm model and next-trigger computation.
//!
//! Alarms fire daily at a fixed `HH:mm`. The store persists them; this
//! module only answers "when does it ring next". Time parsing reuses the
//! lenient rules from [`crate::stats`], with the same gate: the caller
//! validates the string before an alarm is created.

use chrono::{DateTime, Duration as ChronoDuration, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::stats::minutes_since_midnight;
use crate::traits::Clock;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A daily alarm as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: String,
    pub time: String,
    pub label: String,
    pub enabled: bool,
}

/// Minutes from `now_minutes` (minutes since midnight) until the alarm's
/// next daily firing.
///
/// An alarm time equal to now fires a full day later, mirroring the
/// rollover-on-equal policy of sleep durations.
pub fn minutes_until_trigger(alarm_time: &str, now_minutes: u32) -> u32 {
    let target = minutes_since_midnight(alarm_time) % MINUTES_PER_DAY;
    let now = now_minutes % MINUTES_PER_DAY;
    if target > now {
        target - now
    } else {
        MINUTES_PER_DAY - (now - target)
    }
}

/// The concrete next firing instant in local time.
///
/// Returns None only when the computed wall-clock time cannot be resolved
/// (a DST gap with no valid local representation).
pub fn next_trigger_with_clock<C: Clock>(alarm: &Alarm, clock: &C) -> Option<DateTime<Local>> {
    let now = clock.now_local();
    let now_minutes = minutes_since_midnight(&now.format("%H:%M").to_string());
    let wait = minutes_until_trigger(&alarm.time, now_minutes);

    let target_minutes = minutes_since_midnight(&alarm.time) % MINUTES_PER_DAY;
    let target_date = if target_minutes > now_minutes {
        now.date_naive()
    } else {
        now.date_naive() + ChronoDuration::days(1)
    };

    let naive = target_date.and_hms_opt(target_minutes / 60, target_minutes % 60, 0)?;
    match Local.from_local_datetime(&naive).earliest() {
        Some(dt) => Some(dt),
        // DST gap: fall back to shifting from now by the computed wait.
        None => Some(now + ChronoDuration::minutes(i64::from(wait))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm(time: &str) -> Alarm {
        Alarm {
            id: "a1".to_string(),
            time: time.to_string(),
            label: "Fajr reminder".to_string(),
            enabled: true,
        }
    }

    #[test]
    fn test_trigger_later_today() {
        // Now 06:00, alarm 06:30
        assert_eq!(minutes_until_trigger("06:30", 360), 30);
    }

    #[test]
    fn test_trigger_tomorrow() {
        // Now 07:00, alarm 06:30 -> 23h30m away
        assert_eq!(minutes_until_trigger("06:30", 420), 23 * 60 + 30);
    }

    #[test]
    fn test_trigger_at_now_fires_next_day() {
        assert_eq!(minutes_until_trigger("06:00", 360), MINUTES_PER_DAY);
    }

    #[test]
    fn test_trigger_midnight_alarm() {
        // Now 23:59, alarm 00:00
        assert_eq!(minutes_until_trigger("00:00", 23 * 60 + 59), 1);
    }

    #[test]
    fn test_lenient_time_defaults_to_midnight() {
        // Unparsable alarm time behaves as 00:00; validation happens upstream.
        assert_eq!(
            minutes_until_trigger("garbage", 60),
            minutes_until_trigger("00:00", 60)
        );
    }

    #[test]
    fn test_alarm_serde_round_trip() {
        let original = alarm("05:15");
        let json = serde_json::to_string(&original).unwrap();
        let back: Alarm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
