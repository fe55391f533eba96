//! Sunnah Sleep Library
//!
//! Core calculations and supporting services for the sleep/prayer routine
//! tracker: sleep statistics, clock-time validation, Qibla bearing, prayer
//! timings, and the JSON store behind the CLI.

pub mod alarm;
pub mod config;
pub mod dua;
pub mod prayer;
pub mod qibla;
pub mod stats;
pub mod store;
pub mod traits;
pub mod validation;

// Re-export commonly used types
pub use alarm::{Alarm, minutes_until_trigger, next_trigger_with_clock};
pub use config::AppConfig;
pub use dua::{DUAS, Dua, find_dua};
pub use prayer::{AladhanClient, PRAYER_ORDER, Prayer, PrayerTimings, format_api_time};
pub use qibla::{Octant, bearing_from_coords, octant_label};
pub use stats::{
    SleepEntry, average_hours, duration_hours, filter_recent, filter_recent_with_clock,
    format_duration, minutes_since_midnight,
};
pub use store::{Store, StoreData, StoreError};
pub use traits::{Clock, MockClock, SystemClock};
pub use validation::is_valid_time_format;
