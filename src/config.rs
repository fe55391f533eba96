use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub network: NetworkConfig,
    pub prayer: PrayerConfig,
    pub sleep: SleepConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PrayerConfig {
    pub api_url: String,
    /// Aladhan calculation method id (2 = ISNA).
    pub method: u32,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.aladhan.com".to_string(),
            method: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SleepConfig {
    pub goal_hours: f64,
    /// Default trailing window for `stats`; 0 disables filtering.
    pub recency_window_days: i64,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            goal_hours: 8.0,
            recency_window_days: 7,
        }
    }
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sunnah-sleep")
        .join("store.json")
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Load .env file (silently ignore if not present)
        let _ = dotenvy::dotenv();

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sunnah-sleep");

        let builder = Config::builder()
            // 1. Load default values
            // Store
            .set_default("store.path", default_store_path().to_string_lossy().to_string())?
            // Network
            .set_default("network.request_timeout_secs", 30)?
            .set_default("network.connect_timeout_secs", 10)?
            // Prayer times
            .set_default("prayer.api_url", "https://api.aladhan.com")?
            .set_default("prayer.method", 2)?
            // Sleep
            .set_default("sleep.goal_hours", 8.0)?
            .set_default("sleep.recency_window_days", 7)?

            // 2. Load from local config file (optional, lowest priority)
            .add_source(File::from(PathBuf::from("config.toml")).required(false))

            // 3. Load from user config directory (optional, overrides local)
            .add_source(File::from(config_dir.join("config.toml")).required(false))

            // 4. Load from Environment variables (SUNNAH__PRAYER__METHOD=...)
            .add_source(Environment::with_prefix("SUNNAH").separator("__"));

        let s = builder.build()?;
        Ok(s.try_deserialize()?)
    }
}
