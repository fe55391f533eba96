//! Prayer timings via the Aladhan API (no API key required).
//!
//! <https://aladhan.com/prayer-times-api>

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::NetworkConfig;

/// The six daily timings the app displays, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// Canonical display order of the timings.
pub const PRAYER_ORDER: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// Returns the display label for this timing.
    pub fn label(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// One day's timings as returned by the API.
///
/// Values are local `HH:MM` strings, sometimes suffixed with a timezone
/// annotation like `"05:31 (EET)"`; see [`format_api_time`].
#[derive(Debug, Clone, Deserialize)]
pub struct PrayerTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

impl PrayerTimings {
    /// Look up the raw time string for a timing.
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}

/// Trim an API time string to `HH:MM` for display; empty input renders as
/// an em dash placeholder.
pub fn format_api_time(raw: &str) -> &str {
    if raw.is_empty() {
        return "\u{2014}";
    }
    raw.get(..5).unwrap_or(raw)
}

// Response envelope: { "code": .., "data": { "timings": { .. } } }

#[derive(Debug, Deserialize)]
struct AladhanResponse {
    data: AladhanData,
}

#[derive(Debug, Deserialize)]
struct AladhanData {
    timings: PrayerTimings,
}

/// API client for fetching prayer timings.
#[derive(Clone, Debug)]
pub struct AladhanClient {
    client: reqwest::Client,
    base_url: String,
    method: u32,
}

impl AladhanClient {
    /// Create a new API client with configurable timeouts.
    ///
    /// `method` selects the calculation convention (2 = ISNA, the app
    /// default).
    pub fn new(base_url: String, method: u32, network_config: &NetworkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(network_config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(network_config.connect_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            method,
        })
    }

    /// Fetch timings for a coordinate on the given date.
    pub async fn timings_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<PrayerTimings> {
        let url = format!(
            "{}/v1/timings/{}",
            self.base_url,
            date.format("%d-%m-%Y")
        );
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("method", self.method.to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Aladhan API")?;

        Self::parse_timings(response).await
    }

    /// Fetch timings for a free-form address on the given date.
    pub async fn timings_by_address(&self, address: &str, date: NaiveDate) -> Result<PrayerTimings> {
        let url = format!(
            "{}/v1/timingsByAddress/{}",
            self.base_url,
            date.format("%d-%m-%Y")
        );
        let method = self.method.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("address", address), ("method", method.as_str())])
            .send()
            .await
            .context("Failed to send request to Aladhan API")?;

        Self::parse_timings(response).await
    }

    async fn parse_timings(response: reqwest::Response) -> Result<PrayerTimings> {
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Aladhan API returned error status: {}", status);
        }

        let data = response
            .json::<AladhanResponse>()
            .await
            .context("Failed to parse Aladhan API response")?;

        Ok(data.data.timings)
    }
}
