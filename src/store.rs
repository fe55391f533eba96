//! On-disk persistence: one JSON document holding everything the app
//! remembers between runs (sleep log, alarms, goal, favorites, flags).
//!
//! The document is written pretty-printed so users can inspect or hand-edit
//! it. Every field carries a serde default, so files written by older
//! versions (or trimmed by hand) still load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alarm::Alarm;
use crate::stats::SleepEntry;

/// Typed store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read or write store file: {0}")]
    Io(#[from] io::Error),
    #[error("store file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

fn default_goal_hours() -> f64 {
    8.0
}

fn default_notifications_enabled() -> bool {
    true
}

/// Everything persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub sleep_entries: Vec<SleepEntry>,
    #[serde(default)]
    pub alarms: Vec<Alarm>,
    #[serde(default = "default_goal_hours")]
    pub sleep_goal_hours: f64,
    #[serde(default)]
    pub dua_favorites: Vec<String>,
    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            sleep_entries: Vec::new(),
            alarms: Vec::new(),
            sleep_goal_hours: default_goal_hours(),
            dua_favorites: Vec::new(),
            notifications_enabled: default_notifications_enabled(),
        }
    }
}

/// Handle to the JSON store file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    data: StoreData,
}

impl Store {
    /// Open the store at `path`; a missing file yields defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => StoreData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    /// Write the document back to disk, creating parent directories.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.data)?)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ==================== Sleep Entries ====================

    pub fn sleep_entries(&self) -> &[SleepEntry] {
        &self.data.sleep_entries
    }

    pub fn add_sleep_entry(&mut self, entry: SleepEntry) {
        self.data.sleep_entries.push(entry);
    }

    /// Replace the entry at `index`; false if out of range.
    pub fn update_sleep_entry(&mut self, index: usize, entry: SleepEntry) -> bool {
        match self.data.sleep_entries.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    /// Remove and return the entry at `index`, preserving order of the rest.
    pub fn remove_sleep_entry(&mut self, index: usize) -> Option<SleepEntry> {
        if index < self.data.sleep_entries.len() {
            Some(self.data.sleep_entries.remove(index))
        } else {
            None
        }
    }

    // ==================== Alarms ====================

    pub fn alarms(&self) -> &[Alarm] {
        &self.data.alarms
    }

    pub fn add_alarm(&mut self, alarm: Alarm) {
        self.data.alarms.push(alarm);
    }

    /// Remove the alarm with the given id; false if absent.
    pub fn remove_alarm(&mut self, id: &str) -> bool {
        let before = self.data.alarms.len();
        self.data.alarms.retain(|a| a.id != id);
        self.data.alarms.len() != before
    }

    /// Enable or disable the alarm with the given id; false if absent.
    pub fn set_alarm_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.data.alarms.iter_mut().find(|a| a.id == id) {
            Some(alarm) => {
                alarm.enabled = enabled;
                true
            }
            None => false,
        }
    }

    // ==================== Settings ====================

    pub fn sleep_goal_hours(&self) -> f64 {
        self.data.sleep_goal_hours
    }

    /// Set the nightly goal; negative values are clamped to 0.
    pub fn set_sleep_goal_hours(&mut self, hours: f64) {
        self.data.sleep_goal_hours = hours.max(0.0);
    }

    pub fn notifications_enabled(&self) -> bool {
        self.data.notifications_enabled
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.data.notifications_enabled = enabled;
    }

    // ==================== Dua Favorites ====================

    pub fn dua_favorites(&self) -> &[String] {
        &self.data.dua_favorites
    }

    /// Toggle a dua id in the favorites set; returns whether it is now a
    /// favorite.
    pub fn toggle_dua_favorite(&mut self, id: &str) -> bool {
        if let Some(pos) = self.data.dua_favorites.iter().position(|f| f == id) {
            self.data.dua_favorites.remove(pos);
            false
        } else {
            self.data.dua_favorites.push(id.to_string());
            true
        }
    }

    // ==================== Reset ====================

    /// Reset everything to defaults. Callers should also drop any scheduled
    /// reminders derived from the old alarms.
    pub fn clear_all(&mut self) {
        self.data = StoreData::default();
    }
}
