use crate::core::validator::Policy;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Minutes of tolerance before a check-in is late / check-out early.
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: i32,
    /// Minutes outside [start, end] before an event is flagged implausible.
    #[serde(default = "default_plausibility_buffer")]
    pub plausibility_buffer: i32,
    /// How many calendar days ahead reminders are computed.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u64,
}

fn default_grace_minutes() -> i32 {
    15
}
fn default_plausibility_buffer() -> i32 {
    120
}
fn default_horizon_days() -> u64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            grace_minutes: default_grace_minutes(),
            plausibility_buffer: default_plausibility_buffer(),
            horizon_days: default_horizon_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".shiftlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Write the configuration to disk, creating the directory first.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Validate the knobs a user may have hand-edited.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.grace_minutes < 0 {
            issues.push("grace_minutes must be >= 0".to_string());
        }
        if self.plausibility_buffer < 0 {
            issues.push("plausibility_buffer must be >= 0".to_string());
        }
        if self.horizon_days == 0 {
            issues.push("horizon_days must be >= 1".to_string());
        }
        if self.database.trim().is_empty() {
            issues.push("database path is empty".to_string());
        }
        issues
    }

    pub fn policy(&self) -> Policy {
        Policy {
            grace_minutes: self.grace_minutes,
            plausibility_buffer: self.plausibility_buffer,
        }
    }
}
