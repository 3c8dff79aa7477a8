use crate::errors::{AppError, AppResult};
use crate::models::work_time::{
    DEFAULT_DAILY_WORK_HOURS, DEFAULT_LUNCH_BREAK_HOURS, WorkTimeConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod check;

pub const APP_DIR: &str = "rtimebank";
pub const CONFIG_FILE: &str = "rtimebank.conf";
pub const DATABASE_FILE: &str = "rtimebank.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_owner_id")]
    pub owner_id: String,
    #[serde(default = "default_daily_work_hours")]
    pub daily_work_hours: f64,
    #[serde(default = "default_lunch_break_hours")]
    pub lunch_break_hours: f64,
    /// `false` selects the simplified mode, where lunch punches are never asked for.
    #[serde(default = "default_require_lunch")]
    pub require_lunch: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_owner_id() -> String {
    "default".to_string()
}
fn default_daily_work_hours() -> f64 {
    DEFAULT_DAILY_WORK_HOURS
}
fn default_lunch_break_hours() -> f64 {
    DEFAULT_LUNCH_BREAK_HOURS
}
fn default_require_lunch() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            owner_id: default_owner_id(),
            daily_work_hours: default_daily_work_hours(),
            lunch_break_hours: default_lunch_break_hours(),
            require_lunch: default_require_lunch(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{APP_DIR}"))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Validated work-time parameters for the engine.
    pub fn work_time(&self) -> AppResult<WorkTimeConfig> {
        WorkTimeConfig::new(self.daily_work_hours, self.lunch_break_hours)
    }

    /// Create the config directory and (unless `is_test`) the config file.
    /// Returns the database path the new configuration points to.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
