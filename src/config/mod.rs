use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Time zone used to bucket timestamps into days and meal periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Utc,
}

impl FromStr for TimeZoneSetting {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            other => Err(AppError::InvalidTimeZone(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_meals")]
    pub default_meals: i64,
    #[serde(default)]
    pub default_munch_balance: Decimal,
    #[serde(default)]
    pub timezone: TimeZoneSetting,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_meals() -> i64 {
    80
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_meals: default_meals(),
            default_munch_balance: Decimal::ZERO,
            timezone: TimeZoneSetting::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.mealswipe`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mealswipe")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mealswipe.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("mealswipe.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();

        if cfg.default_meals < 0 {
            return Err(AppError::Config(format!(
                "default_meals must not be negative (got {})",
                cfg.default_meals
            )));
        }

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Create the config directory and file, returning the database path to use.
    ///
    /// `custom_db` is taken as given (after `~/` expansion), the same way the
    /// global `--db` override is. With `is_test` the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            tracing::info!("Wrote config file {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
