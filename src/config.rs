use std::collections::HashMap;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{DashboardError, Result};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const DEFAULT_MAX_EVENTS: u32 = 2;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const QUOTES_URL: &str = "https://quotes.toscrape.com/";
pub const RECIPE_URL: &str = "https://www.themealdb.com/api/json/v1/1/random.php";
pub const MEMES_URL: &str = "https://imgflip.com/tag/memes";
pub const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(DashboardError::Config(format!(
                    "Invalid config line {}: {}",
                    idx + 1,
                    line
                )));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    /// Loads the file named by `CONFIG_FILE`, or an empty config when unset.
    pub fn from_env() -> Result<Self> {
        match env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// File value first, then the process environment.
    pub fn prop(&self, key: &str) -> Option<String> {
        self.get(key)
            .or_else(|| env::var(key).ok())
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct SourceUrls {
    pub quotes: String,
    pub recipe: String,
    pub memes: String,
    pub calendar_api: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            quotes: QUOTES_URL.to_string(),
            recipe: RECIPE_URL.to_string(),
            memes: MEMES_URL.to_string(),
            calendar_api: CALENDAR_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub run_mode: String,
    pub addr: SocketAddr,
    pub timezone: Tz,
    pub http_timeout: Duration,
    pub calendar_token: Option<String>,
    pub calendar_id: String,
    pub max_events: u32,
    pub schedule_file: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub urls: SourceUrls,
}

impl DashboardSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let addr_value = config.prop("DASHBOARD_ADDR").unwrap_or(DEFAULT_ADDR.to_string());
        let addr = addr_value.parse::<SocketAddr>().map_err(|e| {
            DashboardError::Config(format!("DASHBOARD_ADDR `{}`: {}", addr_value, e))
        })?;

        let tz_value = config.prop("TIMEZONE").unwrap_or(DEFAULT_TIMEZONE.to_string());
        let timezone = tz_value.parse::<Tz>().map_err(|e| {
            DashboardError::Config(format!("TIMEZONE `{}`: {}", tz_value, e))
        })?;

        let timeout_secs = parse_number(config, "HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let max_events = parse_number(config, "CALENDAR_MAX_EVENTS", DEFAULT_MAX_EVENTS)?;
        if max_events == 0 {
            return Err(DashboardError::Config(
                "CALENDAR_MAX_EVENTS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            run_mode: config.prop("RUN_MODE").unwrap_or("cli".to_string()),
            addr,
            timezone,
            http_timeout: Duration::from_secs(timeout_secs),
            calendar_token: config.prop("GOOGLE_CALENDAR_TOKEN"),
            calendar_id: config
                .prop("CALENDAR_ID")
                .unwrap_or(DEFAULT_CALENDAR_ID.to_string()),
            max_events,
            schedule_file: config.prop("SCHEDULE_FILE"),
            log_level: config.prop("LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL.to_string()),
            log_dir: config.prop("LOG_DIR"),
            urls: SourceUrls::default(),
        })
    }
}

fn parse_number<T>(config: &AppConfig, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match config.prop(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| DashboardError::Config(format!("{} `{}`: {}", key, value, e))),
        None => Ok(default),
    }
}
