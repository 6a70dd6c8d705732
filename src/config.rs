use anyhow::{Result, anyhow};
use chrono::{FixedOffset, Weekday};
use std::env;

use crate::services::calendar::Calendar;
use crate::services::presenter::DashboardSettings;
use crate::services::upcoming::DEFAULT_UPCOMING_LIMIT;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When absent the built-in sample shifts are served.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub client_base_url: String,
    pub upcoming_limit: usize,
    pub week_start: Weekday,
    pub utc_offset_minutes: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let week_start = match env::var("WEEK_START") {
            Ok(value) => value
                .parse::<Weekday>()
                .map_err(|_| anyhow!("Invalid WEEK_START: {}", value))?,
            Err(_) => Weekday::Mon,
        };

        let upcoming_limit = match env::var("UPCOMING_LIMIT") {
            Ok(value) => value
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| anyhow!("Invalid UPCOMING_LIMIT: {}", value))?,
            Err(_) => DEFAULT_UPCOMING_LIMIT,
        };

        let utc_offset_minutes = match env::var("UTC_OFFSET_MINUTES") {
            Ok(value) => value
                .parse::<i32>()
                .map_err(|_| anyhow!("Invalid UTC_OFFSET_MINUTES: {}", value))?,
            Err(_) => 0,
        };

        Ok(Config {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            client_base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            upcoming_limit,
            week_start,
            utc_offset_minutes,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Calendar used for the weekly and monthly dashboard statistics.
    pub fn calendar(&self) -> Result<Calendar> {
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or_else(|| anyhow!("Invalid UTC_OFFSET_MINUTES: {}", self.utc_offset_minutes))?;

        Ok(Calendar::new(offset, self.week_start))
    }

    pub fn dashboard_settings(&self) -> Result<DashboardSettings> {
        Ok(DashboardSettings {
            calendar: self.calendar()?,
            upcoming_limit: self.upcoming_limit,
        })
    }
}
