//! Handles settings for the application. Configuration is written in
//! `settings.toml`.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Telegram {
    pub token: String,
}

/// Overrides for the bot validation limits; unset fields keep the defaults.
///
/// `max_amount` is in whole currency units, as users would write it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_amount: Option<i64>,
    pub max_description: Option<usize>,
    pub list_limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub database: Database,
    pub telegram: Telegram,
    #[serde(default)]
    pub limits: Limits,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .build()?;

        settings.try_deserialize()
    }
}
