use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableConfig {
    /// Заголовок страницы с таблицей
    pub title: String,
    /// Текст вместо таблицы, когда ни одна строка не прошла фильтр
    pub empty_message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Уровень логирования; нераспознанное значение даёт Info
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[table]
title = "Todos"
empty_message = "No results found"

[logging]
level = "debug"
"#;

static DEFAULT: Lazy<Config> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).expect("embedded default config must be valid TOML")
});

/// Load configuration.
///
/// Uses the override document when one is given, otherwise the embedded
/// default config.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<Config> {
    match overrides {
        Some(contents) => {
            log::info!("Loading config from override");
            let config: Config =
                toml::from_str(contents).context("Failed to parse config override")?;
            Ok(config)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(default_config().clone())
        }
    }
}

pub fn default_config() -> &'static Config {
    &DEFAULT
}
