use chrono_tz::Tz;
use clap::Parser;
use ledger::RecordFilter;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/tally.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding the record sequence.
    pub store_path: String,
    pub log_file: String,
    pub log_level: String,
    /// IANA timezone used to decide what "today" is for a blank form.
    pub timezone: String,
    /// Initial table filter: `all`, `income` or `expense`.
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: "data/records.json".to_string(),
            log_file: "data/tally.log".to_string(),
            log_level: "info".to_string(),
            timezone: "UTC".to_string(),
            filter: "all".to_string(),
        }
    }
}

impl AppConfig {
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .trim()
            .parse::<Tz>()
            .map_err(|err| AppError::Timezone(format!("{}: {err}", self.timezone)))
    }

    pub fn filter(&self) -> Result<RecordFilter> {
        Ok(self.filter.parse()?)
    }
}

#[derive(Debug, Parser)]
#[command(name = "tally", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the records file.
    #[arg(long)]
    store_path: Option<String>,
    /// Override the log file.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Initial filter: all, income or expense.
    #[arg(long)]
    filter: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("TALLY"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(store_path) = args.store_path {
        settings.store_path = store_path;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(filter) = args.filter {
        settings.filter = filter;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use ledger::RecordKind;

    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.timezone().unwrap(), chrono_tz::UTC);
        assert_eq!(config.filter().unwrap(), RecordFilter::All);
    }

    #[test]
    fn rejects_unknown_timezone_and_filter() {
        let config = AppConfig {
            timezone: "Mars/Olympus".to_string(),
            filter: "weekly".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.timezone(), Err(AppError::Timezone(_))));
        assert!(matches!(config.filter(), Err(AppError::Ledger(_))));
    }

    #[test]
    fn parses_named_values() {
        let config = AppConfig {
            timezone: "America/Sao_Paulo".to_string(),
            filter: "expense".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.timezone().unwrap(), chrono_tz::America::Sao_Paulo);
        assert_eq!(
            config.filter().unwrap(),
            RecordFilter::Only(RecordKind::Expense)
        );
    }
}
