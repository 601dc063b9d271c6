use std::{fs, path::Path, sync::Mutex};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Sends `tracing` output to the configured log file; the terminal belongs to
/// the UI.
pub fn init(config: &AppConfig) -> Result<()> {
    let path = Path::new(&config.log_file);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},ledger={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
