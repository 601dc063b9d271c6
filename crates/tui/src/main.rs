mod app;
mod config;
mod error;
mod logging;
mod ui;

use ledger::{JsonFileStore, Ledger};

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;

    let timezone = config.timezone()?;
    let filter = config.filter()?;
    let ledger = Ledger::open(JsonFileStore::new(&config.store_path))?;
    tracing::info!(
        "starting with {} records from {}",
        ledger.len(),
        config.store_path
    );

    let mut app = app::App::new(ledger, timezone, filter);
    app.run().await?;
    tracing::info!("shutting down");
    Ok(())
}
