use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use ticklist::cli::Cli;
use ticklist::config::Config;
use ticklist::list_store::ItemListStore;
use ticklist::storage::{FileStore, MemoryStore, PersistentStore};
use ticklist::ui::app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let log_path = ticklist::logging::init_tracing(&config.logging)
        .context("Failed to initialise logging")?;
    tracing::info!(log = %log_path.display(), "Starting ticklist");

    let store: Arc<dyn PersistentStore> = if cli.in_memory {
        tracing::info!("Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let path = config.storage.data_file();
        tracing::info!(path = %path.display(), "Using file store");
        Arc::new(FileStore::new(path))
    };

    let list = ItemListStore::new(store, config.storage.key.clone());
    let app = App::new(list);
    ticklist::ui::runtime::run(app, config.ui.tick_rate())
        .await
        .context("Terminal UI failed")?;

    tracing::info!("Exiting");
    Ok(())
}
