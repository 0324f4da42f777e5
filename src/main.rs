//! Wiring & DI. Entry point: bootstrap adapters, inject into the service,
//! run the trivia loop. No business logic here.

use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trivia_bot::adapters::catalog::{FileCatalog, RandomCatalog};
use trivia_bot::adapters::imdb::ImdbGateway;
use trivia_bot::adapters::persistence::FlatFileJournal;
use trivia_bot::adapters::twitter::{MockPublisher, TwitterApi};
use trivia_bot::ports::{CatalogPort, JournalPort, PublisherPort, TriviaGateway};
use trivia_bot::usecases::{Scheduler, TriviaService};

#[derive(Parser)]
#[command(
    name = "trivia-bot",
    about = "Random movie trivia, fetched from the catalog and tweeted",
    version
)]
struct Cli {
    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Log composed tweets instead of posting, even with a token set
    #[arg(long)]
    dry_run: bool,

    /// Generate fully random catalog IDs instead of reading the list files
    #[arg(long)]
    full_random: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = trivia_bot::shared::config::AppConfig::load().unwrap_or_default();

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    let data_dir_abs = data_path
        .canonicalize()
        .unwrap_or_else(|_| data_path.clone());
    info!(path = %data_dir_abs.display(), "data directory");

    // --- Catalog: ID list files, or fully random generation ---
    let catalog: Arc<dyn CatalogPort> = if cli.full_random || cfg.full_random_or_default() {
        info!("catalog: fully random ID generation");
        Arc::new(RandomCatalog::new())
    } else {
        info!(
            names = %cfg.names_path_or_default(),
            movies = %cfg.movies_path_or_default(),
            "catalog: ID list files"
        );
        Arc::new(FileCatalog::new(
            cfg.names_path_or_default(),
            cfg.movies_path_or_default(),
        ))
    };

    // --- Page gateway ---
    let gateway: Arc<dyn TriviaGateway> = Arc::new(
        ImdbGateway::new(
            &cfg.imdb_base_url_or_default(),
            cfg.http_timeout_ms_or_default(),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    // --- Publisher: real API when a token is configured, mock otherwise ---
    let publisher: Arc<dyn PublisherPort> = if cfg.is_twitter_configured() && !cli.dry_run {
        info!(url = %cfg.twitter_api_url_or_default(), "tweet publishing enabled");
        Arc::new(TwitterApi::new(
            cfg.twitter_api_url_or_default(),
            cfg.twitter_token().unwrap_or_default(),
        ))
    } else {
        warn!("TRIVIA_BOT_TWITTER_TOKEN not set or --dry-run given, using mock publisher");
        Arc::new(MockPublisher::new())
    };

    let journal: Arc<dyn JournalPort> = Arc::new(FlatFileJournal::new(&data_path));

    let service = Arc::new(TriviaService::new(
        catalog,
        gateway,
        publisher,
        journal,
        cfg.imdb_base_url_or_default(),
    ));

    if cli.once {
        let outcome = service
            .run_once()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        info!(outcome = ?outcome, "single cycle finished");
        return Ok(());
    }

    let scheduler = Scheduler::new(
        service,
        Duration::from_secs(cfg.reload_min_secs_or_default()),
        Duration::from_secs(cfg.reload_max_secs_or_default()),
        Duration::from_secs(cfg.retry_delay_secs_or_default()),
    );
    scheduler
        .run_loop()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
