use clap::Parser;
use dotenvy::dotenv;
use std::{io, path::PathBuf, time::Duration};
use storefront::{
    api::{StoreApi, http::HttpStoreApi, memory::InMemoryStoreApi},
    app::{Command, Storefront, commands::HELP, parse_command},
    config::{self, AppConfig},
    errors::Result,
    ui::TerminalSurface,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    time::{Instant, MissedTickBehavior},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// How often toast lifecycles are advanced.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive storefront client
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the settings file (defaults to ./storefront.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Serve the catalog in-process instead of calling the store API
    #[arg(long)]
    offline: bool,

    /// Catalog TOML for --offline (defaults to the built-in sample catalog)
    #[arg(long, requires = "offline")]
    catalog: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing; stdout belongs to the storefront itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file
    dotenv().ok();

    let args = Args::parse();

    // 3. Load the application configuration
    let app_config = config::load_app_config(args.config.as_deref())
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Pick the store backend and run
    if args.offline {
        let products = match &args.catalog {
            Some(path) => config::load_catalog(path)?,
            None => config::builtin_catalog(),
        };
        info!("Running offline with {} products", products.len());
        run(InMemoryStoreApi::new(products), &app_config).await
    } else {
        let api = HttpStoreApi::new(&app_config.api_base_url, app_config.request_timeout())?;
        info!("Using store API at {}", api.base_url());
        run(api, &app_config).await
    }
}

async fn run<A: StoreApi>(api: A, app_config: &AppConfig) -> Result<()> {
    let surface = TerminalSurface::new(io::stdout());
    let mut app = Storefront::new(api, surface, app_config);
    app.start().await?;
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(Command::Event(event))) => app.handle(event).await?,
                    Ok(Some(Command::Help)) => println!("{HELP}"),
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => {}
                    Err(message) => eprintln!("{message}"),
                }
            }
            _ = ticker.tick() => app.tick(Instant::now())?,
        }
    }

    info!("Storefront closed");
    Ok(())
}
