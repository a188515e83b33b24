mod config;
mod di_container;
mod errors;
mod format_selector;
mod handlers;
mod handlers_utils;
mod interactors;
mod models;
mod router;
mod services;
mod utils;

use config::{get_path, parse_from_fs, Config, ParseError};
use std::io;
use tokio::net::TcpListener;
use tracing::{event, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};
use utils::{on_startup, shutdown_signal};

fn read_config() -> Result<Config, ParseError> {
    let path = get_path();

    match parse_from_fs(&*path) {
        Ok(config) => {
            event!(Level::DEBUG, %path, "Config loaded");
            Ok(config)
        }
        Err(ParseError::IO(err)) if err.kind() == io::ErrorKind::NotFound => {
            event!(Level::WARN, %path, "Config file not found, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err),
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    on_startup(&config.yt_dlp, &config.downloads, &config.static_files).await?;

    let state = di_container::init(&config);
    let app = router::build(state, &config.static_files, &config.cors);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    event!(Level::INFO, %addr, "Server started");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    event!(Level::INFO, "Server stopped");

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("LOGGING_LEVEL"))
        .init();

    let config = match read_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error reading config: {err}");

            std::process::exit(1);
        }
    };

    if let Err(err) = run(config).await {
        event!(Level::ERROR, %err, "Server stopped with error");

        std::process::exit(1);
    }
}
