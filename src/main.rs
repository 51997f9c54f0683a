use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use postwise::{
    build_router,
    commands::analyze::{run_analyze, run_extract},
    config::Config,
    extraction::TextExtractor,
    ocr::OcrService,
    AppState,
};

#[derive(Parser)]
#[command(
    name = "postwise",
    about = "Writing suggestions for social-media posts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Analyze PDF/TXT files, or stdin when no files are given
    Analyze {
        files: Vec<PathBuf>,
    },
    /// Print the text extracted from a PDF/TXT file
    Extract {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; everything has a default
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // CLI output goes to stdout, so keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Analyze { files } => {
            let extractor = TextExtractor::new(OcrService::new_with_config(config.ocr_config()));
            run_analyze(&extractor, &files, &mut std::io::stdout().lock())
        }
        Command::Extract { file } => {
            let extractor = TextExtractor::new(OcrService::new_with_config(config.ocr_config()));
            run_extract(&extractor, &file, &mut std::io::stdout().lock())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let address = config.server_address.clone();
    let url = config.public_url();

    let state = Arc::new(AppState::new(config));
    let ocr = state.extractor.ocr();
    if ocr.is_available() {
        info!("Server-side OCR enabled (language: {})", ocr.language());
    } else {
        info!("Server-side OCR unavailable; images must be OCR'd in the browser");
    }
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Server running on {}", address);
    info!("Open: {}", url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
