use std::path::PathBuf;

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "RESONA_LOG";
const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "resona", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

/// Routes `tracing` output into a log file under the platform data
/// directory. Stdout belongs to the terminal UI, so nothing is ever written
/// there. Filtering honours `RESONA_LOG` first, then `RUST_LOG`, and
/// defaults to `info` for this crate.
pub fn initialize_logging() -> Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));
    let filter = tracing_subscriber::EnvFilter::try_new(directives)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
