//! Log setup.
//!
//! The terminal belongs to the UI, so logs go to a file in the data
//! directory. `TICKLIST_LOG` takes precedence over `logging.level`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use ticklist_core::Config;

/// Install the global subscriber and return the log file path.
pub fn init(config: &Config) -> io::Result<PathBuf> {
    let dir = config.storage.data_path();
    fs::create_dir_all(&dir)?;

    let path = dir.join(&config.logging.file);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env("TICKLIST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
