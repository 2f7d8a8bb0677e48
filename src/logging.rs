use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

pub const LOG_FILTER_ENV: &str = "SUGGEST_BOX_LOG";
pub const LOG_FILE_ENV: &str = "SUGGEST_BOX_LOG_FILE";

/// The terminal is in raw mode while the demo runs, so logs only go to the
/// file named by `SUGGEST_BOX_LOG_FILE`. Returns whether a subscriber was
/// installed.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .is_ok();
    Ok(installed)
}
