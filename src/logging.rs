//! Tracing setup. The terminal belongs to the UI, so events go to a log file
//! in the data directory.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

use crate::constants::{LOG_ENV_VAR, LOG_FILENAME};

static INIT: Once = Once::new();

/// Default filter when `EDUTAINMENT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "edutainment=info";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILENAME)
}

/// Install the global subscriber, appending to `<data_dir>/edutainment.log`.
///
/// Filtering follows `EDUTAINMENT_LOG` (e.g. `EDUTAINMENT_LOG=edutainment=debug`).
/// Only the first call has any effect.
pub fn init(data_dir: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path() {
        let path = log_path(Path::new("/tmp/quiz"));
        assert!(path.ends_with("edutainment.log"));
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("edutainment-log-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        init(&dir).unwrap();
        init(&dir).unwrap();
        tracing::info!("logging test event");
        assert!(log_path(&dir).exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_init_fails_for_missing_dir() {
        let dir = std::env::temp_dir()
            .join(format!("edutainment-missing-{}", uuid::Uuid::new_v4()))
            .join("nested");
        assert!(init(&dir).is_err());
    }
}
