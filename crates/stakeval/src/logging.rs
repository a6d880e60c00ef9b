use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log size cap checked at startup (1 MB)
const MAX_LOG_SIZE: u64 = 1024 * 1024;

/// Start the log over if it has grown past `max_size`.
///
/// A session writes a handful of info/warn lines, so a file this large is
/// all stale sessions; it is simply truncated rather than tail-spliced.
fn reset_oversized_log(log_path: &Path, max_size: u64) -> std::io::Result<bool> {
    match fs::metadata(log_path) {
        Ok(metadata) if metadata.len() > max_size => {
            File::create(log_path)?;
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Initialize logging to `{data_dir}/stakeval.log`.
///
/// Entries append within a session; an oversized log is started over at
/// launch. The log level can be controlled via the `level` parameter or the
/// `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("stakeval.log");

    if let Err(e) = reset_oversized_log(&log_path, MAX_LOG_SIZE) {
        eprintln!("Warning: Failed to check log file size: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("stakeval={level},stakeval_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "stakeval logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_small_log_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stakeval.log");
        fs::write(&path, b"one line\n").unwrap();

        assert!(!reset_oversized_log(&path, 64).unwrap());
        assert_eq!(fs::read(&path).unwrap(), b"one line\n");
    }

    #[test]
    fn test_oversized_log_started_over() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stakeval.log");
        let mut file = File::create(&path).unwrap();
        file.write_all(&[b'x'; 128]).unwrap();
        drop(file);

        assert!(reset_oversized_log(&path, 64).unwrap());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stakeval.log");

        assert!(!reset_oversized_log(&path, 64).unwrap());
        assert!(!path.exists());
    }
}
