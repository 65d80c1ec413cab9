//! Log file setup.
//!
//! The terminal belongs to the UI, so logs go to
//! `<data_local_dir>/chatbot/chatbot.log`. Failing to open the file is not
//! fatal; the app runs without logging.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CHATBOT_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("chatbot").join("chatbot.log"))
}

/// Parse filter directives, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log path when logging is on.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("chatbot: logging disabled ({}: {})", path.display(), err);
            return None;
        }
    };

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_layout() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("chatbot/chatbot.log"));
        }
    }

    #[test]
    fn test_build_filter_default() {
        assert_eq!(build_filter(None).to_string(), "info");
        assert_eq!(build_filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn test_build_filter_uses_directives() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_build_filter_invalid_falls_back() {
        assert_eq!(build_filter(Some("chatbot=notalevel")).to_string(), "info");
    }

    #[test]
    fn test_open_log_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chatbot.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        use std::io::Write;
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "line").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
