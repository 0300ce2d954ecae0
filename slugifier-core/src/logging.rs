//! Logging init: append to a file (the TUI owns the terminal), or fall back
//! to stderr for one-shot commands.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive, e.g. `SLUGIFIER_LOG=trace`.
pub const LOG_ENV: &str = "SLUGIFIER_LOG";

const DEFAULT_FILTER: &str = "info,slugifier=debug,slugifier_core=debug";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Where the log file lives: `$SLUGIFIER_DIR/slugifier.log`, else
/// `$XDG_STATE_HOME/slugifier/slugifier.log`.
pub fn log_file_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SLUGIFIER_DIR") {
        return Ok(PathBuf::from(dir).join("slugifier.log"));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("slugifier")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("slugifier")
        .join("slugifier.log"))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize structured logging to the log file.
/// On failure (e.g. log dir unwritable), returns Err so the caller can decide
/// whether to fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let log_file_path = log_file_path()?;
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("failed to open log file {}", log_file_path.display()))?;

    let writer = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("slugifier logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Initialize logging to stderr only. Quieter default than the file logger so
/// one-shot commands keep their output clean.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_or_stderr_writes_to_file() {
        use std::io::{Read, Write};
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.log");
        let file = fs::File::create(&path).unwrap();
        let mk = FileMakeWriter(file);
        let mut w = mk.make_writer();
        w.write_all(b"hello\n").unwrap();
        w.flush().unwrap();

        let mut s = String::new();
        fs::File::open(&path).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "hello\n");
    }
}
