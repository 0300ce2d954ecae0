//! System clipboard access through the platform's command-line tools.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found (install wl-clipboard, xclip or xsel)")]
    Unavailable,

    #[error("failed to run {tool}: {source}")]
    Io {
        tool: &'static str,
        source: io::Error,
    },

    #[error("{tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: ExitStatus,
    },
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Candidate tools, tried in order. Tools that are not installed are skipped.
const TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = None;
        for &(tool, args) in TOOLS {
            match pipe_to(tool, args, text) {
                Ok(()) => {
                    tracing::debug!(tool, "clipboard updated");
                    return Ok(());
                }
                Err(ClipboardError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    continue;
                }
                Err(e) => {
                    tracing::debug!(tool, error = %e, "clipboard tool failed; trying next");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(ClipboardError::Unavailable))
    }
}

fn pipe_to(tool: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let io_err = |source| ClipboardError::Io { tool, source };

    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_err)?;

    // Reap the child even when the write fails; stdin is closed first so it can exit.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait().map_err(io_err)?;
    if !status.success() {
        return Err(ClipboardError::Failed { tool, status });
    }
    written.map_err(io_err)
}
