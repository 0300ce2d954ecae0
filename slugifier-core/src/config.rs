//! Startup configuration for slugifier.
//!
//! Resolution order: **env var > `<config dir>/config` file > hardcoded default**.
//!
//! ```text
//! Field        Env Var                  Config Key    Default
//! ──────────── ──────────────────────── ───────────── ───────────────────────────
//! separator    SLUGIFIER_SEPARATOR      separator     "-"
//! limit        SLUGIFIER_LIMIT          limit         60 (raised to at least 10)
//! spinner      SLUGIFIER_SPINNER_MS     spinner_ms    300ms
//! confirm      SLUGIFIER_CONFIRM_MS     confirm_ms    1000ms
//! config_dir   SLUGIFIER_DIR            —             $XDG_CONFIG_HOME/slugifier
//! ```
//!
//! The file is only ever read. Values go through the same coercion as input
//! typed into the form, so a bad separator or limit quietly becomes the default.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use thiserror::Error;

use crate::feedback::{DEFAULT_CONFIRM, DEFAULT_SPINNER};
use crate::params::{
    clamp_limit, leading_integer, parse_limit, Separator, LIMIT_DEFAULT, LIMIT_MIN,
};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve XDG base directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Resolve the config directory: `$SLUGIFIER_DIR`, else `$XDG_CONFIG_HOME/slugifier`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = env::var("SLUGIFIER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("slugifier")?;
    Ok(xdg_dirs.get_config_home().join("slugifier"))
}

/// Settings the form and CLI start from.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the config file is read from.
    pub config_dir: PathBuf,
    /// Initial separator (`SLUGIFIER_SEPARATOR`; default `-`).
    pub separator: Separator,
    /// Initial limit, already clamped (`SLUGIFIER_LIMIT`; default 60).
    pub limit: i64,
    /// Spinner phase of the copy feedback (`SLUGIFIER_SPINNER_MS`; default 300ms).
    pub spinner: Duration,
    /// Check-mark phase of the copy feedback (`SLUGIFIER_CONFIRM_MS`; default 1000ms).
    pub confirm: Duration,
}

impl Config {
    /// Load config from env vars, the config file, and hardcoded defaults.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(config_dir, |k| env::var(k).ok())
    }

    fn load_with_env(
        config_dir: &Path,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::defaults(config_dir);

        let config_file = config_dir.join(CONFIG_FILE);
        if config_file.exists() {
            parse_config_file(&config_file, |key, value| {
                cfg.apply_entry(key, value);
            })?;
        }

        cfg.apply_env_overrides(get_env);
        cfg.limit = clamp_limit(cfg.limit);
        Ok(cfg)
    }

    pub fn defaults(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            separator: Separator::default(),
            limit: LIMIT_DEFAULT,
            spinner: DEFAULT_SPINNER,
            confirm: DEFAULT_CONFIRM,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn apply_entry(&mut self, key: &str, value: &str) {
        match key {
            "separator" => self.separator = Separator::coerce(value),
            "limit" => self.limit = parse_limit(value),
            "spinner_ms" => {
                if let Ok(n) = value.parse::<u64>() {
                    self.spinner = Duration::from_millis(n);
                }
            }
            "confirm_ms" => {
                if let Ok(n) = value.parse::<u64>() {
                    self.confirm = Duration::from_millis(n);
                }
            }
            _ => tracing::debug!(key, "ignoring unknown config key"),
        }
    }

    fn apply_env_overrides(&mut self, get_env: impl Fn(&str) -> Option<String>) {
        for (var, key) in [
            ("SLUGIFIER_SEPARATOR", "separator"),
            ("SLUGIFIER_LIMIT", "limit"),
            ("SLUGIFIER_SPINNER_MS", "spinner_ms"),
            ("SLUGIFIER_CONFIRM_MS", "confirm_ms"),
        ] {
            if let Some(v) = get_env(var) {
                self.apply_entry(key, &v);
            }
        }
    }
}

/// Parse a `key=value` config file, calling `f` for each entry.
///
/// Lines starting with `#` and empty lines are skipped. Surrounding quotes on
/// values are dropped.
fn parse_config_file(path: &Path, mut f: impl FnMut(&str, &str)) -> Result<(), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            let v = v.trim().trim_matches('"').trim_matches('\'');
            f(k.trim(), v);
        }
    }
    Ok(())
}

/// The set of recognized config file keys.
pub const KNOWN_KEYS: &[&str] = &["separator", "limit", "spinner_ms", "confirm_ms"];

/// Validation status for a single config file entry.
#[derive(Debug, PartialEq)]
pub enum ConfigEntryStatus {
    Ok,
    /// The value cannot be used; the default applies instead.
    InvalidValue { note: String },
    /// The value parses but will be adjusted.
    OutOfRange { note: String },
    /// Key is not recognized. May include the closest known key.
    UnknownKey { suggestion: Option<String> },
}

#[derive(Debug)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub status: ConfigEntryStatus,
}

/// Parse and validate all entries in the config file at `path`.
pub fn validate_config_file(path: &Path) -> Result<Vec<ConfigEntry>, ConfigError> {
    let mut entries = Vec::new();
    parse_config_file(path, |key, value| {
        entries.push(ConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
            status: validate_config_entry(key, value),
        });
    })?;
    Ok(entries)
}

fn validate_config_entry(key: &str, value: &str) -> ConfigEntryStatus {
    match key {
        "separator" => {
            if Separator::ALL.iter().any(|s| value == s.to_string()) {
                ConfigEntryStatus::Ok
            } else {
                ConfigEntryStatus::InvalidValue {
                    note: format!("expected \"-\" or \"_\"; using \"{}\"", Separator::default()),
                }
            }
        }
        // Same reading as `parse_limit`, so "12abc" validates as 12.
        "limit" => match leading_integer(value) {
            Some(0) | None => ConfigEntryStatus::InvalidValue {
                note: format!("expected a positive integer; using {LIMIT_DEFAULT}"),
            },
            Some(n) if n < LIMIT_MIN => ConfigEntryStatus::OutOfRange {
                note: format!("will be raised to {LIMIT_MIN}"),
            },
            Some(_) => ConfigEntryStatus::Ok,
        },
        "spinner_ms" | "confirm_ms" => {
            if value.parse::<u64>().is_ok() {
                ConfigEntryStatus::Ok
            } else {
                ConfigEntryStatus::InvalidValue {
                    note: "expected a whole number of milliseconds".to_string(),
                }
            }
        }
        _ => ConfigEntryStatus::UnknownKey {
            suggestion: closest_known_key(key),
        },
    }
}

/// Return the closest known config key to `input` by Levenshtein distance,
/// or `None` if no key is within edit-distance 3.
fn closest_known_key(input: &str) -> Option<String> {
    const MAX_DISTANCE: usize = 3;
    KNOWN_KEYS
        .iter()
        .map(|k| (*k, levenshtein(input, k)))
        .filter(|(_, d)| *d <= MAX_DISTANCE)
        .min_by_key(|(_, d)| *d)
        .map(|(k, _)| k.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = b.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
