use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use slugifier_core::{
    config::{default_config_dir, validate_config_file, Config, ConfigEntryStatus},
    logging, normalize,
    params::{clamp_limit, effective_limit, parse_limit},
    Separator,
};
use std::io;

use crate::tui;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_HASH: &str = env!("CARGO_GIT_SHA");

#[derive(Parser)]
#[command(
    name = "slugifier",
    version,
    about = "Turn any text into a URL-safe slug",
    long_about = "slugifier lowercases, transliterates and joins words with a separator, producing a URL-safe slug.\n\nRun with no arguments to launch the interactive form."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive form (default when no args given)
    Tui,

    /// Print the slug for a piece of text
    Slug {
        /// Text to convert; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,

        /// Word separator: "-" or "_" (anything else falls back to "-")
        #[arg(short, long)]
        separator: Option<String>,

        /// Maximum slug length (at least 10; non-numeric falls back to 60)
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<String>,

        /// Print a JSON object with the inputs and the slug
        #[arg(long)]
        json: bool,
    },

    /// Show effective settings and check the config file
    Config,

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Print version
    Version,
}

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if logging::init_logging().is_err() && !interactive {
        // The form owns the terminal, so it runs without logs instead.
        logging::init_logging_stderr();
    }

    match cli.command {
        None | Some(Commands::Tui) => tui::run_tui(&load_config()?),
        Some(Commands::Slug {
            text,
            separator,
            limit,
            json,
        }) => cmd_slug(
            &text.join(" "),
            separator.as_deref(),
            limit.as_deref(),
            json,
        ),
        Some(Commands::Config) => cmd_config(),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "slugifier", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Version) => {
            println!("slugifier {VERSION} ({GIT_HASH})");
            Ok(())
        }
    }
}

fn load_config() -> Result<Config> {
    let dir = default_config_dir().context("could not locate config directory")?;
    let config = Config::load(&dir)?;
    tracing::debug!(?config, "config loaded");
    Ok(config)
}

#[derive(Serialize)]
struct SlugReport<'a> {
    text: &'a str,
    slug: &'a str,
    separator: char,
    limit: i64,
}

fn cmd_slug(text: &str, separator: Option<&str>, limit: Option<&str>, json: bool) -> Result<()> {
    let config = load_config()?;
    let separator = separator.map(Separator::coerce).unwrap_or(config.separator);
    // No separate editing phase here, so the limit is final straight away.
    let limit = limit
        .map(|raw| clamp_limit(parse_limit(raw)))
        .unwrap_or(config.limit);

    let slug = normalize(text, separator, effective_limit(limit));
    tracing::debug!(%separator, limit, len = slug.len(), "slug command");

    if json {
        let report = SlugReport {
            text,
            slug: &slug,
            separator: separator.as_char(),
            limit,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{slug}");
    }
    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = load_config()?;
    let path = config.config_file();

    let ok = |msg: &str| println!("  OK  {msg}");
    let warn = |msg: &str| println!(" WARN {msg}");
    let info = |msg: &str| println!("  --  {msg}");

    println!("Settings:");
    println!(
        "  separator   {} ({})",
        config.separator,
        config.separator.label()
    );
    println!("  limit       {}", config.limit);
    println!("  spinner_ms  {}", config.spinner.as_millis());
    println!("  confirm_ms  {}", config.confirm.as_millis());

    println!();
    println!("Config ({}):", path.display());

    if !path.exists() {
        info("No config file found (using all defaults)");
        return Ok(());
    }

    let entries = validate_config_file(&path)?;
    if entries.is_empty() {
        info("Config file is empty (using all defaults)");
    }
    for entry in &entries {
        let display = format!("{}={}", entry.key, entry.value);
        match &entry.status {
            ConfigEntryStatus::Ok => ok(&display),
            ConfigEntryStatus::InvalidValue { note } | ConfigEntryStatus::OutOfRange { note } => {
                warn(&format!("{display}  — {note}"))
            }
            ConfigEntryStatus::UnknownKey {
                suggestion: Some(s),
            } => warn(&format!("unknown key \"{display}\" — did you mean \"{s}\"?")),
            ConfigEntryStatus::UnknownKey { suggestion: None } => {
                warn(&format!("unknown key \"{display}\""))
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_means_tui() {
        let cli = Cli::try_parse_from(["slugifier"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn slug_args_parse() {
        let cli = Cli::try_parse_from(["slugifier", "slug", "Hello", "World", "-s", "_", "-l", "20"])
            .unwrap();
        match cli.command {
            Some(Commands::Slug {
                text,
                separator,
                limit,
                json,
            }) => {
                assert_eq!(text, vec!["Hello", "World"]);
                assert_eq!(separator.as_deref(), Some("_"));
                assert_eq!(limit.as_deref(), Some("20"));
                assert!(!json);
            }
            _ => panic!("expected slug command"),
        }
    }

    #[test]
    fn slug_accepts_negative_limit() {
        let cli = Cli::try_parse_from(["slugifier", "slug", "Hello", "--limit", "-5"]).unwrap();
        match cli.command {
            Some(Commands::Slug { text, limit, .. }) => {
                assert_eq!(text, vec!["Hello"]);
                assert_eq!(limit.as_deref(), Some("-5"));
            }
            _ => panic!("expected slug command"),
        }
    }

    #[test]
    fn slug_requires_text() {
        assert!(Cli::try_parse_from(["slugifier", "slug"]).is_err());
    }
}
