//! Runtime configuration read from the environment
//!
//! - `HUNTER_LOG`: tracing filter directive, defaults to `warn`
//! - `HUNTER_COMMIT_DATE`: RFC 3339 timestamp used for new commits instead of the clock;
//!   it is parsed only when a commit is made
//! - `NO_COLOR`: disables coloured output (colour is also off when stdout is not a terminal)

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use is_terminal::IsTerminal;

pub const LOG_ENV: &str = "HUNTER_LOG";
pub const COMMIT_DATE_ENV: &str = "HUNTER_COMMIT_DATE";
const NO_COLOR_ENV: &str = "NO_COLOR";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub commit_date: Option<String>,
    pub color: bool,
}

impl Config {
    pub fn load_from_env() -> Self {
        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let commit_date = std::env::var(COMMIT_DATE_ENV).ok();

        let color = std::env::var_os(NO_COLOR_ENV).is_none() && std::io::stdout().is_terminal();

        Config {
            log_filter,
            commit_date,
            color,
        }
    }

    /// The configured commit timestamp, if any
    pub fn commit_date(&self) -> anyhow::Result<Option<DateTime<FixedOffset>>> {
        self.commit_date
            .as_deref()
            .map(parse_commit_date)
            .transpose()
    }

    /// Install the global tracing subscriber; log lines go to stderr
    pub fn init_logging(&self) {
        let filter = tracing_subscriber::EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }

    pub fn apply_color(&self) {
        colored::control::set_override(self.color);
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            commit_date: None,
            color: false,
        }
    }
}

fn parse_commit_date(date: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date.trim())
        .with_context(|| format!("{COMMIT_DATE_ENV} is not an RFC 3339 timestamp: {date}"))
}
