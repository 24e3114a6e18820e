//! Runtime configuration read from environment variables.
//!
//! - `HOST`, `PORT`: where the web server listens (default `0.0.0.0:8080`).
//! - `TOURNAMENT_DB`: SQLite database file. Unset means an in-memory database.
//! - `TOURNAMENT_PLAYERS`: pool size for the simulation (default 16).
//! - `TOURNAMENT_OUTPUT`: `table` or `csv` for simulation output (default `table`).

use std::path::PathBuf;

use crate::store::{SqliteStore, StoreResult};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PLAYERS: usize = 16;

/// How standings are printed by the simulation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: Option<PathBuf>,
    pub players: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: None,
            players: DEFAULT_PLAYERS,
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable values fall back to
    /// the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            database: lookup("TOURNAMENT_DB")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            players: parse_or("TOURNAMENT_PLAYERS", lookup("TOURNAMENT_PLAYERS"), defaults.players),
            output: match lookup("TOURNAMENT_OUTPUT").as_deref().map(str::trim) {
                None | Some("") | Some("table") => OutputFormat::Table,
                Some("csv") => OutputFormat::Csv,
                Some(other) => {
                    log::warn!("Unknown TOURNAMENT_OUTPUT {:?}, using table", other);
                    OutputFormat::Table
                }
            },
        }
    }

    /// Open the configured store: the database file if set, otherwise in memory.
    pub fn open_store(&self) -> StoreResult<SqliteStore> {
        match &self.database {
            Some(path) => SqliteStore::open(path),
            None => SqliteStore::open_in_memory(),
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    key: &str,
    value: Option<String>,
    default: T,
) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} {:?}, using {}", key, raw, default);
            default
        }),
    }
}
