use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a word's context (the sentence or snippet it was seen in) is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    /// Single rolling string, last write wins.
    Latest,
    /// Every stored snippet is kept and joined on render.
    Snippets,
}

/// How a word's occurrence count is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountKind {
    /// Plain counter, single owner.
    Basic,
    /// Atomic counter, shareable between ingestion workers.
    Atomic,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown context store kind: {0}")]
    UnknownContextKind(String),

    #[error("unknown count store kind: {0}")]
    UnknownCountKind(String),
}

impl FromStr for ContextKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(ContextKind::Latest),
            "snippets" => Ok(ContextKind::Snippets),
            other => Err(ConfigError::UnknownContextKind(other.to_string())),
        }
    }
}

impl FromStr for CountKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(CountKind::Basic),
            "atomic" => Ok(CountKind::Atomic),
            other => Err(ConfigError::UnknownCountKind(other.to_string())),
        }
    }
}

/// Backing-store selection for newly constructed word entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreConfig {
    pub context: ContextKind,
    pub count: CountKind,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            context: ContextKind::Latest,
            count: CountKind::Basic,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
}

impl Config {
    /// Builds the config from the environment, loading a `.env` file first
    /// when one exists. Unset variables fall back to defaults; set but
    /// unrecognized values are an error rather than silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let context = match env::var("GLOSSA_CONTEXT_STORE") {
            Ok(v) => v.parse()?,
            Err(_) => ContextKind::Latest,
        };

        let count = match env::var("GLOSSA_COUNT_STORE") {
            Ok(v) => v.parse()?,
            Err(_) => CountKind::Basic,
        };

        Ok(Config {
            store: StoreConfig { context, count },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_kind_parses_known_values() {
        assert_eq!("latest".parse::<ContextKind>().unwrap(), ContextKind::Latest);
        assert_eq!(
            "Snippets".parse::<ContextKind>().unwrap(),
            ContextKind::Snippets
        );
    }

    #[test]
    fn count_kind_parses_known_values() {
        assert_eq!("basic".parse::<CountKind>().unwrap(), CountKind::Basic);
        assert_eq!(" atomic ".parse::<CountKind>().unwrap(), CountKind::Atomic);
    }

    #[test]
    fn unknown_kinds_are_errors() {
        let err = "ring-buffer".parse::<ContextKind>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownContextKind(s) if s == "ring-buffer"));

        let err = "sharded".parse::<CountKind>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCountKind(s) if s == "sharded"));
    }

    #[test]
    fn defaults_are_latest_and_basic() {
        let store = StoreConfig::default();
        assert_eq!(store.context, ContextKind::Latest);
        assert_eq!(store.count, CountKind::Basic);
    }
}
