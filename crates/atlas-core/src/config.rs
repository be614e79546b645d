//! Engine configuration
//!
//! Settings are read from TOML. Resolution order:
//! 1. An explicit override path (if the file exists)
//! 2. `<data_local_dir>/atlas/config/engine.toml` (if it exists)
//! 3. Built-in defaults
//!
//! ```toml
//! [session]
//! history_capacity = 1000
//! recent_limit = 5
//!
//! [insights]
//! max_insights = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Events retained per session before the oldest are dropped
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;
/// Maximum insights returned for one country
pub const DEFAULT_MAX_INSIGHTS: usize = 3;
/// Entries shown in the recent-activity feed
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub history_capacity: usize,
    pub max_insights: usize,
    pub recent_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_insights: DEFAULT_MAX_INSIGHTS,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Load configuration (override first, then default location, then built-ins)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        match path {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading engine config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        parse_config(&content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("atlas").join("config").join("engine.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    session: Option<RawSession>,
    insights: Option<RawInsights>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSession {
    history_capacity: Option<usize>,
    recent_limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInsights {
    max_insights: Option<usize>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = EngineConfig::default();

    if let Some(session) = raw.session {
        if let Some(capacity) = session.history_capacity {
            config.history_capacity = capacity;
        }
        if let Some(limit) = session.recent_limit {
            config.recent_limit = limit;
        }
    }

    if let Some(insights) = raw.insights {
        if let Some(max) = insights.max_insights {
            config.max_insights = max;
        }
    }

    if config.history_capacity == 0 {
        return Err(Error::Config(
            "session.history_capacity must be at least 1".to_string(),
        ));
    }
    if config.max_insights == 0 {
        return Err(Error::Config(
            "insights.max_insights must be at least 1".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("[session]\nhistory_capacity = 50\n").unwrap();
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.max_insights, DEFAULT_MAX_INSIGHTS);
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
    }

    #[test]
    fn test_parse_rejects_zero_values() {
        assert!(matches!(
            parse_config("[session]\nhistory_capacity = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            parse_config("[insights]\nmax_insights = 0\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("[session]\nttl = 5\n").is_err());
        assert!(parse_config("not toml at all [").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[insights]\nmax_insights = 2").unwrap();

        let config = EngineConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.max_insights, 2);
    }

    #[test]
    fn test_load_missing_override_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
