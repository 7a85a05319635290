//! Board configuration with sensible defaults.
//!
//! The host page may embed a JSON object overriding any subset of fields;
//! missing fields keep their defaults.

use serde::Deserialize;

use crate::domain::{BoardError, BoardResult};
use crate::filter::Criteria;

/// Settings for one board instance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Characters of description shown on a list card. Default: `100`.
    pub preview_len: usize,
    /// Load the sample postings at start-up. Default: `true`.
    pub seed: bool,
    /// Minimum console log level (`error` .. `trace`). Default: `"info"`.
    pub log_level: String,
    /// Criteria applied on first load. Default: everything open.
    pub default_criteria: Criteria,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            preview_len: 100,
            seed: true,
            log_level: "info".to_string(),
            default_criteria: Criteria::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::invalid("board config", e.to_string()))
    }

    /// Configured log level, falling back to `Info` when unparseable
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{KindFilter, StatusFilter};
    use crate::domain::Kind;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "preview_len": 40 }"#).unwrap();
        assert_eq!(config.preview_len, 40);
        assert!(config.seed);
        assert_eq!(config.default_criteria, Criteria::default());
    }

    #[test]
    fn test_default_criteria_override() {
        let config = BoardConfig::from_json(
            r#"{ "seed": false, "default_criteria": { "kind": "lost", "status": "all" } }"#,
        )
        .unwrap();
        assert!(!config.seed);
        assert_eq!(config.default_criteria.kind, KindFilter::Only(Kind::Lost));
        assert_eq!(config.default_criteria.status, StatusFilter::All);
        assert_eq!(config.default_criteria.query, "");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(BoardConfig::from_json("{ preview_len: }").is_err());
        assert!(BoardConfig::from_json(r#"{ "default_criteria": { "kind": "stolen" } }"#).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = BoardConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
