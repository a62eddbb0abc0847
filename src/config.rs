//! Configuration handling for the TUI

use crate::submit::SubmitTiming;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default log filter when neither the config nor the environment sets one
pub const DEFAULT_LOG_FILTER: &str = "portfolio_tui=info";

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "PORTFOLIO_TUI_LOG";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Visible fraction that reveals every section (per-section defaults otherwise)
    pub reveal_threshold: Option<f32>,
    /// Simulated submission latency
    pub submit_delay_ms: Option<u64>,
    /// How long the success banner stays up
    pub success_revert_ms: Option<u64>,
    /// Upper bound on a submission
    pub submit_timeout_ms: Option<u64>,
    /// Event poll interval while idle
    pub tick_rate_ms: Option<u64>,
    /// tracing-subscriber filter directive
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location, next to other application data
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
            .map(|dirs| dirs.data_local_dir().join("portfolio-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_json(&content);
            }
        }

        Ok(Self::default())
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: TuiConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(1500))
    }

    pub fn submit_timing(&self) -> SubmitTiming {
        let defaults = SubmitTiming::default();
        SubmitTiming {
            revert_after: self
                .success_revert_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.revert_after),
            // Zero would fail every submission before the transport ran
            timeout: self
                .submit_timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(100).max(1))
    }

    pub fn log_filter(&self) -> String {
        resolve_log_filter(std::env::var(LOG_ENV_VAR).ok(), self.log_filter.as_deref())
    }
}

/// Filter from the environment, then the config file, then the default
fn resolve_log_filter(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|filter| !filter.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.reveal_threshold.is_none());
        assert!(config.submit_delay_ms.is_none());
        assert!(config.success_revert_ms.is_none());
        assert!(config.submit_timeout_ms.is_none());
        assert!(config.tick_rate_ms.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_default_durations() {
        let config = TuiConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.submit_timing(), SubmitTiming::default());
        assert_eq!(config.submit_timing().revert_after, Duration::from_secs(5));
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_overridden_durations() {
        let config = TuiConfig::from_json(
            r#"{"submit_delay_ms": 10, "success_revert_ms": 20, "submit_timeout_ms": 30, "tick_rate_ms": 0}"#,
        )
        .unwrap();
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
        assert_eq!(
            config.submit_timing(),
            SubmitTiming {
                revert_after: Duration::from_millis(20),
                timeout: Duration::from_millis(30),
            }
        );
        // A zero tick would spin the event loop
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            reveal_threshold: Some(0.5),
            log_filter: Some("portfolio_tui=debug".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed = TuiConfig::from_json(&json).unwrap();

        assert_eq!(parsed.reveal_threshold, Some(0.5));
        assert_eq!(parsed.log_filter.as_deref(), Some("portfolio_tui=debug"));
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = TuiConfig::from_json("{}").unwrap();
        assert!(parsed.reveal_threshold.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"tick_rate_ms": 50, "unknown_field": "value"}"#;
        let parsed = TuiConfig::from_json(json).unwrap();
        assert_eq!(parsed.tick_rate_ms, Some(50));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TuiConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_zero_timeout_keeps_default() {
        let config = TuiConfig::from_json(r#"{"submit_timeout_ms": 0}"#).unwrap();
        assert_eq!(config.submit_timing().timeout, SubmitTiming::default().timeout);
    }

    mod log_filter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_env_overrides_config() {
            assert_eq!(
                resolve_log_filter(Some("portfolio_tui=trace".to_string()), Some("warn")),
                "portfolio_tui=trace"
            );
        }

        #[test]
        fn test_config_used_without_env() {
            assert_eq!(resolve_log_filter(None, Some("warn")), "warn");
        }

        #[test]
        fn test_default_without_env_or_config() {
            assert_eq!(resolve_log_filter(None, None), DEFAULT_LOG_FILTER);
        }

        #[test]
        fn test_blank_env_is_ignored() {
            assert_eq!(resolve_log_filter(Some("  ".to_string()), Some("warn")), "warn");
        }
    }

    #[test]
    fn test_paths_do_not_panic() {
        let _config = TuiConfig::config_path();
        let _log = TuiConfig::log_path();
    }
}
