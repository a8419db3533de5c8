//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::components::fact_rotator::FACT_INTERVAL;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub facts: FactsConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation frame interval.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// When false every transition completes instantly.
    #[serde(default = "default_true")]
    pub animations: bool,
    #[serde(default = "default_true")]
    pub show_image_urls: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            animations: true,
            show_image_urls: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsConfig {
    #[serde(default = "default_fact_interval_ms")]
    pub interval_ms: u64,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_fact_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Host of the image-by-keyword service.
    #[serde(default = "default_image_service")]
    pub service: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            service: default_image_service(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_fact_interval_ms() -> u64 {
    FACT_INTERVAL.as_millis() as u64
}

fn default_image_service() -> String {
    "source.unsplash.com".into()
}

fn default_log_dir() -> String {
    "~/.local/share/dogtabs/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("facts.interval_ms must be greater than zero")]
    ZeroFactInterval,
    #[error("ui.tick_rate_ms ({tick_ms}) must be shorter than facts.interval_ms ({interval_ms})")]
    TickSlowerThanFacts { tick_ms: u64, interval_ms: u64 },
    #[error("images.service must name a host")]
    EmptyImageService,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.facts.interval_ms == 0 {
            return Err(ConfigError::ZeroFactInterval);
        }
        if self.ui.tick_rate_ms >= self.facts.interval_ms {
            return Err(ConfigError::TickSlowerThanFacts {
                tick_ms: self.ui.tick_rate_ms,
                interval_ms: self.facts.interval_ms,
            });
        }
        if self.images.service.trim().is_empty() {
            return Err(ConfigError::EmptyImageService);
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn fact_interval(&self) -> Duration {
        Duration::from_millis(self.facts.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fact_interval(), Duration::from_millis(5000));
        assert_eq!(config.fact_interval(), FACT_INTERVAL);
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.images.service, "source.unsplash.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            animations = false

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(!config.ui.animations);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert!(config.ui.show_image_urls);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);
        assert_eq!(config.facts.interval_ms, 5000);
    }

    #[test]
    fn test_validate_rejects_bad_timing() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));

        let mut config = AppConfig::default();
        config.facts.interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFactInterval));

        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 6000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TickSlowerThanFacts {
                tick_ms: 6000,
                interval_ms: 5000
            })
        );
    }

    #[test]
    fn test_validate_rejects_blank_image_service() {
        let mut config = AppConfig::default();
        config.images.service = "  ".into();
        assert_eq!(config.validate(), Err(ConfigError::EmptyImageService));
        assert_eq!(
            ConfigError::EmptyImageService.to_string(),
            "images.service must name a host"
        );
    }
}
