use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub cache: CacheConfig,
    pub validation: ValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Upper bound on cached query entries; least recently used are evicted.
    pub max_entries: usize,
    /// Age after which a settled entry is treated as stale even without an
    /// explicit invalidation. `0` means entries never age out.
    pub stale_after_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    pub max_content_chars: usize,
    pub max_display_name_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig {
                max_entries: 512,
                stale_after_secs: 300, // 5 minutes
            },
            validation: ValidationConfig {
                max_content_chars: 5000,
                max_display_name_chars: 64,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl CacheConfig {
    pub fn stale_after(&self) -> Option<Duration> {
        if self.stale_after_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.stale_after_secs))
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("TRIBES_CACHE_MAX_ENTRIES") {
            if let Some(value) = parse_u64(&v) {
                cfg.cache.max_entries = (value as usize).max(1);
            }
        }
        if let Ok(v) = std::env::var("TRIBES_CACHE_STALE_AFTER_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.cache.stale_after_secs = value;
            }
        }
        if let Ok(v) = std::env::var("TRIBES_MAX_CONTENT_CHARS") {
            if let Some(value) = parse_u64(&v) {
                cfg.validation.max_content_chars = (value as usize).max(1);
            }
        }
        if let Ok(v) = std::env::var("TRIBES_MAX_DISPLAY_NAME_CHARS") {
            if let Some(value) = parse_u64(&v) {
                cfg.validation.max_display_name_chars = (value as usize).max(1);
            }
        }
        if let Ok(v) = std::env::var("TRIBES_LOG") {
            let filter = v.trim();
            if !filter.is_empty() {
                cfg.logging.filter = filter.to_string();
            }
        }
        if let Ok(v) = std::env::var("TRIBES_LOG_JSON") {
            cfg.logging.json = parse_bool(&v, cfg.logging.json);
        }

        cfg
    }

    pub fn from_json_str(raw: &str) -> Result<Self, crate::shared::AppError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()
            .map_err(crate::shared::AppError::Configuration)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cache.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0".to_string());
        }
        if self.validation.max_content_chars == 0 {
            return Err("Validation max_content_chars must be greater than 0".to_string());
        }
        if self.validation.max_display_name_chars == 0 {
            return Err("Validation max_display_name_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
