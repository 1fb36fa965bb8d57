use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dialogs::SLIDE_DURATION;
use crate::theme::ColorScheme;

/// Runtime settings for the filter session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Property search API; when unset the bundled sample listings are used
    pub api_base_url: Option<String>,
    pub color_scheme: ColorScheme,
    /// Dialog slide duration in milliseconds
    pub transition_ms: u64,
    /// Where the final filter snapshot is written
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            color_scheme: ColorScheme::Light,
            transition_ms: SLIDE_DURATION.as_millis() as u64,
            output_path: PathBuf::from("filter_state.json"),
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Apply `HOUSING_FILTER_*` environment overrides
    pub fn from_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = var("HOUSING_FILTER_API_URL") {
            self.api_base_url = Some(url);
        }
        if let Some(theme) = var("HOUSING_FILTER_THEME") {
            self.color_scheme = theme.parse()?;
        }
        if let Some(ms) = var("HOUSING_FILTER_TRANSITION_MS") {
            self.transition_ms = ms
                .trim()
                .parse()
                .with_context(|| format!("Invalid HOUSING_FILTER_TRANSITION_MS: {ms}"))?;
        }
        if let Some(path) = var("HOUSING_FILTER_OUTPUT") {
            self.output_path = PathBuf::from(path);
        }
        Ok(self)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.transition(), Duration::from_millis(300));
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn env_overrides() {
        let config = AppConfig::default()
            .with_overrides(env(&[
                ("HOUSING_FILTER_API_URL", "https://api.example.com"),
                ("HOUSING_FILTER_THEME", "dark"),
                ("HOUSING_FILTER_TRANSITION_MS", "0"),
            ]))
            .unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.transition(), Duration::ZERO);
    }

    #[test]
    fn bad_env_value_is_an_error() {
        let result =
            AppConfig::default().with_overrides(env(&[("HOUSING_FILTER_TRANSITION_MS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"color_scheme": "dark"}"#).unwrap();
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.transition_ms, 300);
    }
}
