use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bybit: BybitConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BybitConfig {
    pub rest_base_url: String,
    pub quote_currency: String,
}

impl Default for BybitConfig {
    fn default() -> Self {
        Self {
            rest_base_url: "https://api.bybit.com".to_string(),
            quote_currency: "USDT".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Figure size; the rendered image is `size * 100` pixels square and the
    /// x axis shows at most `size` tick labels.
    pub size: u32,
    pub output_path: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: 8,
            output_path: "chart.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `config/default.toml`, falling back to built-in defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Path::new("config/default.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        toml::from_str(&config_str).context("failed to parse config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_constants() {
        let config = Config::default();
        assert_eq!(config.bybit.rest_base_url, "https://api.bybit.com");
        assert_eq!(config.bybit.quote_currency, "USDT");
        assert_eq!(config.chart.size, 8);
        assert_eq!(config.chart.output_path, "chart.png");
        assert_eq!(config.logging.level, "info");
    }
}
