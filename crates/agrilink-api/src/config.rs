use agrilink_market::{FileMarketData, MarketData, StaticMarketData};
use agrilink_optimizer::TransportOptimizer;
use agrilink_types::{AgriLinkError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

pub const ENV_BIND_ADDR: &str = "AGRILINK_BIND_ADDR";
pub const ENV_MARKET_DATA: &str = "AGRILINK_MARKET_DATA";
pub const ENV_TRANSPORT_RATE: &str = "AGRILINK_TRANSPORT_RATE";

/// Configuration for the API server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// JSON market snapshot to serve; the built-in dataset when unset
    pub market_data_path: Option<PathBuf>,

    /// Transport rate overriding the one in the market data
    pub transport_rate: Option<f64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            market_data_path: None,
            transport_rate: None,
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `AGRILINK_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = addr;
        }
        if let Some(path) = lookup(ENV_MARKET_DATA).filter(|p| !p.trim().is_empty()) {
            config.market_data_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_TRANSPORT_RATE) {
            let rate = raw.trim().parse::<f64>().map_err(|_| {
                AgriLinkError::ConfigError(format!("{ENV_TRANSPORT_RATE} is not a number: {raw}"))
            })?;
            config.transport_rate = Some(rate);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bind_addr.trim().is_empty() {
            return Err(AgriLinkError::ConfigError("bind address is empty".to_string()));
        }
        if let Some(rate) = self.transport_rate {
            if !rate.is_finite() || rate < 0.0 {
                return Err(AgriLinkError::ConfigError(format!(
                    "transport rate must be non-negative, got {rate}"
                )));
            }
        }
        Ok(())
    }

    /// Build the optimizer over the configured market data source
    pub fn build_optimizer(&self) -> Result<TransportOptimizer> {
        let market: Arc<dyn MarketData> = match &self.market_data_path {
            Some(path) => {
                tracing::info!("Serving market data from {}", path.display());
                Arc::new(FileMarketData::open(path)?)
            }
            None => {
                tracing::info!("Serving built-in market data");
                Arc::new(StaticMarketData::new())
            }
        };

        let optimizer = TransportOptimizer::with_market(market);
        Ok(match self.transport_rate {
            Some(rate) => optimizer.with_rate_override(rate),
            None => optimizer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "0.0.0.0:8080"),
            (ENV_MARKET_DATA, "/srv/market.json"),
            (ENV_TRANSPORT_RATE, "0.03"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.market_data_path, Some(PathBuf::from("/srv/market.json")));
        assert_eq!(config.transport_rate, Some(0.03));
    }

    #[test]
    fn test_bad_rate_is_config_error() {
        let err = ApiConfig::from_lookup(lookup(&[(ENV_TRANSPORT_RATE, "cheap")])).unwrap_err();
        assert!(matches!(err, AgriLinkError::ConfigError(_)));

        let err = ApiConfig::from_lookup(lookup(&[(ENV_TRANSPORT_RATE, "-1")])).unwrap_err();
        assert!(matches!(err, AgriLinkError::ConfigError(_)));
    }

    #[test]
    fn test_missing_market_file_fails_at_startup() {
        let config = ApiConfig {
            market_data_path: Some(PathBuf::from("/nonexistent/market.json")),
            ..ApiConfig::default()
        };
        assert!(config.build_optimizer().is_err());
    }
}
