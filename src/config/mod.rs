//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::error::AppError;
use crate::stacks::{StacksNetwork, CONTRACT_ADDRESS};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Stacks network the contracts are deployed on.
    pub network: StacksNetwork,
    /// Deployment principal that owns the contracts.
    pub contract_address: String,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: StacksNetwork::default(),
            contract_address: CONTRACT_ADDRESS.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `STACKS_NETWORK`: `mainnet` or `testnet` (default: testnet)
    /// - `STACKS_CONTRACT_ADDRESS`: deployment principal (default: [`CONTRACT_ADDRESS`])
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup("STACKS_NETWORK") {
            Some(value) => value.parse::<StacksNetwork>().map_err(AppError::Config)?,
            None => StacksNetwork::default(),
        };

        let contract_address = lookup("STACKS_CONTRACT_ADDRESS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| CONTRACT_ADDRESS.to_string());

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self { network, contract_address, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.network, StacksNetwork::Testnet);
        assert_eq!(config.contract_address, CONTRACT_ADDRESS);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_network_case_insensitive() {
        let config = config_from(&[("STACKS_NETWORK", "MainNet")]).unwrap();
        assert_eq!(config.network, StacksNetwork::Mainnet);

        let config = config_from(&[("STACKS_NETWORK", "testnet")]).unwrap();
        assert_eq!(config.network, StacksNetwork::Testnet);
    }

    #[test]
    fn test_config_invalid_network() {
        let err = config_from(&[("STACKS_NETWORK", "devnet")]).unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("devnet")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_config_contract_address_override() {
        let config =
            config_from(&[("STACKS_CONTRACT_ADDRESS", " SP000000000000000000002Q6VF78 ")]).unwrap();
        assert_eq!(config.contract_address, "SP000000000000000000002Q6VF78");
    }

    #[test]
    fn test_config_blank_contract_address_falls_back() {
        let config = config_from(&[("STACKS_CONTRACT_ADDRESS", "   ")]).unwrap();
        assert_eq!(config.contract_address, CONTRACT_ADDRESS);
    }

    #[test]
    fn test_config_log_level() {
        let config = config_from(&[("LOG_LEVEL", "debug")]).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.network, StacksNetwork::Testnet);
        assert_eq!(config.contract_address, CONTRACT_ADDRESS);
        assert_eq!(config.log_level, "info");
    }
}
