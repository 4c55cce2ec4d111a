//! Stacks network constants.
//!
//! Contains the deployment principal, STX denomination and network names.

use serde::{Deserialize, Serialize};

// ============================================================================
// Deployment
// ============================================================================

/// Principal that deployed the marketplace contracts (testnet).
pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

// ============================================================================
// STX Denomination
// ============================================================================

/// Number of micro-STX in one STX.
pub const MICRO_STX_PER_STX: u64 = 1_000_000;

/// Decimal places between micro-STX and STX.
pub const STX_DECIMALS: u8 = 6;

/// Display suffix for STX amounts.
pub const STX_SYMBOL: &str = "STX";

// ============================================================================
// Networks
// ============================================================================

/// Hiro explorer base URL.
pub const EXPLORER_URL: &str = "https://explorer.hiro.so";

/// Stacks network selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StacksNetwork {
    /// Stacks mainnet.
    Mainnet,
    /// Stacks testnet.
    #[default]
    Testnet,
}

impl StacksNetwork {
    /// Network name as used in explorer query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            StacksNetwork::Mainnet => "mainnet",
            StacksNetwork::Testnet => "testnet",
        }
    }

    /// Explorer link for a transaction id.
    pub fn explorer_tx_url(&self, tx_id: &str) -> String {
        format!("{}/txid/{}?chain={}", EXPLORER_URL, tx_id, self.as_str())
    }
}

impl std::str::FromStr for StacksNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(StacksNetwork::Mainnet),
            "testnet" => Ok(StacksNetwork::Testnet),
            _ => Err(format!("Invalid Stacks network: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denomination_constants_agree() {
        assert_eq!(10u64.pow(STX_DECIMALS as u32), MICRO_STX_PER_STX);
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<StacksNetwork>().unwrap(), StacksNetwork::Mainnet);
        assert_eq!("TESTNET".parse::<StacksNetwork>().unwrap(), StacksNetwork::Testnet);
        assert_eq!(" Testnet ".parse::<StacksNetwork>().unwrap(), StacksNetwork::Testnet);
        assert!("devnet".parse::<StacksNetwork>().is_err());
        assert!("".parse::<StacksNetwork>().is_err());
    }

    #[test]
    fn test_network_serialization() {
        assert_eq!(serde_json::to_string(&StacksNetwork::Mainnet).unwrap(), "\"mainnet\"");
        let parsed: StacksNetwork = serde_json::from_str("\"testnet\"").unwrap();
        assert_eq!(parsed, StacksNetwork::Testnet);
    }

    #[test]
    fn test_explorer_tx_url() {
        let url = StacksNetwork::Testnet.explorer_tx_url("0xabc");
        assert_eq!(url, "https://explorer.hiro.so/txid/0xabc?chain=testnet");
    }
}
