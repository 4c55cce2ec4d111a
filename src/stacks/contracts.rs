//! Contract registry.
//!
//! Maps the fixed set of logical contract names to the contract names
//! deployed under [`CONTRACT_ADDRESS`](super::CONTRACT_ADDRESS).

use serde::Serialize;

use crate::error::AppError;

/// Logical names of the deployed contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractName {
    /// Disability credential issuance.
    Credential,
    /// Listing escrow.
    Marketplace,
    /// Emergency fund pool.
    Emergency,
    /// Bounty board.
    Bounty,
}

impl ContractName {
    /// Every contract, in registry order.
    pub const ALL: [ContractName; 4] = [
        ContractName::Credential,
        ContractName::Marketplace,
        ContractName::Emergency,
        ContractName::Bounty,
    ];

    /// Registry key (e.g. `"MARKETPLACE"`).
    pub fn key(&self) -> &'static str {
        match self {
            ContractName::Credential => "CREDENTIAL",
            ContractName::Marketplace => "MARKETPLACE",
            ContractName::Emergency => "EMERGENCY",
            ContractName::Bounty => "BOUNTY",
        }
    }

    /// Deployed contract name (e.g. `"marketplace-escrow"`).
    pub fn identifier(&self) -> &'static str {
        match self {
            ContractName::Credential => CONTRACTS.credential,
            ContractName::Marketplace => CONTRACTS.marketplace,
            ContractName::Emergency => CONTRACTS.emergency,
            ContractName::Bounty => CONTRACTS.bounty,
        }
    }

    /// Fully-qualified contract id, `<address>.<identifier>`.
    pub fn contract_id(&self, address: &str) -> String {
        format!("{}.{}", address, self.identifier())
    }
}

impl std::fmt::Display for ContractName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ContractName {
    type Err = AppError;

    /// Accepts either the registry key or the deployed identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ContractName::ALL
            .into_iter()
            .find(|name| {
                name.key().eq_ignore_ascii_case(needle)
                    || name.identifier().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| AppError::UnknownContract(s.to_string()))
    }
}

/// The contract registry: one field per logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Contracts {
    pub credential: &'static str,
    pub marketplace: &'static str,
    pub emergency: &'static str,
    pub bounty: &'static str,
}

/// Deployed contract names.
pub const CONTRACTS: Contracts = Contracts {
    credential: "disability-credential",
    marketplace: "marketplace-escrow",
    emergency: "emergency-fund",
    bounty: "bounty",
};

impl Contracts {
    /// `(key, identifier)` pairs in registry order.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("CREDENTIAL", self.credential),
            ("MARKETPLACE", self.marketplace),
            ("EMERGENCY", self.emergency),
            ("BOUNTY", self.bounty),
        ]
    }

    /// Look up an identifier by registry key (exact match).
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries().into_iter().find(|(k, _)| *k == key).map(|(_, id)| id)
    }
}
