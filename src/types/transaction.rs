//! Contract-call and transaction types.

use serde::Serialize;

use crate::stacks::ClarityValue;

/// A public-function call against a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractCall {
    /// Deployment principal.
    pub contract_address: String,
    /// Deployed contract name (e.g. "marketplace-escrow").
    pub contract_name: String,
    /// Public function to invoke.
    pub function_name: String,
    /// Positional arguments.
    pub function_args: Vec<ClarityValue>,
}

impl ContractCall {
    /// Fully-qualified contract id, `<address>.<name>`.
    pub fn contract_id(&self) -> String {
        format!("{}.{}", self.contract_address, self.contract_name)
    }
}

impl std::fmt::Display for ContractCall {
    /// Renders as `(contract-call? '<id> <fn> <args...>)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(contract-call? '{} {}", self.contract_id(), self.function_name)?;
        for arg in &self.function_args {
            write!(f, " {}", arg)?;
        }
        f.write_str(")")
    }
}

/// What the submitter did with a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Built and validated, not broadcast.
    DryRun,
    /// Handed to the network.
    Submitted,
}

/// Result of submitting a contract call.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResult {
    /// Submission outcome.
    pub status: TransactionStatus,
    /// Transaction id, when one was assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Explorer link for `tx_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    /// The call as submitted.
    pub call: ContractCall,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_call() -> ContractCall {
        ContractCall {
            contract_address: "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".to_string(),
            contract_name: "marketplace-escrow".to_string(),
            function_name: "create-listing".to_string(),
            function_args: vec![
                ClarityValue::Uint(2_000_000),
                ClarityValue::StringAscii("Ramp".to_string()),
                ClarityValue::StringAscii("mobility".to_string()),
            ],
        }
    }

    #[test]
    fn test_contract_call_id() {
        assert_eq!(
            listing_call().contract_id(),
            "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.marketplace-escrow"
        );
    }

    #[test]
    fn test_contract_call_display() {
        assert_eq!(
            listing_call().to_string(),
            "(contract-call? 'ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.marketplace-escrow \
             create-listing u2000000 \"Ramp\" \"mobility\")"
        );
    }

    #[test]
    fn test_transaction_result_serialization_dry_run() {
        let result = TransactionResult {
            status: TransactionStatus::DryRun,
            tx_id: None,
            explorer_url: None,
            call: listing_call(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"dry_run\""));
        assert!(!json.contains("tx_id"));
        assert!(!json.contains("explorer_url"));
        assert!(json.contains("\"function_name\":\"create-listing\""));
    }

    #[test]
    fn test_transaction_result_serialization_submitted() {
        let result = TransactionResult {
            status: TransactionStatus::Submitted,
            tx_id: Some("0x01".to_string()),
            explorer_url: Some("https://explorer.hiro.so/txid/0x01?chain=testnet".to_string()),
            call: listing_call(),
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "submitted");
        assert_eq!(json["tx_id"], "0x01");
        assert_eq!(json["call"]["function_args"][0]["type"], "uint");
    }
}
