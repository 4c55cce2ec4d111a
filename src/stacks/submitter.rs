//! Transaction submission seam.
//!
//! Signing and broadcasting belong to a wallet or SDK; the crate only builds
//! calls and hands them to a [`TransactionSubmitter`].

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{ContractCall, TransactionResult, TransactionStatus},
};

/// Anything that can take a contract call to the chain.
///
/// Implementations might open a wallet prompt, sign locally and post to a
/// node, or (as [`DryRunSubmitter`] does) stop after validation.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Submit a contract call.
    async fn submit(&self, call: ContractCall) -> Result<TransactionResult>;
}

/// Submitter that never broadcasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSubmitter;

#[async_trait]
impl TransactionSubmitter for DryRunSubmitter {
    async fn submit(&self, call: ContractCall) -> Result<TransactionResult> {
        tracing::info!(
            contract = %call.contract_id(),
            function = %call.function_name,
            args = call.function_args.len(),
            "Dry-run contract call (not broadcast)"
        );
        tracing::debug!(call = %call, "Dry-run call body");

        Ok(TransactionResult {
            status: TransactionStatus::DryRun,
            tx_id: None,
            explorer_url: None,
            call,
        })
    }
}
