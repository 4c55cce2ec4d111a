//! Marketplace contract service.

use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    stacks::{ClarityValue, ContractName, TransactionSubmitter},
    types::{format_units, ContractCall, TransactionResult},
};

/// Public function that opens a new escrow listing.
pub const CREATE_LISTING_FUNCTION: &str = "create-listing";

/// Service for building and submitting marketplace calls.
#[derive(Clone)]
pub struct MarketplaceService {
    contract_address: String,
    submitter: Arc<dyn TransactionSubmitter>,
}

impl MarketplaceService {
    /// Create a new marketplace service.
    pub fn new(
        contract_address: impl Into<String>,
        submitter: Arc<dyn TransactionSubmitter>,
    ) -> Self {
        Self { contract_address: contract_address.into(), submitter }
    }

    /// Deployment principal the calls target.
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// Open a listing priced in micro-STX.
    ///
    /// Calls `create-listing (price uint) (title string-ascii) (category string-ascii)`.
    pub async fn create_listing(
        &self,
        price_micro_stx: u128,
        title: &str,
        category: &str,
    ) -> Result<TransactionResult> {
        let call = self.build_create_listing(price_micro_stx, title, category)?;

        tracing::debug!(
            price = %format_units(price_micro_stx, crate::stacks::STX_DECIMALS),
            title = %title,
            category = %category,
            "Submitting create-listing"
        );

        self.submitter.submit(call).await
    }

    /// Validate inputs and build the `create-listing` call.
    pub fn build_create_listing(
        &self,
        price_micro_stx: u128,
        title: &str,
        category: &str,
    ) -> Result<ContractCall> {
        if price_micro_stx == 0 {
            return Err(AppError::InvalidArgument("price must be greater than zero".into()));
        }

        let function_args = vec![
            ClarityValue::Uint(price_micro_stx),
            non_empty_ascii("title", title)?,
            non_empty_ascii("category", category)?,
        ];

        Ok(ContractCall {
            contract_address: self.contract_address.clone(),
            contract_name: ContractName::Marketplace.identifier().to_string(),
            function_name: CREATE_LISTING_FUNCTION.to_string(),
            function_args,
        })
    }
}

fn non_empty_ascii(field: &str, value: &str) -> Result<ClarityValue> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidArgument(format!("{} must not be empty", field)));
    }
    ClarityValue::string_ascii(value)
}

impl std::fmt::Debug for MarketplaceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceService")
            .field("contract_address", &self.contract_address)
            .finish_non_exhaustive()
    }
}
