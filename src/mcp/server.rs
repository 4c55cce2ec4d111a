//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Serialize;

use crate::{
    config::Config,
    error::AppError,
    services::MarketplaceService,
    stacks::{ContractName, DryRunSubmitter, StacksNetwork, TransactionSubmitter, STX_DECIMALS},
    types::{format_stx, micro_stx_to_stx, parse_units, stx_to_micro_stx},
};

/// Stacks Contracts MCP Server.
///
/// Exposes the contract registry, STX unit conversions and marketplace calls.
#[derive(Clone)]
pub struct StacksContractsServer {
    network: StacksNetwork,
    marketplace_service: MarketplaceService,
    tool_router: ToolRouter<Self>,
}

impl StacksContractsServer {
    /// Create a server whose contract calls are dry-run only.
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_submitter(config, Arc::new(DryRunSubmitter))
    }

    /// Create a server that hands contract calls to `submitter`.
    pub fn with_submitter(
        config: Config,
        submitter: Arc<dyn TransactionSubmitter>,
    ) -> Result<Self, AppError> {
        tracing::info!(
            network = config.network.as_str(),
            contract_address = %config.contract_address,
            "Initializing Stacks Contracts MCP Server"
        );

        let marketplace_service = MarketplaceService::new(config.contract_address, submitter);

        Ok(Self { network: config.network, marketplace_service, tool_router: Self::tool_router() })
    }
}

/// Input parameters for the get_contract tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetContractInput {
    /// Registry key (e.g., "MARKETPLACE") or deployed name (e.g., "marketplace-escrow").
    pub name: String,
}

/// Input parameters for the micro_stx_to_stx tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct MicroStxToStxInput {
    /// Amount in micro-STX (1 STX = 1,000,000 micro-STX).
    pub micro_stx: f64,
}

/// Input parameters for the stx_to_micro_stx tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct StxToMicroStxInput {
    /// Amount in STX.
    pub stx: f64,
}

/// Input parameters for the create_listing tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateListingInput {
    /// Listing price in STX (human-readable, e.g., "1.5").
    pub price: String,
    /// Listing title (ASCII).
    pub title: String,
    /// Listing category (ASCII).
    pub category: String,
}

#[derive(Debug, Serialize)]
struct ContractEntry {
    name: ContractName,
    identifier: &'static str,
    contract_id: String,
}

impl ContractEntry {
    fn new(name: ContractName, address: &str) -> Self {
        Self { name, identifier: name.identifier(), contract_id: name.contract_id(address) }
    }
}

#[derive(Debug, Serialize)]
struct ContractsResponse<'a> {
    network: StacksNetwork,
    contract_address: &'a str,
    contracts: Vec<ContractEntry>,
}

#[derive(Debug, Serialize)]
struct MicroStxToStxResponse {
    micro_stx: f64,
    stx: f64,
    formatted: String,
}

#[derive(Debug, Serialize)]
struct StxToMicroStxResponse {
    stx: f64,
    micro_stx: f64,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl StacksContractsServer {
    /// List the deployed contracts and their fully-qualified ids.
    #[tool(description = "List the marketplace's deployed Stacks contracts and their identifiers")]
    pub async fn list_contracts(&self) -> Result<String, McpError> {
        tracing::info!("list_contracts called");

        let address = self.marketplace_service.contract_address();
        let contracts =
            ContractName::ALL.into_iter().map(|name| ContractEntry::new(name, address)).collect();

        to_json(&ContractsResponse { network: self.network, contract_address: address, contracts })
    }

    /// Resolve one contract by registry key or deployed name.
    #[tool(
        description = "Look up one contract by registry key (CREDENTIAL, MARKETPLACE, EMERGENCY, BOUNTY) or deployed name"
    )]
    pub async fn get_contract(
        &self,
        Parameters(input): Parameters<GetContractInput>,
    ) -> Result<String, McpError> {
        tracing::info!(name = %input.name, "get_contract called");

        let name = input.name.parse::<ContractName>().map_err(McpError::from)?;

        to_json(&ContractEntry::new(name, self.marketplace_service.contract_address()))
    }

    /// Convert micro-STX to STX.
    #[tool(description = "Convert a micro-STX amount to STX and format it for display")]
    pub async fn micro_stx_to_stx(
        &self,
        Parameters(input): Parameters<MicroStxToStxInput>,
    ) -> Result<String, McpError> {
        tracing::info!(micro_stx = input.micro_stx, "micro_stx_to_stx called");

        to_json(&MicroStxToStxResponse {
            micro_stx: input.micro_stx,
            stx: micro_stx_to_stx(input.micro_stx),
            formatted: format_stx(input.micro_stx),
        })
    }

    /// Convert STX to micro-STX (floored).
    #[tool(description = "Convert an STX amount to micro-STX, rounding down")]
    pub async fn stx_to_micro_stx(
        &self,
        Parameters(input): Parameters<StxToMicroStxInput>,
    ) -> Result<String, McpError> {
        tracing::info!(stx = input.stx, "stx_to_micro_stx called");

        to_json(&StxToMicroStxResponse { stx: input.stx, micro_stx: stx_to_micro_stx(input.stx) })
    }

    /// Create a marketplace listing.
    ///
    /// The call is built against `marketplace-escrow` and passed to the
    /// configured submitter; the default server never broadcasts.
    #[tool(
        description = "Build a create-listing call on the marketplace-escrow contract. Price is in STX."
    )]
    pub async fn create_listing(
        &self,
        Parameters(input): Parameters<CreateListingInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            price = %input.price,
            title = %input.title,
            category = %input.category,
            "create_listing called"
        );

        let price = parse_units(&input.price, STX_DECIMALS).map_err(McpError::from)?;

        let mut result = self
            .marketplace_service
            .create_listing(price, &input.title, &input.category)
            .await
            .map_err(McpError::from)?;

        if result.explorer_url.is_none() {
            result.explorer_url =
                result.tx_id.as_deref().map(|id| self.network.explorer_tx_url(id));
        }

        to_json(&result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StacksContractsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stacks-contracts-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Stacks Contracts MCP Server. Provides the marketplace contract registry, \
                 STX unit conversions and create-listing calls."
                    .to_string(),
            ),
        }
    }
}
