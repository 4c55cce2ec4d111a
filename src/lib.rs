//! Stacks Contracts MCP Server Library
//!
//! Contract registry, STX unit helpers and a Model Context Protocol server
//! for a Stacks marketplace dApp.
//!
//! # Features
//!
//! - **Contract Registry**: Deployment principal and the fixed set of marketplace contracts
//! - **Unit Conversions**: micro-STX to STX and back, plus display formatting
//! - **Contract Calls**: Typed `create-listing` calls handed to a pluggable submitter
//!
//! # Example
//!
//! ```rust
//! use stacks_contracts_mcp::{format_stx, stx_to_micro_stx, CONTRACTS};
//!
//! assert_eq!(CONTRACTS.marketplace, "marketplace-escrow");
//! assert_eq!(stx_to_micro_stx(1.5), 1_500_000.0);
//! assert_eq!(format_stx(1_500_000.0), "1.50 STX");
//! ```

pub mod config;
pub mod error;
pub mod mcp;
pub mod services;
pub mod stacks;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use mcp::StacksContractsServer;
pub use stacks::constants::*;
pub use stacks::{ContractName, Contracts, StacksHelpers, CONTRACTS, STACKS};
pub use types::{format_stx, micro_stx_to_stx, stx_to_micro_stx};
