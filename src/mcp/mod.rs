//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::StacksContractsServer;
pub use server::{CreateListingInput, GetContractInput, MicroStxToStxInput, StxToMicroStxInput};
