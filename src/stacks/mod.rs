//! Stacks interaction module.
//!
//! Contains network constants, the contract registry, Clarity call
//! arguments and the transaction submitter seam.

pub mod clarity;
pub mod constants;
pub mod contracts;
pub mod helpers;
pub mod submitter;

pub use clarity::ClarityValue;
pub use constants::*;
pub use contracts::{ContractName, Contracts, CONTRACTS};
pub use helpers::{StacksHelpers, STACKS};
pub use submitter::{DryRunSubmitter, TransactionSubmitter};
