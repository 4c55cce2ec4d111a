//! Aggregate of the registry constants and unit helpers.

use super::{contracts::Contracts, CONTRACTS, CONTRACT_ADDRESS};
use crate::types::units;

/// Registry and conversion helpers bundled under named fields.
#[derive(Debug, Clone, Copy)]
pub struct StacksHelpers {
    pub contract_address: &'static str,
    pub contracts: Contracts,
    pub micro_stx_to_stx: fn(f64) -> f64,
    pub stx_to_micro_stx: fn(f64) -> f64,
    pub format_stx: fn(f64) -> String,
}

/// The default bundle.
pub const STACKS: StacksHelpers = StacksHelpers {
    contract_address: CONTRACT_ADDRESS,
    contracts: CONTRACTS,
    micro_stx_to_stx: units::micro_stx_to_stx,
    stx_to_micro_stx: units::stx_to_micro_stx,
    format_stx: units::format_stx,
};
