//! Business logic services module.

pub mod marketplace;

pub use marketplace::MarketplaceService;
