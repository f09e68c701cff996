//! Service layer for subtrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and lookup for the presentation layer.

pub mod cost;

pub use cost::CostService;
