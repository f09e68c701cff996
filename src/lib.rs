//! subtrack - Track recurring subscription costs from the terminal
//!
//! This library provides the core functionality for the subtrack CLI: it
//! records recurring subscription costs, aggregates them into a summary
//! dashboard, and asks an AI service for cheaper alternatives to any one
//! cost.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (cost records, money, suggestions)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Pure aggregation (summary totals, upcoming renewals)
//! - `suggest`: AI suggestion collaborator
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON export
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod suggest;

pub use error::SubtrackError;
