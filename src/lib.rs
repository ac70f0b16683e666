//! upiq - UPI statement reconciliation and spending analytics
//!
//! This library provides the core functionality for the upiq CLI. It imports
//! statement exports from UPI payment apps, reconciles them against the local
//! transaction history with duplicate detection, and reports spending against
//! monthly budget limits.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (import, dedup, analytics)
//! - `display`: Terminal table formatting
//! - `reports`: Dashboard, spending, and budget reports
//! - `export`: CSV, JSON, and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use upiq::config::{paths::UpiqPaths, settings::Settings};
//!
//! let paths = UpiqPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{UpiqError, UpiqResult};
