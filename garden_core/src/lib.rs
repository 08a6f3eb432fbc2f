#![forbid(unsafe_code)]

//! Core calculations for the garden calculator.
//!
//! This crate provides:
//! - Domain types (inputs, results, enumerated options)
//! - Lookup tables for watering and harvest yields
//! - The six calculators, each a pure `compute` function
//! - Dispatch over calculators and JSON Lines batches
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod tables;
pub mod config;
pub mod logging;
pub mod spacing;
pub mod seeds;
pub mod soil;
pub mod watering;
pub mod area;
pub mod harvest;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use engine::{run_batch, BatchRecord, Calculation, Outcome};
pub use tables::{validate_yield_table, varieties_for};
