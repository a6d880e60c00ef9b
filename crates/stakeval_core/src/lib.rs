//! Token-staking valuation library
//!
//! This crate provides the calculation core for an interactive what-if
//! valuation model. It supports:
//! - Validated assumption sets (supply, staked share, yield, margin, multiple)
//! - Two formula variants (stake-revenue and unstaked-yield)
//! - An explicit baseline scenario for Current-vs-Model comparison
//! - Display-ready comparison tables and grouped-bar chart series
//! - Named model presets with slider bounds and chart field selection
//!
//! The engine is a pure function: every recompute derives a fresh
//! [`ValuationMetrics`] from the current [`Assumptions`], so output can never
//! go stale relative to input.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod compare;
pub mod config;
pub mod engine;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use compare::{ChartData, ComparisonRow, ComparisonTable, potential_summary};
pub use config::{BaselineSpec, InputSpec, InputSpecs, ModelConfig};
pub use engine::{Variant, compute};
pub use error::{ConfigError, ValidationError};
pub use model::{Assumptions, AssumptionField, Baseline, MetricField, ValuationMetrics};
