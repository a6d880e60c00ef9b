//! Integration tests for the stakeval calculation core
//!
//! Tests are organized by topic:
//! - `engine` - Formula variants, purity, zero-divisor policy
//! - `compare` - Comparison table, chart series, rounding, summary
//! - `config` - Preset constants and config validation

mod compare;
mod config;
mod engine;
