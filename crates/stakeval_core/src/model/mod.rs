//! Value objects shared across the engine and the comparison builder.

pub mod assumptions;
pub mod baseline;
pub mod metrics;

pub use assumptions::{AssumptionField, Assumptions};
pub use baseline::Baseline;
pub use metrics::{MetricField, ValuationMetrics};
