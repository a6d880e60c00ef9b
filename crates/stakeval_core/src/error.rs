use std::fmt;

use crate::model::{AssumptionField, MetricField};

/// Errors raised at the assumption-set boundary.
///
/// These never reach the engine: an [`crate::Assumptions`] value only exists
/// if every field was in domain at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    OutOfRange {
        field: AssumptionField,
        value: f64,
        min: f64,
        max: f64,
    },
    NotFinite { field: AssumptionField, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{} = {value} is outside [{min}, {max}]",
                    field.label()
                )
            }
            ValidationError::NotFinite { field, value } => {
                write!(f, "{} = {value} is not a finite number", field.label())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors detected when validating a model configuration at startup or load.
///
/// These are programming/configuration mistakes, not runtime data errors: a
/// config that passes `validate()` can never produce one of these later.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A slider spec violates min <= default <= max, or its step is not positive.
    InvalidBounds {
        field: AssumptionField,
        reason: String,
    },
    /// A percentage slider reaches outside [0, 100].
    BoundsOutsideDomain {
        field: AssumptionField,
        min: f64,
        max: f64,
    },
    /// The chart field list is empty.
    EmptyChartFields,
    /// The chart field list names the same field twice.
    DuplicateChartField(MetricField),
    /// The baseline's assumption values are out of domain.
    InvalidBaseline(ValidationError),
    /// An observed baseline metric is negative or not finite.
    InvalidBaselineMetric { metric: MetricField, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds { field, reason } => {
                write!(f, "invalid bounds for {}: {reason}", field.label())
            }
            ConfigError::BoundsOutsideDomain { field, min, max } => {
                write!(
                    f,
                    "bounds [{min}, {max}] for {} reach outside [0, 100]",
                    field.label()
                )
            }
            ConfigError::EmptyChartFields => write!(f, "chart field list is empty"),
            ConfigError::DuplicateChartField(field) => {
                write!(f, "chart field {:?} listed more than once", field)
            }
            ConfigError::InvalidBaseline(e) => write!(f, "invalid baseline: {e}"),
            ConfigError::InvalidBaselineMetric { metric, value } => {
                write!(
                    f,
                    "observed baseline {} = {value} is not a non-negative finite number",
                    metric.label()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBaseline(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        ConfigError::InvalidBaseline(e)
    }
}
