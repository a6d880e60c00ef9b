//! Model configuration: variant selection, slider bounds, baseline
//! definition, and chart field choice.
//!
//! Everything the reference scenarios hard-coded as ambient globals lives
//! here as a named, constructible value: presets are plain constructors and
//! tests can supply arbitrary baselines.

use jiff::civil::date;
use serde::{Deserialize, Serialize};

use crate::compare::DEFAULT_CHART_FIELDS;
use crate::engine::Variant;
use crate::error::{ConfigError, ValidationError};
use crate::model::{AssumptionField, Assumptions, Baseline, MetricField, ValuationMetrics};

/// Bounds, step and default for one input slider, plus its help tooltip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub help: String,
}

impl InputSpec {
    fn new(min: f64, max: f64, step: f64, default: f64, help: &str) -> Self {
        Self {
            min,
            max,
            step,
            default,
            help: help.to_string(),
        }
    }

    /// Move a value by a number of steps, clamped to [min, max]
    #[must_use]
    pub fn adjust(&self, value: f64, steps: i32) -> f64 {
        (value + f64::from(steps) * self.step).clamp(self.min, self.max)
    }
}

/// One [`InputSpec`] per assumption field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpecs {
    pub total_supply: InputSpec,
    pub supply_staked_pct: InputSpec,
    pub average_yield_pct: InputSpec,
    pub margin_pct: InputSpec,
    pub multiple: InputSpec,
}

impl InputSpecs {
    /// Look up the spec for a field
    #[must_use]
    pub fn spec(&self, field: AssumptionField) -> &InputSpec {
        match field {
            AssumptionField::TotalSupply => &self.total_supply,
            AssumptionField::SupplyStaked => &self.supply_staked_pct,
            AssumptionField::AverageYield => &self.average_yield_pct,
            AssumptionField::Margin => &self.margin_pct,
            AssumptionField::Multiple => &self.multiple,
        }
    }

    /// The assumption set at every field's default
    pub fn defaults(&self) -> Result<Assumptions, ValidationError> {
        Assumptions::new(
            self.total_supply.default,
            self.supply_staked_pct.default,
            self.average_yield_pct.default,
            self.margin_pct.default,
            self.multiple.default,
        )
    }
}

/// How a preset defines its "Current" baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BaselineSpec {
    /// Independently-observed current numbers, taken as-is
    Observed {
        assumptions: Assumptions,
        gross_revenue: f64,
        net_revenue: f64,
        valuation: f64,
        potential: f64,
        as_of: jiff::civil::Date,
    },
    /// Baseline derived by running its assumptions through the engine
    Recomputed { assumptions: Assumptions },
}

impl BaselineSpec {
    fn assumptions(&self) -> &Assumptions {
        match self {
            BaselineSpec::Observed { assumptions, .. } => assumptions,
            BaselineSpec::Recomputed { assumptions } => assumptions,
        }
    }
}

/// A complete, loadable model preset.
///
/// `validate()` is the startup gate: a config that passes can be driven by
/// the UI without further checks, and the chart field list can never
/// mismatch between rows at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub variant: Variant,
    pub inputs: InputSpecs,
    pub baseline: BaselineSpec,
    pub chart_fields: Vec<MetricField>,
}

impl ModelConfig {
    /// The SKY unstaked-yield model with its observed current numbers
    #[must_use]
    pub fn sky() -> Self {
        Self {
            name: "SKY".to_string(),
            variant: Variant::UnstakedYield,
            inputs: InputSpecs {
                total_supply: InputSpec::new(
                    5.0,
                    35.0,
                    1.0,
                    20.0,
                    "Total token supply expected in circulation (in billions)",
                ),
                supply_staked_pct: InputSpec::new(
                    20.0,
                    100.0,
                    1.0,
                    50.0,
                    "Percentage of the total supply that is staked earning savings rate",
                ),
                average_yield_pct: InputSpec::new(
                    3.0,
                    15.0,
                    1.0,
                    8.0,
                    "Annual average yield given to stakers (in percent)",
                ),
                margin_pct: InputSpec::new(
                    60.0,
                    95.0,
                    1.0,
                    80.0,
                    "Percent of net revenue (after savings) retained by the protocol",
                ),
                multiple: InputSpec::new(
                    10.0,
                    50.0,
                    1.0,
                    25.0,
                    "Revenue multiple used for valuation purposes",
                ),
            },
            baseline: BaselineSpec::Observed {
                assumptions: Assumptions {
                    total_supply: 6.0,
                    supply_staked_pct: 45.0,
                    average_yield_pct: 4.5,
                    margin_pct: 100.0,
                    multiple: 8.0,
                },
                gross_revenue: 0.29,
                net_revenue: 0.18,
                valuation: 1.1,
                potential: 0.0,
                as_of: date(2025, 6, 1),
            },
            chart_fields: DEFAULT_CHART_FIELDS.to_vec(),
        }
    }

    /// The stake-revenue model; the baseline is the default assumptions run
    /// through the engine.
    #[must_use]
    pub fn stake_revenue() -> Self {
        Self {
            name: "Stake Revenue".to_string(),
            variant: Variant::StakeRevenue,
            inputs: InputSpecs {
                total_supply: InputSpec::new(
                    5.0,
                    35.0,
                    1.0,
                    20.0,
                    "Total token supply expected in circulation (in billions)",
                ),
                supply_staked_pct: InputSpec::new(
                    30.0,
                    70.0,
                    1.0,
                    50.0,
                    "Percentage of the total supply that is staked",
                ),
                average_yield_pct: InputSpec::new(
                    5.0,
                    12.0,
                    1.0,
                    8.0,
                    "Annual average yield earned on staked supply (in percent)",
                ),
                margin_pct: InputSpec::new(
                    60.0,
                    95.0,
                    1.0,
                    80.0,
                    "Percent of gross revenue retained as net revenue",
                ),
                multiple: InputSpec::new(
                    10.0,
                    35.0,
                    1.0,
                    25.0,
                    "Revenue multiple used for valuation purposes",
                ),
            },
            baseline: BaselineSpec::Recomputed {
                assumptions: Assumptions {
                    total_supply: 20.0,
                    supply_staked_pct: 50.0,
                    average_yield_pct: 8.0,
                    margin_pct: 80.0,
                    multiple: 25.0,
                },
            },
            chart_fields: DEFAULT_CHART_FIELDS.to_vec(),
        }
    }

    /// The built-in presets, in cycling order
    #[must_use]
    pub fn presets() -> Vec<ModelConfig> {
        vec![Self::sky(), Self::stake_revenue()]
    }

    /// Check the whole config at startup/load time.
    ///
    /// Violations here are configuration mistakes (bad bounds, duplicate
    /// chart fields, out-of-domain baseline), never runtime data errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in AssumptionField::ALL {
            let spec = self.inputs.spec(field);
            if !spec.min.is_finite()
                || !spec.max.is_finite()
                || !spec.default.is_finite()
                || !spec.step.is_finite()
            {
                return Err(ConfigError::InvalidBounds {
                    field,
                    reason: "bounds must be finite".to_string(),
                });
            }
            if spec.step <= 0.0 {
                return Err(ConfigError::InvalidBounds {
                    field,
                    reason: format!("step {} is not positive", spec.step),
                });
            }
            if !(spec.min <= spec.default && spec.default <= spec.max) {
                return Err(ConfigError::InvalidBounds {
                    field,
                    reason: format!(
                        "default {} is outside [{}, {}]",
                        spec.default, spec.min, spec.max
                    ),
                });
            }
            let (lo, hi) = if field.is_percentage() {
                (0.0, 100.0)
            } else {
                (0.0, f64::INFINITY)
            };
            if spec.min < lo || spec.max > hi {
                return Err(ConfigError::BoundsOutsideDomain {
                    field,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }

        if self.chart_fields.is_empty() {
            return Err(ConfigError::EmptyChartFields);
        }
        for (i, field) in self.chart_fields.iter().enumerate() {
            if self.chart_fields[..i].contains(field) {
                return Err(ConfigError::DuplicateChartField(*field));
            }
        }

        self.baseline.assumptions().validate()?;
        if let BaselineSpec::Observed {
            gross_revenue,
            net_revenue,
            valuation,
            potential,
            ..
        } = &self.baseline
        {
            for (metric, value) in [
                (MetricField::GrossRevenue, *gross_revenue),
                (MetricField::NetRevenue, *net_revenue),
                (MetricField::Valuation, *valuation),
                (MetricField::Potential, *potential),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidBaselineMetric { metric, value });
                }
            }
        }

        Ok(())
    }

    /// Resolve the baseline this preset defines.
    ///
    /// Call after `validate()`: the spec's values are taken as in-domain.
    #[must_use]
    pub fn baseline(&self) -> Baseline {
        match &self.baseline {
            BaselineSpec::Observed {
                assumptions,
                gross_revenue,
                net_revenue,
                valuation,
                potential,
                as_of,
            } => Baseline::from_observed(
                *assumptions,
                ValuationMetrics::from_parts(
                    assumptions,
                    *gross_revenue,
                    *net_revenue,
                    *valuation,
                    *potential,
                ),
                Some(*as_of),
            ),
            BaselineSpec::Recomputed { assumptions } => {
                Baseline::recomputed(*assumptions, self.variant)
            }
        }
    }
}
