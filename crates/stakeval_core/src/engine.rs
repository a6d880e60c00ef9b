//! The valuation engine: a pure function from assumptions to metrics.
//!
//! The two formula variants diverged in the reference model as separate
//! copies of the same pipeline; here they are one function parameterized by
//! [`Variant`], so a formula change is a reviewable diff instead of
//! copy-paste drift.

use serde::{Deserialize, Serialize};

use crate::model::{Assumptions, ValuationMetrics};

/// The choice of formula set governing how revenue and potential are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Revenue accrues on the staked share of supply; potential is valuation
    /// per unit of the model's own supply.
    StakeRevenue,
    /// Revenue accrues on total supply at the average yield, net of the
    /// staked share; potential is valuation relative to the baseline's.
    UnstakedYield,
}

impl Variant {
    /// Get a display label for the variant
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::StakeRevenue => "stake-revenue",
            Self::UnstakedYield => "unstaked-yield",
        }
    }
}

/// Compute the derived metrics for one assumption set.
///
/// `reference_valuation` is the baseline's valuation in billions; only the
/// unstaked-yield variant reads it. Pure: identical inputs always produce
/// identical output, and no in-domain input can make it panic. When a
/// potential divisor is 0 the potential is defined as 0 rather than
/// infinity or an error.
///
/// Results keep full precision; display rounding belongs to the comparison
/// builder.
#[must_use]
pub fn compute(
    assumptions: &Assumptions,
    variant: Variant,
    reference_valuation: f64,
) -> ValuationMetrics {
    let staked = assumptions.supply_staked_pct / 100.0;
    let yield_rate = assumptions.average_yield_pct / 100.0;
    let margin = assumptions.margin_pct / 100.0;

    match variant {
        Variant::StakeRevenue => {
            let gross = assumptions.total_supply * staked * yield_rate;
            let net = gross * margin;
            let valuation = net * assumptions.multiple;
            let potential = ratio_or_zero(valuation, assumptions.total_supply);
            ValuationMetrics::from_parts(assumptions, gross, net, valuation, potential)
        }
        Variant::UnstakedYield => {
            let gross = assumptions.total_supply * yield_rate;
            let net = gross * (1.0 - staked) * margin;
            let valuation = net * assumptions.multiple;
            let potential = ratio_or_zero(valuation, reference_valuation);
            ValuationMetrics::from_parts(assumptions, gross, net, valuation, potential)
        }
    }
}

/// Zero-divisor policy: a ratio over 0 is defined as 0
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
