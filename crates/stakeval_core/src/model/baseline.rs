use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::engine::{self, Variant};
use crate::model::{Assumptions, ValuationMetrics};

/// The fixed reference scenario shown as the "Current" row.
///
/// Built once at startup from the active model preset and never touched by
/// UI input. In the unstaked-yield variant its valuation is also the divisor
/// for the model's `potential`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub assumptions: Assumptions,
    pub metrics: ValuationMetrics,
    /// When the observed numbers were taken, if known
    pub as_of: Option<Date>,
}

impl Baseline {
    /// Build a baseline from independently-observed metrics.
    ///
    /// Used when the "current" numbers come from outside the model (on-chain
    /// or market data) rather than from the formulas, so gross/net/valuation
    /// need not be consistent with what the engine would derive.
    #[must_use]
    pub fn from_observed(
        assumptions: Assumptions,
        metrics: ValuationMetrics,
        as_of: Option<Date>,
    ) -> Self {
        Self {
            assumptions,
            metrics,
            as_of,
        }
    }

    /// Build a baseline by running its own assumptions through the engine.
    ///
    /// The baseline has no reference valuation of its own, so in the
    /// unstaked-yield variant its `potential` comes out 0.
    #[must_use]
    pub fn recomputed(assumptions: Assumptions, variant: Variant) -> Self {
        let metrics = engine::compute(&assumptions, variant, 0.0);
        Self {
            assumptions,
            metrics,
            as_of: None,
        }
    }
}
