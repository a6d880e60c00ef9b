//! Derived valuation metrics and the fixed display-field ordering.

use serde::{Deserialize, Serialize};

use crate::model::Assumptions;

/// The nine display fields, in the fixed order shared by the comparison
/// table and the chart series. Rows built from this order are positionally
/// comparable: index i is the same field in every row.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricField {
    TotalSupply,
    SupplyStaked,
    AverageYield,
    Margin,
    GrossRevenue,
    NetRevenue,
    Multiple,
    Valuation,
    Potential,
}

impl MetricField {
    /// All fields in display order
    pub const ALL: [MetricField; 9] = [
        MetricField::TotalSupply,
        MetricField::SupplyStaked,
        MetricField::AverageYield,
        MetricField::Margin,
        MetricField::GrossRevenue,
        MetricField::NetRevenue,
        MetricField::Multiple,
        MetricField::Valuation,
        MetricField::Potential,
    ];

    /// Get a display label for the field
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalSupply => "Total Supply ($B)",
            Self::SupplyStaked => "Supply Staked (%)",
            Self::AverageYield => "Average Yield (%)",
            Self::Margin => "Margin (%)",
            Self::GrossRevenue => "Gross Revenues ($B)",
            Self::NetRevenue => "Net Revenues ($B)",
            Self::Multiple => "Multiple",
            Self::Valuation => "Valuation ($B)",
            Self::Potential => "Potential (x)",
        }
    }

    /// Get a short label suitable for chart axes
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::TotalSupply => "Supply",
            Self::SupplyStaked => "Staked %",
            Self::AverageYield => "Yield %",
            Self::Margin => "Margin %",
            Self::GrossRevenue => "Gross Rev",
            Self::NetRevenue => "Net Rev",
            Self::Multiple => "Multiple",
            Self::Valuation => "Valuation",
            Self::Potential => "Potential",
        }
    }

    /// Project the field's value out of a metrics result
    #[must_use]
    pub fn value_of(&self, metrics: &ValuationMetrics) -> f64 {
        match self {
            Self::TotalSupply => metrics.total_supply,
            Self::SupplyStaked => metrics.supply_staked_pct,
            Self::AverageYield => metrics.average_yield_pct,
            Self::Margin => metrics.margin_pct,
            Self::GrossRevenue => metrics.gross_revenue,
            Self::NetRevenue => metrics.net_revenue,
            Self::Multiple => metrics.multiple,
            Self::Valuation => metrics.valuation,
            Self::Potential => metrics.potential,
        }
    }
}

/// Derived financial outputs of one engine run.
///
/// Kept at full precision: rounding for display happens in the comparison
/// builder, so repeated recomputes never accumulate rounding drift. The five
/// input fields are carried through as a copy for display alongside the
/// derived ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationMetrics {
    pub total_supply: f64,
    pub supply_staked_pct: f64,
    pub average_yield_pct: f64,
    pub margin_pct: f64,
    /// Gross annual revenue, in billions
    pub gross_revenue: f64,
    /// Net annual revenue after margin, in billions
    pub net_revenue: f64,
    pub multiple: f64,
    /// Implied valuation, in billions
    pub valuation: f64,
    /// Dimensionless upside ratio relative to the variant's reference
    pub potential: f64,
}

impl ValuationMetrics {
    /// Assemble a result from the pass-through inputs and derived values
    #[must_use]
    pub fn from_parts(
        assumptions: &Assumptions,
        gross_revenue: f64,
        net_revenue: f64,
        valuation: f64,
        potential: f64,
    ) -> Self {
        Self {
            total_supply: assumptions.total_supply,
            supply_staked_pct: assumptions.supply_staked_pct,
            average_yield_pct: assumptions.average_yield_pct,
            margin_pct: assumptions.margin_pct,
            gross_revenue,
            net_revenue,
            multiple: assumptions.multiple,
            valuation,
            potential,
        }
    }
}
