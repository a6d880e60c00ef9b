use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The five user-adjustable inputs of the valuation model
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssumptionField {
    TotalSupply,
    SupplyStaked,
    AverageYield,
    Margin,
    Multiple,
}

impl AssumptionField {
    /// All fields in display order
    pub const ALL: [AssumptionField; 5] = [
        AssumptionField::TotalSupply,
        AssumptionField::SupplyStaked,
        AssumptionField::AverageYield,
        AssumptionField::Margin,
        AssumptionField::Multiple,
    ];

    /// Get a display label for the field
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalSupply => "Total Supply ($B)",
            Self::SupplyStaked => "Supply Staked (%)",
            Self::AverageYield => "Average Yield (%)",
            Self::Margin => "Margin (%)",
            Self::Multiple => "Multiple",
        }
    }

    /// Whether the field is stored as a numeric percentage (52 means 52%)
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::SupplyStaked | Self::AverageYield | Self::Margin)
    }
}

/// One immutable assumption set, created fresh for every recompute cycle.
///
/// Percentage fields are stored as their numeric percentage, never
/// pre-divided; division by 100 happens only inside the engine. Construction
/// through [`Assumptions::new`] is the validation boundary: a value of this
/// type is always in domain, so the engine never has to check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Total token supply in circulation, in billions
    pub total_supply: f64,
    /// Share of total supply that is staked, in percent
    pub supply_staked_pct: f64,
    /// Annual average yield paid to stakers, in percent
    pub average_yield_pct: f64,
    /// Share of revenue retained, in percent
    pub margin_pct: f64,
    /// Revenue multiple applied for valuation
    pub multiple: f64,
}

impl Assumptions {
    /// Build a validated assumption set.
    ///
    /// Percentages must lie in [0, 100]; supply and multiple must be finite
    /// and non-negative. Zero supply is in domain (the engine defines
    /// `potential` as 0 in that case rather than dividing by zero).
    pub fn new(
        total_supply: f64,
        supply_staked_pct: f64,
        average_yield_pct: f64,
        margin_pct: f64,
        multiple: f64,
    ) -> Result<Self, ValidationError> {
        check_range(AssumptionField::TotalSupply, total_supply, 0.0, f64::INFINITY)?;
        check_range(AssumptionField::SupplyStaked, supply_staked_pct, 0.0, 100.0)?;
        check_range(AssumptionField::AverageYield, average_yield_pct, 0.0, 100.0)?;
        check_range(AssumptionField::Margin, margin_pct, 0.0, 100.0)?;
        check_range(AssumptionField::Multiple, multiple, 0.0, f64::INFINITY)?;

        Ok(Self {
            total_supply,
            supply_staked_pct,
            average_yield_pct,
            margin_pct,
            multiple,
        })
    }

    /// Read a field by its selector
    #[must_use]
    pub fn value_of(&self, field: AssumptionField) -> f64 {
        match field {
            AssumptionField::TotalSupply => self.total_supply,
            AssumptionField::SupplyStaked => self.supply_staked_pct,
            AssumptionField::AverageYield => self.average_yield_pct,
            AssumptionField::Margin => self.margin_pct,
            AssumptionField::Multiple => self.multiple,
        }
    }

    /// Return a copy with one field replaced, revalidating the result
    pub fn with_value(
        &self,
        field: AssumptionField,
        value: f64,
    ) -> Result<Self, ValidationError> {
        let mut next = *self;
        match field {
            AssumptionField::TotalSupply => next.total_supply = value,
            AssumptionField::SupplyStaked => next.supply_staked_pct = value,
            AssumptionField::AverageYield => next.average_yield_pct = value,
            AssumptionField::Margin => next.margin_pct = value,
            AssumptionField::Multiple => next.multiple = value,
        }
        Self::new(
            next.total_supply,
            next.supply_staked_pct,
            next.average_yield_pct,
            next.margin_pct,
            next.multiple,
        )
    }

    /// Revalidate a deserialized value (serde bypasses `new`)
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::new(
            self.total_supply,
            self.supply_staked_pct,
            self.average_yield_pct,
            self.margin_pct,
            self.multiple,
        )
        .map(|_| ())
    }
}

fn check_range(
    field: AssumptionField,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
