//! Comparison builder: turns baseline + model metrics into the display-ready
//! table and chart series.
//!
//! Rounding to 2 decimals lives here and only here; the engine's stored
//! results stay at full precision.

use crate::model::{MetricField, ValuationMetrics};

/// Scenario label of the baseline row
pub const CURRENT_LABEL: &str = "Current";
/// Scenario label of the user-driven row
pub const MODEL_LABEL: &str = "Model";

/// Chart fields used when a preset does not name its own: the three
/// monetary/valuation fields.
pub const DEFAULT_CHART_FIELDS: [MetricField; 3] = [
    MetricField::TotalSupply,
    MetricField::NetRevenue,
    MetricField::Valuation,
];

/// One labeled scenario row, values in [`MetricField::ALL`] order, rounded
/// to 2 decimals for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub scenario: &'static str,
    pub values: [f64; MetricField::ALL.len()],
}

impl ComparisonRow {
    fn new(scenario: &'static str, metrics: &ValuationMetrics) -> Self {
        let mut values = [0.0; MetricField::ALL.len()];
        for (slot, field) in values.iter_mut().zip(MetricField::ALL) {
            *slot = round_display(field.value_of(metrics));
        }
        Self { scenario, values }
    }

    /// Read a field's display value
    #[must_use]
    pub fn value_of(&self, field: MetricField) -> f64 {
        let idx = MetricField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
        self.values[idx]
    }
}

/// The ordered two-row comparison: Current first, Model second.
///
/// Rebuilt in full on every recompute and handed whole to the renderers, so
/// table and chart can never show rows from different cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    rows: [ComparisonRow; 2],
}

impl ComparisonTable {
    /// Assemble the two rows from the baseline's and the model's metrics
    #[must_use]
    pub fn build(baseline: &ValuationMetrics, model: &ValuationMetrics) -> Self {
        Self {
            rows: [
                ComparisonRow::new(CURRENT_LABEL, baseline),
                ComparisonRow::new(MODEL_LABEL, model),
            ],
        }
    }

    /// The rows in fixed order: Current, Model
    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow; 2] {
        &self.rows
    }

    #[must_use]
    pub fn current(&self) -> &ComparisonRow {
        &self.rows[0]
    }

    #[must_use]
    pub fn model(&self) -> &ComparisonRow {
        &self.rows[1]
    }

    /// Extract parallel series for a grouped bar chart.
    ///
    /// The field list comes from validated configuration, so both rows
    /// always yield one value per label and the three output arrays share
    /// length and index order.
    #[must_use]
    pub fn chart_series(&self, fields: &[MetricField]) -> ChartData {
        let labels = fields.iter().map(|f| f.label().to_string()).collect();
        let current = fields.iter().map(|f| self.rows[0].value_of(*f)).collect();
        let model = fields.iter().map(|f| self.rows[1].value_of(*f)).collect();
        ChartData {
            labels,
            current,
            model,
        }
    }
}

/// Chart-ready series: one shared label array plus one value array per
/// scenario, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub current: Vec<f64>,
    pub model: Vec<f64>,
}

/// The one-sentence upside summary shown under the chart
#[must_use]
pub fn potential_summary(metrics: &ValuationMetrics) -> String {
    format!(
        "Based on your inputs, the upside potential is {:.2}x",
        metrics.potential
    )
}

/// Round a value to 2 decimal places for display
#[must_use]
pub fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
