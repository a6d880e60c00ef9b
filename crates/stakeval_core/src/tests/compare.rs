//! Tests for the comparison builder
//!
//! These tests verify that:
//! - The table always has exactly two rows, Current then Model
//! - Display values are rounded to 2 decimals, idempotently
//! - Chart series stay index-aligned with their label array
//! - The summary sentence reports potential to 2 decimals

use crate::compare::{
    CURRENT_LABEL, ComparisonTable, DEFAULT_CHART_FIELDS, MODEL_LABEL, potential_summary,
    round_display,
};
use crate::engine::{Variant, compute};
use crate::model::{Assumptions, MetricField, ValuationMetrics};

fn sample_table() -> ComparisonTable {
    let baseline_assumptions = Assumptions::new(6.0, 45.0, 4.5, 100.0, 8.0).unwrap();
    let model_assumptions = Assumptions::new(20.0, 50.0, 8.0, 80.0, 25.0).unwrap();

    let baseline = compute(&baseline_assumptions, Variant::UnstakedYield, 0.0);
    let model = compute(&model_assumptions, Variant::UnstakedYield, baseline.valuation);
    ComparisonTable::build(&baseline, &model)
}

#[test]
fn test_build_returns_two_ordered_rows() {
    let table = sample_table();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.current().scenario, CURRENT_LABEL);
    assert_eq!(table.model().scenario, MODEL_LABEL);
}

#[test]
fn test_rows_share_field_order() {
    let table = sample_table();
    assert_eq!(table.current().values.len(), MetricField::ALL.len());
    assert_eq!(table.model().values.len(), MetricField::ALL.len());

    // Positional lookup and field lookup agree on both rows
    for (i, field) in MetricField::ALL.iter().enumerate() {
        assert_eq!(table.current().values[i], table.current().value_of(*field));
        assert_eq!(table.model().values[i], table.model().value_of(*field));
    }
}

#[test]
fn test_display_values_rounded_to_two_decimals() {
    let model_assumptions = Assumptions::new(20.0, 50.0, 8.0, 80.0, 25.0).unwrap();
    let model = compute(&model_assumptions, Variant::UnstakedYield, 1.1);
    let table = ComparisonTable::build(&model, &model);

    // 16.0 / 1.1 = 14.5454... displays as 14.55
    assert_eq!(table.model().value_of(MetricField::Potential), 14.55);
    // Full precision survives in the metrics themselves
    assert!((model.potential - 16.0 / 1.1).abs() < 1e-9);
}

#[test]
fn test_rounding_is_idempotent() {
    for value in [14.5454545, 0.005, 123.456, 0.0, 99.999] {
        let once = round_display(value);
        assert_eq!(round_display(once), once);
    }
}

#[test]
fn test_chart_series_aligned_with_labels() {
    let table = sample_table();
    let data = table.chart_series(&DEFAULT_CHART_FIELDS);

    assert_eq!(data.labels.len(), DEFAULT_CHART_FIELDS.len());
    assert_eq!(data.current.len(), data.labels.len());
    assert_eq!(data.model.len(), data.labels.len());

    for (i, field) in DEFAULT_CHART_FIELDS.iter().enumerate() {
        assert_eq!(data.labels[i], field.label());
        assert_eq!(data.current[i], table.current().value_of(*field));
        assert_eq!(data.model[i], table.model().value_of(*field));
    }
}

#[test]
fn test_chart_series_respects_caller_field_subset() {
    let table = sample_table();
    let fields = [MetricField::Potential];
    let data = table.chart_series(&fields);

    assert_eq!(data.labels, vec!["Potential (x)"]);
    assert_eq!(data.current.len(), 1);
    assert_eq!(data.model.len(), 1);
}

#[test]
fn test_potential_summary_two_decimals() {
    let assumptions = Assumptions::new(20.0, 50.0, 8.0, 80.0, 25.0).unwrap();
    let metrics = compute(&assumptions, Variant::UnstakedYield, 1.1);

    assert_eq!(
        potential_summary(&metrics),
        "Based on your inputs, the upside potential is 14.55x"
    );
}

/// Degenerate all-zero metrics still build a well-formed table
#[test]
fn test_build_with_zero_metrics() {
    let assumptions = Assumptions::new(0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    let metrics = compute(&assumptions, Variant::StakeRevenue, 0.0);
    let table = ComparisonTable::build(&metrics, &metrics);

    assert_eq!(table.rows().len(), 2);
    assert!(table.model().values.iter().all(|v| *v == 0.0));
}

#[test]
fn test_observed_metrics_display_unchanged() {
    // An observed baseline's numbers are displayed as given, not re-derived
    let assumptions = Assumptions::new(6.0, 45.0, 4.5, 100.0, 8.0).unwrap();
    let observed = ValuationMetrics::from_parts(&assumptions, 0.29, 0.18, 1.1, 0.0);
    let table = ComparisonTable::build(&observed, &observed);

    assert_eq!(table.current().value_of(MetricField::GrossRevenue), 0.29);
    assert_eq!(table.current().value_of(MetricField::NetRevenue), 0.18);
    assert_eq!(table.current().value_of(MetricField::Valuation), 1.1);
    assert_eq!(table.current().value_of(MetricField::Potential), 0.0);
}
