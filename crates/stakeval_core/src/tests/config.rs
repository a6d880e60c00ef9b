//! Tests for model presets and configuration validation

use crate::config::{BaselineSpec, ModelConfig};
use crate::engine::Variant;
use crate::model::{AssumptionField, Assumptions, MetricField};
use crate::error::ConfigError;

#[test]
fn test_builtin_presets_validate() {
    for preset in ModelConfig::presets() {
        preset
            .validate()
            .unwrap_or_else(|e| panic!("preset {} invalid: {e}", preset.name));
    }
}

#[test]
fn test_sky_preset_constants() {
    let sky = ModelConfig::sky();
    assert_eq!(sky.variant, Variant::UnstakedYield);

    let baseline = sky.baseline();
    assert_eq!(baseline.assumptions.total_supply, 6.0);
    assert_eq!(baseline.assumptions.supply_staked_pct, 45.0);
    assert_eq!(baseline.assumptions.average_yield_pct, 4.5);
    assert_eq!(baseline.assumptions.margin_pct, 100.0);
    assert_eq!(baseline.assumptions.multiple, 8.0);
    assert_eq!(baseline.metrics.gross_revenue, 0.29);
    assert_eq!(baseline.metrics.net_revenue, 0.18);
    assert_eq!(baseline.metrics.valuation, 1.1);
    assert_eq!(baseline.metrics.potential, 0.0);
    assert!(baseline.as_of.is_some());
}

#[test]
fn test_sky_preset_defaults_and_bounds() {
    let sky = ModelConfig::sky();
    let defaults = sky.inputs.defaults().unwrap();
    assert_eq!(defaults.total_supply, 20.0);
    assert_eq!(defaults.supply_staked_pct, 50.0);
    assert_eq!(defaults.average_yield_pct, 8.0);
    assert_eq!(defaults.margin_pct, 80.0);
    assert_eq!(defaults.multiple, 25.0);

    let staked = sky.inputs.spec(AssumptionField::SupplyStaked);
    assert_eq!((staked.min, staked.max, staked.step), (20.0, 100.0, 1.0));
}

#[test]
fn test_stake_revenue_preset_recomputes_baseline() {
    let preset = ModelConfig::stake_revenue();
    assert_eq!(preset.variant, Variant::StakeRevenue);

    // Baseline is the default assumptions run through variant A
    let baseline = preset.baseline();
    assert!((baseline.metrics.gross_revenue - 0.8).abs() < 1e-9);
    assert!((baseline.metrics.net_revenue - 0.64).abs() < 1e-9);
    assert!((baseline.metrics.valuation - 16.0).abs() < 1e-9);
    assert!((baseline.metrics.potential - 0.8).abs() < 1e-9);
}

#[test]
fn test_validate_rejects_default_outside_bounds() {
    let mut config = ModelConfig::sky();
    config.inputs.multiple.default = 5.0; // below min 10
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBounds {
            field: AssumptionField::Multiple,
            ..
        })
    ));
}

#[test]
fn test_validate_rejects_nonpositive_step() {
    let mut config = ModelConfig::sky();
    config.inputs.total_supply.step = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBounds { .. })
    ));
}

#[test]
fn test_validate_rejects_percentage_bounds_over_100() {
    let mut config = ModelConfig::sky();
    config.inputs.margin_pct.max = 120.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BoundsOutsideDomain {
            field: AssumptionField::Margin,
            ..
        })
    ));
}

#[test]
fn test_validate_rejects_empty_chart_fields() {
    let mut config = ModelConfig::sky();
    config.chart_fields.clear();
    assert_eq!(config.validate(), Err(ConfigError::EmptyChartFields));
}

#[test]
fn test_validate_rejects_duplicate_chart_field() {
    let mut config = ModelConfig::sky();
    config.chart_fields.push(MetricField::Valuation);
    assert_eq!(
        config.validate(),
        Err(ConfigError::DuplicateChartField(MetricField::Valuation))
    );
}

#[test]
fn test_validate_rejects_out_of_domain_baseline() {
    let mut config = ModelConfig::stake_revenue();
    config.baseline = BaselineSpec::Recomputed {
        assumptions: Assumptions {
            total_supply: 20.0,
            supply_staked_pct: 150.0,
            average_yield_pct: 8.0,
            margin_pct: 80.0,
            multiple: 25.0,
        },
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBaseline(_))
    ));
}

#[test]
fn test_validate_rejects_negative_observed_metric() {
    let mut config = ModelConfig::sky();
    if let BaselineSpec::Observed { valuation, .. } = &mut config.baseline {
        *valuation = -1.0;
    }
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBaselineMetric {
            metric: MetricField::Valuation,
            ..
        })
    ));
}

#[test]
fn test_input_spec_adjust_clamps() {
    let sky = ModelConfig::sky();
    let spec = sky.inputs.spec(AssumptionField::AverageYield);

    assert_eq!(spec.adjust(8.0, 1), 9.0);
    assert_eq!(spec.adjust(8.0, -10), spec.min);
    assert_eq!(spec.adjust(8.0, 100), spec.max);
    // Stepping never leaves [min, max] from any in-range start
    assert_eq!(spec.adjust(spec.max, 1), spec.max);
    assert_eq!(spec.adjust(spec.min, -1), spec.min);
}
