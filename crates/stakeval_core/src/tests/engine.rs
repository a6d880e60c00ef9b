//! Tests for the valuation engine
//!
//! These tests verify that:
//! - Both formula variants produce the documented worked examples
//! - The engine is a pure function of its inputs
//! - Zero divisors yield potential = 0 instead of infinity or a panic
//! - Input fields pass through to the result unchanged

use crate::engine::{Variant, compute};
use crate::model::{Assumptions, Baseline};

const TOLERANCE: f64 = 1e-9;

fn model_assumptions() -> Assumptions {
    Assumptions::new(20.0, 50.0, 8.0, 80.0, 25.0).unwrap()
}

/// Worked example for the stake-revenue variant
#[test]
fn test_stake_revenue_example() {
    let metrics = compute(&model_assumptions(), Variant::StakeRevenue, 0.0);

    // gross = 20 * 0.50 * 0.08 = 0.8
    assert!((metrics.gross_revenue - 0.8).abs() < TOLERANCE);
    // net = 0.8 * 0.80 = 0.64
    assert!((metrics.net_revenue - 0.64).abs() < TOLERANCE);
    // valuation = 0.64 * 25 = 16.0
    assert!((metrics.valuation - 16.0).abs() < TOLERANCE);
    // potential = 16.0 / 20 = 0.8
    assert!((metrics.potential - 0.8).abs() < TOLERANCE);
}

/// Worked example for the unstaked-yield variant, divided by the baseline
/// valuation
#[test]
fn test_unstaked_yield_example() {
    let metrics = compute(&model_assumptions(), Variant::UnstakedYield, 1.1);

    // gross = 20 * 0.08 = 1.6
    assert!((metrics.gross_revenue - 1.6).abs() < TOLERANCE);
    // net = 1.6 * (1 - 0.50) * 0.80 = 0.64
    assert!((metrics.net_revenue - 0.64).abs() < TOLERANCE);
    assert!((metrics.valuation - 16.0).abs() < TOLERANCE);
    // potential = 16.0 / 1.1
    assert!((metrics.potential - 16.0 / 1.1).abs() < TOLERANCE);
}

#[test]
fn test_compute_is_deterministic() {
    let assumptions = model_assumptions();
    let first = compute(&assumptions, Variant::UnstakedYield, 1.1);
    let second = compute(&assumptions, Variant::UnstakedYield, 1.1);
    assert_eq!(first, second);
}

/// Zero supply is in domain: everything proportional to supply is 0 and the
/// stake-revenue potential falls back to 0 instead of dividing by zero.
#[test]
fn test_stake_revenue_zero_supply() {
    let assumptions = Assumptions::new(0.0, 50.0, 8.0, 80.0, 25.0).unwrap();
    let metrics = compute(&assumptions, Variant::StakeRevenue, 0.0);

    assert_eq!(metrics.gross_revenue, 0.0);
    assert_eq!(metrics.net_revenue, 0.0);
    assert_eq!(metrics.valuation, 0.0);
    assert_eq!(metrics.potential, 0.0);
    assert!(metrics.potential.is_finite());
}

#[test]
fn test_unstaked_yield_zero_baseline_valuation() {
    let metrics = compute(&model_assumptions(), Variant::UnstakedYield, 0.0);

    // Revenue fields are unaffected by the reference valuation
    assert!((metrics.valuation - 16.0).abs() < TOLERANCE);
    assert_eq!(metrics.potential, 0.0);
}

#[test]
fn test_inputs_pass_through_to_result() {
    let assumptions = model_assumptions();
    let metrics = compute(&assumptions, Variant::StakeRevenue, 0.0);

    assert_eq!(metrics.total_supply, assumptions.total_supply);
    assert_eq!(metrics.supply_staked_pct, assumptions.supply_staked_pct);
    assert_eq!(metrics.average_yield_pct, assumptions.average_yield_pct);
    assert_eq!(metrics.margin_pct, assumptions.margin_pct);
    assert_eq!(metrics.multiple, assumptions.multiple);
}

/// Fully-staked supply earns nothing in the unstaked-yield variant
#[test]
fn test_unstaked_yield_full_stake_zeroes_net() {
    let assumptions = Assumptions::new(20.0, 100.0, 8.0, 80.0, 25.0).unwrap();
    let metrics = compute(&assumptions, Variant::UnstakedYield, 1.1);

    assert!((metrics.gross_revenue - 1.6).abs() < TOLERANCE);
    assert!(metrics.net_revenue.abs() < TOLERANCE);
    assert!(metrics.valuation.abs() < TOLERANCE);
}

/// A recomputed baseline has no reference valuation of its own, so its
/// unstaked-yield potential is 0.
#[test]
fn test_recomputed_baseline_potential_is_zero() {
    let baseline = Baseline::recomputed(model_assumptions(), Variant::UnstakedYield);
    assert_eq!(baseline.metrics.potential, 0.0);
    assert!((baseline.metrics.valuation - 16.0).abs() < TOLERANCE);
}

#[test]
fn test_recomputed_baseline_stake_revenue() {
    let baseline = Baseline::recomputed(model_assumptions(), Variant::StakeRevenue);
    assert!((baseline.metrics.potential - 0.8).abs() < TOLERANCE);
    assert!(baseline.as_of.is_none());
}
