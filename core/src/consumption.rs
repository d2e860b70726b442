//! Per-segment consumption and cost figures.
//!
//! The `consumption` and `cost_per_distance` functions return `None` when
//! the figure is not computable. The `compute_*` variants collapse that to
//! the `0.0` sentinel for callers that need a plain number.

use crate::units::GALLONS_PER_LITER;

/// Fuel consumption between two odometer readings, filled at `current`.
///
/// Metric: liters per 100 distance units (lower is better).
/// Imperial: distance units per US gallon (higher is better).
pub fn consumption(
    current_odometer: f64,
    previous_odometer: f64,
    volume: f64,
    is_metric: bool,
) -> Option<f64> {
    if !(current_odometer > previous_odometer) || !(volume > 0.0) {
        return None;
    }

    let distance = current_odometer - previous_odometer;
    let value = if is_metric {
        (volume / distance) * 100.0
    } else {
        distance / (volume * GALLONS_PER_LITER)
    };

    value.is_finite().then_some(value)
}

/// Cost per distance unit. Identical for both unit systems.
pub fn cost_per_distance(total_cost: f64, distance: f64) -> Option<f64> {
    if !(distance > 0.0) {
        return None;
    }
    let value = total_cost / distance;
    value.is_finite().then_some(value)
}

pub fn compute_consumption(
    current_odometer: f64,
    previous_odometer: f64,
    volume: f64,
    is_metric: bool,
) -> f64 {
    consumption(current_odometer, previous_odometer, volume, is_metric).unwrap_or(0.0)
}

pub fn compute_cost_per_distance(total_cost: f64, distance: f64, _is_metric: bool) -> f64 {
    cost_per_distance(total_cost, distance).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_consumption() {
        let value = compute_consumption(15_000.0, 14_700.0, 30.0, true);
        assert!((value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_imperial_consumption() {
        // 300 miles on 7.925 L (~2.0936 gal)
        let value = compute_consumption(15_000.0, 14_700.0, 7.925, false);
        let expected = 300.0 / (7.925 * 0.264172);
        assert!((value - expected).abs() < 1e-9);
        assert!((value - 143.296).abs() < 0.01);
    }

    #[test]
    fn test_consumption_not_computable() {
        assert_eq!(compute_consumption(14_700.0, 14_700.0, 30.0, true), 0.0);
        assert_eq!(compute_consumption(14_000.0, 14_700.0, 30.0, true), 0.0);
        assert_eq!(compute_consumption(15_000.0, 14_700.0, 0.0, true), 0.0);
        assert_eq!(compute_consumption(15_000.0, 14_700.0, -5.0, false), 0.0);
        assert_eq!(compute_consumption(f64::NAN, 14_700.0, 30.0, true), 0.0);
        assert!(consumption(15_000.0, 14_700.0, f64::NAN, true).is_none());
    }

    #[test]
    fn test_cost_per_distance() {
        let metric = compute_cost_per_distance(60.0, 300.0, true);
        let imperial = compute_cost_per_distance(60.0, 300.0, false);
        assert!((metric - 0.2).abs() < 1e-12);
        assert_eq!(metric, imperial);
    }

    #[test]
    fn test_cost_per_distance_zero_distance() {
        assert_eq!(compute_cost_per_distance(60.0, 0.0, true), 0.0);
        assert_eq!(compute_cost_per_distance(60.0, -10.0, false), 0.0);
        assert!(cost_per_distance(60.0, 0.0).is_none());
    }
}
