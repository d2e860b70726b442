//! Fuel and cost projection for a planned trip.

use crate::metrics;
use crate::models::RefuelRecord;
use crate::units::LITERS_PER_GALLON;

/// Price per liter assumed when there is no refuel history to average.
pub const DEFAULT_PRICE_PER_LITER: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TripEstimate {
    /// Fuel required, in liters.
    pub fuel_needed: f64,
    pub cost: f64,
}

/// Project fuel need and cost for a trip.
///
/// `assumed_consumption` is L/100km for metric and MPG for imperial; the
/// result is always in liters so it can be priced per liter.
pub fn estimate(
    distance: f64,
    assumed_consumption: f64,
    avg_price_per_liter: f64,
    is_metric: bool,
) -> TripEstimate {
    if !(distance > 0.0) || !(assumed_consumption > 0.0) {
        return TripEstimate::default();
    }

    let fuel_needed = if is_metric {
        (distance / 100.0) * assumed_consumption
    } else {
        (distance / assumed_consumption) * LITERS_PER_GALLON
    };

    TripEstimate {
        fuel_needed,
        cost: fuel_needed * avg_price_per_liter,
    }
}

/// Average historical price per liter, or [`DEFAULT_PRICE_PER_LITER`] when
/// there are no records.
pub fn price_basis(records: &[RefuelRecord]) -> f64 {
    if records.is_empty() {
        DEFAULT_PRICE_PER_LITER
    } else {
        metrics::average_price(records)
    }
}
