//! Owned-argument entry points exported through `fuellog.udl`.
//!
//! These wrap the borrowing API for the binding layer and collapse
//! "not computable" results to `0.0`.

use crate::error::{ExportError, ValidationError};
use crate::export;
use crate::metrics::{self, FuelStats, FuelSummary, MonthlySpend, TrendPoint};
use crate::models::{AppSettings, RefuelRecord, VehicleInfo};
use crate::ordering::{self, LogSort, OrderedRecords};
use crate::trip::{self, TripEstimate};
use crate::validation::{self, ValidationLimits, ValidationWarning};

/// Flattened view of a segment for foreign callers.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentReport {
    pub earlier_id: String,
    pub later_id: String,
    pub valid: bool,
    pub distance: f64,
    pub consumption: f64,
    pub cost_per_distance: f64,
}

pub fn odometer_segments(records: Vec<RefuelRecord>, is_metric: bool) -> Vec<SegmentReport> {
    let ordered = OrderedRecords::new(&records);
    let segments = ordered.segments(is_metric);
    segments
        .iter()
        .map(|segment| {
            let figures = segment.figures;
            SegmentReport {
                earlier_id: segment.earlier.id.clone(),
                later_id: segment.later.id.clone(),
                valid: segment.is_valid(),
                distance: segment.distance(),
                consumption: segment.consumption().unwrap_or(0.0),
                cost_per_distance: figures.and_then(|f| f.cost_per_distance).unwrap_or(0.0),
            }
        })
        .collect()
}

pub fn sort_records_for_display(records: Vec<RefuelRecord>, sort: LogSort) -> Vec<RefuelRecord> {
    ordering::sorted_for_display(&records, sort)
        .into_iter()
        .cloned()
        .collect()
}

pub fn compute_stats(records: Vec<RefuelRecord>, is_metric: bool) -> FuelStats {
    FuelStats::compute(&records, is_metric)
}

pub fn compute_summary(records: Vec<RefuelRecord>, settings: AppSettings) -> FuelSummary {
    FuelSummary::compute(&records, &settings)
}

pub fn average_price(records: Vec<RefuelRecord>) -> f64 {
    metrics::average_price(&records)
}

pub fn record_consumption(records: Vec<RefuelRecord>, id: &str, is_metric: bool) -> f64 {
    metrics::record_consumption(&records, id, is_metric).unwrap_or(0.0)
}

pub fn monthly_spending(records: Vec<RefuelRecord>) -> Vec<MonthlySpend> {
    metrics::monthly_spending(&records)
}

pub fn price_trend(records: Vec<RefuelRecord>) -> Vec<TrendPoint> {
    metrics::price_trend(&records)
}

pub fn consumption_trend(records: Vec<RefuelRecord>, is_metric: bool) -> Vec<TrendPoint> {
    metrics::consumption_trend(&records, is_metric)
}

pub fn estimate_trip(
    distance: f64,
    assumed_consumption: f64,
    avg_price_per_liter: f64,
    is_metric: bool,
) -> TripEstimate {
    trip::estimate(distance, assumed_consumption, avg_price_per_liter, is_metric)
}

pub fn trip_price_basis(records: Vec<RefuelRecord>) -> f64 {
    trip::price_basis(&records)
}

pub fn validate_record(
    candidate: RefuelRecord,
    existing: Vec<RefuelRecord>,
) -> Result<Vec<ValidationWarning>, ValidationError> {
    validation::validate(&candidate, &existing)
}

pub fn validate_record_edit(
    candidate: RefuelRecord,
) -> Result<Vec<ValidationWarning>, ValidationError> {
    validation::validate_edit_with_limits(&candidate, &ValidationLimits::default())
}

pub fn warning_message(warning: ValidationWarning) -> String {
    warning.message().to_string()
}

pub fn vehicle_display_name(vehicle: VehicleInfo) -> String {
    vehicle.display_name()
}

pub fn export_csv(records: Vec<RefuelRecord>) -> Result<String, ExportError> {
    export::to_csv(&records)
}

pub fn export_json(
    records: Vec<RefuelRecord>,
    vehicle: Option<VehicleInfo>,
    export_date_unix: i64,
) -> Result<String, ExportError> {
    export::to_json(&records, vehicle.as_ref(), export_date_unix)
}
