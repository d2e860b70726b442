//! Aggregate statistics and time series for a refuel log.
//!
//! This module provides pure functions to compute statistics from refuel
//! records. All inputs are plain data structures and every figure is
//! recomputed from the full collection on each call.
//!
//! Figures that cannot be computed are reported as `0.0`: an invalid
//! segment contributes nothing to a sum or an average, and an empty
//! collection yields all-zero statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate};
use tracing::warn;

use crate::models::{AppSettings, RefuelRecord};
use crate::ordering::OrderedRecords;
use crate::units;

/// Scalar statistics over a record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStats {
    pub record_count: u32,
    /// Sum of valid odometer-ordered segment distances.
    pub total_distance: f64,
    /// Sum of every record's total cost.
    pub total_spent: f64,
    /// Sum of every record's volume, in liters.
    pub total_volume: f64,
    /// Mean positive consumption across valid segments.
    pub average_consumption: f64,
    /// Lowest positive segment consumption.
    pub best_consumption: f64,
    /// Highest positive segment consumption.
    pub worst_consumption: f64,
    /// Mean unit price across all records.
    pub average_price: f64,
    /// `total_spent / total_distance`.
    pub cost_per_distance: f64,
    pub valid_segments: u32,
    pub invalid_segments: u32,
}

impl FuelStats {
    /// Compute statistics from an unordered record collection.
    pub fn compute(records: &[RefuelRecord], is_metric: bool) -> Self {
        Self::from_ordered(&OrderedRecords::new(records), is_metric)
    }

    /// Compute statistics from an already ordered collection.
    pub fn from_ordered(ordered: &OrderedRecords<'_>, is_metric: bool) -> Self {
        if ordered.is_empty() {
            return Self::empty();
        }

        let mut total_distance = 0.0;
        let mut consumption_sum = 0.0;
        let mut consumption_count: u32 = 0;
        let mut best: Option<f64> = None;
        let mut worst: Option<f64> = None;

        for segment in ordered.valid_segments(is_metric) {
            total_distance += segment.distance();

            if let Some(consumption) = segment.consumption() {
                consumption_sum += consumption;
                consumption_count += 1;
                best = Some(best.map_or(consumption, |b| b.min(consumption)));
                worst = Some(worst.map_or(consumption, |w| w.max(consumption)));
            }
        }

        let records = ordered.by_date();
        let counts = ordered.segment_counts();
        let total_spent: f64 = records.iter().map(|r| r.total_cost()).sum();
        let total_volume: f64 = records.iter().map(|r| r.volume).sum();

        let average_consumption = if consumption_count > 0 {
            consumption_sum / consumption_count as f64
        } else {
            0.0
        };

        let cost_per_distance = if total_distance > 0.0 {
            total_spent / total_distance
        } else {
            0.0
        };

        FuelStats {
            record_count: records.len() as u32,
            total_distance,
            total_spent,
            total_volume,
            average_consumption,
            best_consumption: best.unwrap_or(0.0),
            worst_consumption: worst.unwrap_or(0.0),
            average_price: mean_unit_price(records.iter().copied()),
            cost_per_distance,
            valid_segments: counts.valid,
            invalid_segments: counts.invalid,
        }
    }

    fn empty() -> Self {
        FuelStats {
            record_count: 0,
            total_distance: 0.0,
            total_spent: 0.0,
            total_volume: 0.0,
            average_consumption: 0.0,
            best_consumption: 0.0,
            worst_consumption: 0.0,
            average_price: 0.0,
            cost_per_distance: 0.0,
            valid_segments: 0,
            invalid_segments: 0,
        }
    }
}

/// Display strings for a [`FuelStats`], rendered with the caller's
/// settings so the presentation layer never formats numbers itself.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsDisplay {
    pub total_distance: String,
    pub total_spent: String,
    pub total_volume: String,
    /// `"N/A"` when no consumption could be computed.
    pub average_consumption: String,
    pub best_consumption: String,
    pub worst_consumption: String,
    pub average_price: String,
    pub cost_per_distance: String,
}

impl StatsDisplay {
    pub fn render(stats: &FuelStats, settings: &AppSettings) -> Self {
        let consumption = |value: f64| {
            if value > 0.0 {
                units::format_consumption(value, settings.is_metric)
            } else {
                "N/A".to_string()
            }
        };
        let currency = |value: f64| units::format_currency(value, &settings.currency);

        StatsDisplay {
            total_distance: units::format_distance(stats.total_distance, settings.is_metric),
            total_spent: currency(stats.total_spent),
            total_volume: units::format_volume(stats.total_volume, settings.is_metric),
            average_consumption: consumption(stats.average_consumption),
            best_consumption: consumption(stats.best_consumption),
            worst_consumption: consumption(stats.worst_consumption),
            average_price: currency(stats.average_price),
            cost_per_distance: currency(stats.cost_per_distance),
        }
    }
}

/// Statistics plus their rendered display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelSummary {
    pub stats: FuelStats,
    pub display: StatsDisplay,
    pub latest_record: Option<RefuelRecord>,
    /// Highest odometer reading, `0.0` when there are no records.
    pub current_odometer: f64,
}

impl FuelSummary {
    pub fn compute(records: &[RefuelRecord], settings: &AppSettings) -> Self {
        let ordered = OrderedRecords::new(records);
        let stats = FuelStats::from_ordered(&ordered, settings.is_metric);
        let display = StatsDisplay::render(&stats, settings);

        FuelSummary {
            stats,
            display,
            latest_record: ordered.latest().cloned(),
            current_odometer: ordered.max_odometer().unwrap_or(0.0),
        }
    }
}

/// A `(date, value)` pair for charting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date_unix: i64,
    pub value: f64,
}

/// Total spending in one calendar month (UTC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySpend {
    /// Midnight UTC on the first day of the month.
    pub month_start_unix: i64,
    pub year: i32,
    pub month: u32,
    pub amount: f64,
}

/// Mean unit price over every record, `0.0` for an empty collection.
pub fn average_price(records: &[RefuelRecord]) -> f64 {
    mean_unit_price(records.iter())
}

fn mean_unit_price<'a>(records: impl ExactSizeIterator<Item = &'a RefuelRecord>) -> f64 {
    let count = records.len();
    if count == 0 {
        return 0.0;
    }
    records.map(|r| r.unit_price).sum::<f64>() / count as f64
}

/// Consumption figure for a single record, measured against the record
/// entered immediately before it in time.
pub fn record_consumption(records: &[RefuelRecord], id: &str, is_metric: bool) -> Option<f64> {
    let ordered = OrderedRecords::new(records);
    let current = ordered.find(id)?;
    let previous = ordered.previous_by_date(id)?;
    crate::consumption::consumption(
        current.odometer,
        previous.odometer,
        current.volume,
        is_metric,
    )
}

/// Spending grouped by calendar month, ascending.
pub fn monthly_spending(records: &[RefuelRecord]) -> Vec<MonthlySpend> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for record in records {
        let Some(date) = DateTime::from_timestamp(record.date_unix, 0) else {
            warn!(id = %record.id, date_unix = record.date_unix, "timestamp out of range, skipping");
            continue;
        };
        *buckets.entry((date.year(), date.month())).or_insert(0.0) += record.total_cost();
    }

    buckets
        .into_iter()
        .filter_map(|((year, month), amount)| {
            let month_start_unix = NaiveDate::from_ymd_opt(year, month, 1)?
                .and_hms_opt(0, 0, 0)?
                .and_utc()
                .timestamp();
            Some(MonthlySpend {
                month_start_unix,
                year,
                month,
                amount,
            })
        })
        .collect()
}

/// Unit price over time, date ascending.
pub fn price_trend(records: &[RefuelRecord]) -> Vec<TrendPoint> {
    OrderedRecords::new(records)
        .by_date()
        .iter()
        .map(|r| TrendPoint {
            date_unix: r.date_unix,
            value: r.unit_price,
        })
        .collect()
}

/// Consumption per valid segment, dated by the later record.
///
/// Points follow odometer order, not date order; the two only differ when
/// records were entered out of sequence.
pub fn consumption_trend(records: &[RefuelRecord], is_metric: bool) -> Vec<TrendPoint> {
    OrderedRecords::new(records)
        .valid_segments(is_metric)
        .iter()
        .filter_map(|segment| {
            segment.consumption().map(|value| TrendPoint {
                date_unix: segment.later.date_unix,
                value,
            })
        })
        .collect()
}
