//! Canonical orderings of a record collection.
//!
//! Two orderings are derived from the same records and must not be
//! substituted for each other:
//!
//! - **odometer order** drives every distance and consumption figure;
//! - **date order** drives time series and "previous record" lookups.
//!
//! Records may be supplied in any order, with repeated or regressing
//! odometer readings. Adjacent odometer-ordered pairs become [`Segment`]s;
//! a segment is valid only when the later odometer strictly exceeds the
//! earlier one.

use std::cmp::Ordering;

use tracing::debug;

use crate::consumption;
use crate::models::RefuelRecord;

/// Figures derived for a valid segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFigures {
    /// Odometer delta, always > 0.
    pub distance: f64,
    /// Consumption using the later record's volume. `None` when the later
    /// volume is not positive.
    pub consumption: Option<f64>,
    /// Later record's total cost over the distance.
    pub cost_per_distance: Option<f64>,
}

/// Two odometer-adjacent records.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub earlier: &'a RefuelRecord,
    pub later: &'a RefuelRecord,
    /// `None` for invalid (tied or regressing) segments.
    pub figures: Option<SegmentFigures>,
}

impl<'a> Segment<'a> {
    pub fn new(earlier: &'a RefuelRecord, later: &'a RefuelRecord, is_metric: bool) -> Self {
        let figures = if later.odometer > earlier.odometer {
            let distance = later.odometer - earlier.odometer;
            Some(SegmentFigures {
                distance,
                consumption: consumption::consumption(
                    later.odometer,
                    earlier.odometer,
                    later.volume,
                    is_metric,
                ),
                cost_per_distance: consumption::cost_per_distance(later.total_cost(), distance),
            })
        } else {
            None
        };

        Segment {
            earlier,
            later,
            figures,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.figures.is_some()
    }

    /// Distance contributed to totals; zero for invalid segments.
    pub fn distance(&self) -> f64 {
        self.figures.map(|f| f.distance).unwrap_or(0.0)
    }

    /// Positive consumption, if this segment has one.
    pub fn consumption(&self) -> Option<f64> {
        self.figures
            .and_then(|f| f.consumption)
            .filter(|c| *c > 0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentCounts {
    pub valid: u32,
    pub invalid: u32,
}

/// Both canonical orderings of a borrowed record collection.
#[derive(Debug, Clone)]
pub struct OrderedRecords<'a> {
    by_odometer: Vec<&'a RefuelRecord>,
    by_date: Vec<&'a RefuelRecord>,
}

impl<'a> OrderedRecords<'a> {
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RefuelRecord>,
    {
        let mut by_odometer: Vec<&RefuelRecord> = records.into_iter().collect();
        let mut by_date = by_odometer.clone();

        by_odometer.sort_by(|a, b| odometer_order(a, b));
        by_date.sort_by(|a, b| date_order(a, b));

        Self {
            by_odometer,
            by_date,
        }
    }

    pub fn len(&self) -> usize {
        self.by_odometer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_odometer.is_empty()
    }

    /// Records in ascending odometer order.
    pub fn by_odometer(&self) -> &[&'a RefuelRecord] {
        &self.by_odometer
    }

    /// Records in ascending date order.
    pub fn by_date(&self) -> &[&'a RefuelRecord] {
        &self.by_date
    }

    /// Every adjacent odometer-ordered pair, valid or not.
    pub fn segments(&self, is_metric: bool) -> Vec<Segment<'a>> {
        let segments: Vec<Segment<'a>> = self
            .by_odometer
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1], is_metric))
            .collect();

        let invalid = segments.iter().filter(|s| !s.is_valid()).count();
        if invalid > 0 {
            debug!(
                invalid,
                total = segments.len(),
                "skipping non-increasing odometer segments"
            );
        }

        segments
    }

    /// Only the segments whose odometer strictly increases.
    pub fn valid_segments(&self, is_metric: bool) -> Vec<Segment<'a>> {
        self.segments(is_metric)
            .into_iter()
            .filter(|s| s.is_valid())
            .collect()
    }

    pub fn segment_counts(&self) -> SegmentCounts {
        self.by_odometer
            .windows(2)
            .fold(SegmentCounts::default(), |mut counts, pair| {
                if pair[1].odometer > pair[0].odometer {
                    counts.valid += 1;
                } else {
                    counts.invalid += 1;
                }
                counts
            })
    }

    /// The record immediately before `id` in date order.
    pub fn previous_by_date(&self, id: &str) -> Option<&'a RefuelRecord> {
        let index = self.by_date.iter().position(|r| r.id == id)?;
        index.checked_sub(1).map(|i| self.by_date[i])
    }

    /// The most recent record by date.
    pub fn latest(&self) -> Option<&'a RefuelRecord> {
        self.by_date.last().copied()
    }

    /// The highest odometer reading recorded.
    pub fn max_odometer(&self) -> Option<f64> {
        self.by_odometer
            .iter()
            .rev()
            .map(|r| r.odometer)
            .find(|o| !o.is_nan())
    }

    pub fn find(&self, id: &str) -> Option<&'a RefuelRecord> {
        self.by_date.iter().copied().find(|r| r.id == id)
    }
}

/// Odometer ascending; ties broken by date, then id, so the order is
/// deterministic regardless of input order.
pub fn odometer_order(a: &RefuelRecord, b: &RefuelRecord) -> Ordering {
    a.odometer
        .total_cmp(&b.odometer)
        .then(a.date_unix.cmp(&b.date_unix))
        .then_with(|| a.id.cmp(&b.id))
}

/// Date ascending; ties broken by odometer, then id.
pub fn date_order(a: &RefuelRecord, b: &RefuelRecord) -> Ordering {
    a.date_unix
        .cmp(&b.date_unix)
        .then(a.odometer.total_cmp(&b.odometer))
        .then_with(|| a.id.cmp(&b.id))
}

/// Presentation orderings offered on the fuel log list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogSort {
    /// Newest first.
    #[default]
    DateDescending,
    DateAscending,
    OdometerDescending,
    OdometerAscending,
    CostDescending,
    CostAscending,
}

/// Total cost ascending; ties fall back to date order.
pub fn cost_order(a: &RefuelRecord, b: &RefuelRecord) -> Ordering {
    a.total_cost()
        .total_cmp(&b.total_cost())
        .then_with(|| date_order(a, b))
}

/// Records arranged for display. Descending variants are the exact
/// reverse of their ascending counterparts.
pub fn sorted_for_display(records: &[RefuelRecord], sort: LogSort) -> Vec<&RefuelRecord> {
    let order: fn(&RefuelRecord, &RefuelRecord) -> Ordering = match sort {
        LogSort::DateDescending | LogSort::DateAscending => date_order,
        LogSort::OdometerDescending | LogSort::OdometerAscending => odometer_order,
        LogSort::CostDescending | LogSort::CostAscending => cost_order,
    };
    let descending = matches!(
        sort,
        LogSort::DateDescending | LogSort::OdometerDescending | LogSort::CostDescending
    );

    let mut sorted: Vec<&RefuelRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        let ordering = order(a, b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}
