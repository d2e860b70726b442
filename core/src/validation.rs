//! Admission checks for a new or edited refuel record.
//!
//! Hard failures ([`ValidationError`]) block admission. Warnings are
//! informational: the record is admitted once the user confirms it, and
//! any figure that then cannot be computed is reported as unavailable
//! rather than failing.

use tracing::warn;

use crate::error::{RecordField, ValidationError};
use crate::models::RefuelRecord;
use crate::ordering::OrderedRecords;

/// A suspicious but plausible value that needs user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarning {
    HighVolume,
    HighPrice,
    HighOdometer,
    /// The odometer does not exceed the most recent (by date) record's.
    OdometerNotIncreasing,
}

impl ValidationWarning {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationWarning::HighVolume => "The fuel amount seems unusually high.",
            ValidationWarning::HighPrice => "The price per liter seems unusually high.",
            ValidationWarning::HighOdometer => "The odometer reading seems unusually high.",
            ValidationWarning::OdometerNotIncreasing => {
                "The odometer should be higher than the last entry. Distance and consumption for this entry may not be computed."
            }
        }
    }
}

/// Upper bounds above which a value is flagged for confirmation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    /// Liters.
    pub max_volume: f64,
    /// Currency units per liter.
    pub max_unit_price: f64,
    pub max_odometer: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_volume: 200.0,
            max_unit_price: 10.0,
            max_odometer: 1_000_000.0,
        }
    }
}

/// Validate `candidate` against the existing collection with the default
/// limits. See [`validate_with_limits`].
pub fn validate(
    candidate: &RefuelRecord,
    existing: &[RefuelRecord],
) -> Result<Vec<ValidationWarning>, ValidationError> {
    validate_with_limits(candidate, existing, &ValidationLimits::default())
}

/// Returns the warnings the user must confirm for a new record, or the
/// first hard failure.
pub fn validate_with_limits(
    candidate: &RefuelRecord,
    existing: &[RefuelRecord],
    limits: &ValidationLimits,
) -> Result<Vec<ValidationWarning>, ValidationError> {
    let mut warnings = check_values(candidate, limits)?;

    let ordered = OrderedRecords::new(existing);
    if let Some(last) = ordered.latest() {
        if candidate.odometer <= last.odometer {
            warnings.push(ValidationWarning::OdometerNotIncreasing);
        }
    }

    report(candidate, &warnings);
    Ok(warnings)
}

/// Checks for an edit of an existing record. Edited records keep their
/// place in the log, so the chronology check does not apply.
pub fn validate_edit_with_limits(
    candidate: &RefuelRecord,
    limits: &ValidationLimits,
) -> Result<Vec<ValidationWarning>, ValidationError> {
    let warnings = check_values(candidate, limits)?;
    report(candidate, &warnings);
    Ok(warnings)
}

fn check_values(
    candidate: &RefuelRecord,
    limits: &ValidationLimits,
) -> Result<Vec<ValidationWarning>, ValidationError> {
    check_positive(RecordField::Odometer, candidate.odometer)?;
    check_positive(RecordField::Volume, candidate.volume)?;
    check_positive(RecordField::UnitPrice, candidate.unit_price)?;

    let mut warnings = Vec::new();

    if candidate.volume > limits.max_volume {
        warnings.push(ValidationWarning::HighVolume);
    }
    if candidate.unit_price > limits.max_unit_price {
        warnings.push(ValidationWarning::HighPrice);
    }
    if candidate.odometer > limits.max_odometer {
        warnings.push(ValidationWarning::HighOdometer);
    }

    Ok(warnings)
}

fn report(candidate: &RefuelRecord, warnings: &[ValidationWarning]) {
    if !warnings.is_empty() {
        warn!(id = %candidate.id, ?warnings, "record needs confirmation");
    }
}

fn check_positive(field: RecordField, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        warn!(field = field.label(), "rejecting non-numeric value");
        return Err(ValidationError::NonNumeric { field });
    }
    if value <= 0.0 {
        warn!(field = field.label(), value, "rejecting non-positive value");
        return Err(ValidationError::NonPositive { field });
    }
    Ok(())
}
