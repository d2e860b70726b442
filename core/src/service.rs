//! Record admission and queries on top of a [`Storage`] backend.

use tracing::{debug, info};

use crate::error::{AdmissionError, StorageError};
use crate::metrics::{self, FuelSummary};
use crate::models::{AppSettings, RefuelRecord, VehicleInfo};
use crate::storage::Storage;
use crate::validation::{self, ValidationLimits, ValidationWarning};

/// Outcome of submitting a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Stored(RefuelRecord),
    /// Nothing was stored; resubmit with `confirmed = true` to store anyway.
    NeedsConfirmation(Vec<ValidationWarning>),
}

pub struct FuelService<S> {
    storage: S,
    limits: ValidationLimits,
}

impl<S: Storage> FuelService<S> {
    pub fn new(storage: S) -> Self {
        Self::with_limits(storage, ValidationLimits::default())
    }

    pub fn with_limits(storage: S, limits: ValidationLimits) -> Self {
        Self { storage, limits }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate and store a new record. Ids already in the log are
    /// rejected; use [`update`](Self::update) to edit a record.
    pub fn submit(
        &mut self,
        candidate: RefuelRecord,
        confirmed: bool,
    ) -> Result<Admission, AdmissionError> {
        if self.storage.load_record(&candidate.id)?.is_some() {
            return Err(AdmissionError::DuplicateId(candidate.id));
        }
        let existing = self.storage.list_records()?;
        let warnings = validation::validate_with_limits(&candidate, &existing, &self.limits)?;
        self.admit(candidate, warnings, confirmed)
    }

    /// Replace every field of an existing record. Value checks apply as in
    /// [`submit`](Self::submit); the chronology check does not.
    pub fn update(
        &mut self,
        record: RefuelRecord,
        confirmed: bool,
    ) -> Result<Admission, AdmissionError> {
        if self.storage.load_record(&record.id)?.is_none() {
            return Err(StorageError::NotFound(record.id).into());
        }
        let warnings = validation::validate_edit_with_limits(&record, &self.limits)?;
        self.admit(record, warnings, confirmed)
    }

    fn admit(
        &mut self,
        record: RefuelRecord,
        warnings: Vec<ValidationWarning>,
        confirmed: bool,
    ) -> Result<Admission, AdmissionError> {
        if !warnings.is_empty() && !confirmed {
            return Ok(Admission::NeedsConfirmation(warnings));
        }
        if !warnings.is_empty() {
            info!(id = %record.id, ?warnings, "storing record despite warnings");
        }

        self.storage.upsert_record(record.clone())?;
        debug!(id = %record.id, "record stored");
        Ok(Admission::Stored(record))
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.storage.delete_record(id)?;
        info!(id, "record deleted");
        Ok(())
    }

    /// Delete every record.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.storage.clear_records()?;
        info!("all records deleted");
        Ok(())
    }

    pub fn records(&self) -> Result<Vec<RefuelRecord>, StorageError> {
        self.storage.list_records()
    }

    /// Stored settings, creating the defaults on first access.
    pub fn settings(&mut self) -> Result<AppSettings, StorageError> {
        if let Some(settings) = self.storage.load_settings()? {
            return Ok(settings);
        }
        let settings = AppSettings::default();
        self.storage.upsert_settings(settings.clone())?;
        Ok(settings)
    }

    pub fn update_settings(&mut self, settings: AppSettings) -> Result<(), StorageError> {
        self.storage.upsert_settings(settings)
    }

    pub fn vehicle(&self) -> Result<Option<VehicleInfo>, StorageError> {
        self.storage.load_vehicle()
    }

    pub fn update_vehicle(&mut self, vehicle: VehicleInfo) -> Result<(), StorageError> {
        self.storage.upsert_vehicle(vehicle)
    }

    pub fn summary(&self, settings: &AppSettings) -> Result<FuelSummary, StorageError> {
        let records = self.storage.list_records()?;
        Ok(FuelSummary::compute(&records, settings))
    }

    pub fn record_consumption(&self, id: &str, is_metric: bool) -> Result<Option<f64>, StorageError> {
        let records = self.storage.list_records()?;
        Ok(metrics::record_consumption(&records, id, is_metric))
    }
}
