use std::collections::HashMap;

use crate::error::StorageError;
use crate::models::{AppSettings, RefuelRecord, VehicleInfo};

/// Contract for the host's persistence layer. Records are keyed by id and
/// carry no ordering guarantee.
pub trait Storage {
    fn upsert_record(&mut self, record: RefuelRecord) -> Result<(), StorageError>;
    fn delete_record(&mut self, id: &str) -> Result<(), StorageError>;
    fn clear_records(&mut self) -> Result<(), StorageError>;
    fn list_records(&self) -> Result<Vec<RefuelRecord>, StorageError>;
    fn load_record(&self, id: &str) -> Result<Option<RefuelRecord>, StorageError>;

    fn upsert_vehicle(&mut self, vehicle: VehicleInfo) -> Result<(), StorageError>;
    fn load_vehicle(&self) -> Result<Option<VehicleInfo>, StorageError>;

    fn upsert_settings(&mut self, settings: AppSettings) -> Result<(), StorageError>;
    fn load_settings(&self) -> Result<Option<AppSettings>, StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, RefuelRecord>,
    vehicle: Option<VehicleInfo>,
    settings: Option<AppSettings>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = RefuelRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
            ..Self::default()
        }
    }
}

impl Storage for MemoryStorage {
    fn upsert_record(&mut self, record: RefuelRecord) -> Result<(), StorageError> {
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn delete_record(&mut self, id: &str) -> Result<(), StorageError> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn clear_records(&mut self) -> Result<(), StorageError> {
        self.records.clear();
        Ok(())
    }

    fn list_records(&self) -> Result<Vec<RefuelRecord>, StorageError> {
        Ok(self.records.values().cloned().collect())
    }

    fn load_record(&self, id: &str) -> Result<Option<RefuelRecord>, StorageError> {
        Ok(self.records.get(id).cloned())
    }

    fn upsert_vehicle(&mut self, vehicle: VehicleInfo) -> Result<(), StorageError> {
        self.vehicle = Some(vehicle);
        Ok(())
    }

    fn load_vehicle(&self) -> Result<Option<VehicleInfo>, StorageError> {
        Ok(self.vehicle.clone())
    }

    fn upsert_settings(&mut self, settings: AppSettings) -> Result<(), StorageError> {
        self.settings = Some(settings);
        Ok(())
    }

    fn load_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        Ok(self.settings.clone())
    }
}
