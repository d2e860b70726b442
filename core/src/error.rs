use thiserror::Error;

/// Numeric field of a refuel record, used to point validation errors at
/// the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Odometer,
    Volume,
    UnitPrice,
}

impl RecordField {
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Odometer => "odometer",
            RecordField::Volume => "volume",
            RecordField::UnitPrice => "unit price",
        }
    }
}

/// Hard rejection of a record before it is admitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{} is not a number", .field.label())]
    NonNumeric { field: RecordField },

    #[error("{} must be greater than 0", .field.label())]
    NonPositive { field: RecordField },
}

/// Failure reported by a storage backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Error returned when submitting or editing a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdmissionError {
    #[error("record rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("a record with id {0} already exists")]
    DuplicateId(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timestamp out of range: {0}")]
    InvalidDate(i64),
}
