pub mod consumption;
pub mod error;
pub mod export;
pub mod ffi;
pub mod input;
pub mod metrics;
pub mod models;
pub mod ordering;
pub mod service;
pub mod storage;
pub mod trip;
pub mod units;
pub mod validation;

uniffi::include_scaffolding!("fuellog");

pub use consumption::{compute_consumption, compute_cost_per_distance};
pub use error::{AdmissionError, ExportError, RecordField, StorageError, ValidationError};
pub use ffi::{
    average_price, compute_stats, compute_summary, consumption_trend, estimate_trip, export_csv,
    export_json, monthly_spending, odometer_segments, price_trend, record_consumption,
    sort_records_for_display, trip_price_basis, validate_record, validate_record_edit,
    vehicle_display_name, warning_message, SegmentReport,
};
pub use input::parse_record;
pub use metrics::{FuelStats, FuelSummary, MonthlySpend, StatsDisplay, TrendPoint};
pub use models::{AppSettings, RefuelRecord, ThemeMode, VehicleInfo};
pub use ordering::{LogSort, OrderedRecords, Segment, SegmentCounts, SegmentFigures};
pub use service::{Admission, FuelService};
pub use storage::{MemoryStorage, Storage};
pub use trip::TripEstimate;
pub use units::{
    format_consumption, format_currency, format_distance, format_volume, gallons_to_liters,
    liters_to_gallons,
};
pub use validation::{ValidationLimits, ValidationWarning};
