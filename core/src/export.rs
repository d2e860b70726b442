//! CSV and JSON export of a refuel log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ExportError;
use crate::models::{RefuelRecord, VehicleInfo};
use crate::ordering::OrderedRecords;

const CSV_DATE_FORMAT: &str = "%Y-%m-%d";
const JSON_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Serialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Mileage")]
    mileage: f64,
    #[serde(rename = "Liters")]
    liters: f64,
    #[serde(rename = "Price per Liter")]
    price_per_liter: f64,
    #[serde(rename = "Total Cost")]
    total_cost: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportEntry<'a> {
    id: &'a str,
    date: String,
    mileage: f64,
    liters: f64,
    price_per_liter: f64,
    total_cost: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportVehicle<'a> {
    brand: &'a str,
    model: &'a str,
    year: i32,
    tank_capacity: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    export_date: String,
    entries: Vec<ExportEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vehicle: Option<ExportVehicle<'a>>,
}

fn format_date(date_unix: i64, format: &str) -> Result<String, ExportError> {
    let date: DateTime<Utc> =
        DateTime::from_timestamp(date_unix, 0).ok_or(ExportError::InvalidDate(date_unix))?;
    Ok(date.format(format).to_string())
}

/// One row per record, date ascending.
pub fn to_csv(records: &[RefuelRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in OrderedRecords::new(records).by_date() {
        writer.serialize(CsvRow {
            date: format_date(record.date_unix, CSV_DATE_FORMAT)?,
            mileage: record.odometer,
            liters: record.volume,
            price_per_liter: record.unit_price,
            total_cost: record.total_cost(),
        })?;
    }

    if records.is_empty() {
        writer.write_record(["Date", "Mileage", "Liters", "Price per Liter", "Total Cost"])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Pretty-printed JSON document. Entries follow date order.
pub fn to_json(
    records: &[RefuelRecord],
    vehicle: Option<&VehicleInfo>,
    export_date_unix: i64,
) -> Result<String, ExportError> {
    let ordered = OrderedRecords::new(records);
    let entries = ordered
        .by_date()
        .iter()
        .copied()
        .map(|record| -> Result<ExportEntry, ExportError> {
            Ok(ExportEntry {
                id: &record.id,
                date: format_date(record.date_unix, JSON_DATE_FORMAT)?,
                mileage: record.odometer,
                liters: record.volume,
                price_per_liter: record.unit_price,
                total_cost: record.total_cost(),
            })
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    let document = ExportDocument {
        export_date: format_date(export_date_unix, JSON_DATE_FORMAT)?,
        entries,
        vehicle: vehicle.map(|v| ExportVehicle {
            brand: &v.brand,
            model: &v.model,
            year: v.year,
            tank_capacity: v.tank_capacity,
        }),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-05T08:30:00Z
    const MAR_5_2024: i64 = 1_709_627_400;
    const DAY: i64 = 86_400;

    fn create_test_records() -> Vec<RefuelRecord> {
        vec![
            RefuelRecord {
                id: "second".to_string(),
                date_unix: MAR_5_2024 + DAY,
                odometer: 15_000.0,
                volume: 30.0,
                unit_price: 1.5,
            },
            RefuelRecord {
                id: "first".to_string(),
                date_unix: MAR_5_2024,
                odometer: 14_700.0,
                volume: 40.5,
                unit_price: 2.0,
            },
        ]
    }

    #[test]
    fn test_csv_export() {
        let csv = to_csv(&create_test_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Mileage,Liters,Price per Liter,Total Cost");
        assert_eq!(lines[1], "2024-03-05,14700.0,40.5,2.0,81.0");
        assert_eq!(lines[2], "2024-03-06,15000.0,30.0,1.5,45.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_export_empty_has_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv, "Date,Mileage,Liters,Price per Liter,Total Cost\n");
    }

    #[test]
    fn test_json_export() {
        let vehicle = VehicleInfo {
            brand: "Skoda".to_string(),
            model: "Octavia".to_string(),
            year: 2019,
            tank_capacity: 50.0,
        };
        let json = to_json(&create_test_records(), Some(&vehicle), MAR_5_2024 + 2 * DAY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["exportDate"], "2024-03-07T08:30:00+0000");
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "first");
        assert_eq!(entries[0]["date"], "2024-03-05T08:30:00+0000");
        assert_eq!(entries[0]["mileage"], 14_700.0);
        assert_eq!(entries[0]["liters"], 40.5);
        assert_eq!(entries[0]["pricePerLiter"], 2.0);
        assert_eq!(entries[0]["totalCost"], 81.0);
        assert_eq!(value["vehicle"]["brand"], "Skoda");
        assert_eq!(value["vehicle"]["tankCapacity"], 50.0);
    }

    #[test]
    fn test_json_export_without_vehicle() {
        let json = to_json(&create_test_records(), None, MAR_5_2024).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("vehicle").is_none());
    }

    #[test]
    fn test_export_invalid_date() {
        let records = vec![RefuelRecord {
            id: "bad".to_string(),
            date_unix: i64::MAX,
            odometer: 1.0,
            volume: 1.0,
            unit_price: 1.0,
        }];
        assert!(matches!(
            to_csv(&records),
            Err(ExportError::InvalidDate(i64::MAX))
        ));
        assert!(matches!(
            to_json(&[], None, i64::MAX),
            Err(ExportError::InvalidDate(i64::MAX))
        ));
    }
}
