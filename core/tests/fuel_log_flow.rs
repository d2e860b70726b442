use fuellog_compute::{
    export_csv, export_json, monthly_spending, parse_record, Admission, AppSettings, FuelService,
    MemoryStorage, RecordField, ValidationError, ValidationWarning, VehicleInfo,
};

const DAY: i64 = 86_400;
// 2024-01-01T00:00:00Z
const JAN_1_2024: i64 = 1_704_067_200;
// 2024-02-01T00:00:00Z
const FEB_1_2024: i64 = 1_706_745_600;

fn submit_form(
    service: &mut FuelService<MemoryStorage>,
    id: &str,
    date_unix: i64,
    odometer: &str,
    volume: &str,
    unit_price: &str,
) -> Admission {
    let record = parse_record(id, date_unix, odometer, volume, unit_price).unwrap();
    service.submit(record, false).unwrap()
}

fn seeded_service() -> FuelService<MemoryStorage> {
    let mut service = FuelService::new(MemoryStorage::new());
    for (id, date, odometer, volume, price) in [
        ("r1", JAN_1_2024, "10000", "40,0", "1.50"),
        ("r2", JAN_1_2024 + 14 * DAY, "10500", "35", "1.60"),
        ("r3", FEB_1_2024, "11000", " 40 ", "1.55"),
    ] {
        let outcome = submit_form(&mut service, id, date, odometer, volume, price);
        assert!(matches!(outcome, Admission::Stored(_)), "{id} was not stored");
    }
    service
}

#[test]
fn test_log_summary_from_form_input() {
    let mut service = seeded_service();
    let settings = service.settings().unwrap();
    let summary = service.summary(&settings).unwrap();

    assert_eq!(summary.stats.record_count, 3);
    assert!((summary.stats.total_distance - 1_000.0).abs() < 1e-9);
    assert!((summary.stats.total_volume - 115.0).abs() < 1e-9);
    assert!((summary.stats.total_spent - 178.0).abs() < 1e-9);
    assert!((summary.stats.average_consumption - 7.5).abs() < 1e-9);
    assert!((summary.stats.best_consumption - 7.0).abs() < 1e-9);
    assert!((summary.stats.worst_consumption - 8.0).abs() < 1e-9);
    assert!((summary.stats.cost_per_distance - 0.178).abs() < 1e-9);

    assert_eq!(summary.display.total_distance, "1000.0 km");
    assert_eq!(summary.display.total_spent, "$178.00");
    assert_eq!(summary.display.average_consumption, "7.50 L/100km");
    assert_eq!(summary.current_odometer, 11_000.0);
    assert_eq!(summary.latest_record.map(|r| r.id), Some("r3".to_string()));

    let months = monthly_spending(service.records().unwrap());
    assert_eq!(months.len(), 2);
    assert_eq!((months[0].year, months[0].month), (2024, 1));
    assert!((months[0].amount - 116.0).abs() < 1e-9);
    assert_eq!(months[1].month_start_unix, FEB_1_2024);
    assert!((months[1].amount - 62.0).abs() < 1e-9);
}

#[test]
fn test_malformed_form_input_is_rejected() {
    assert_eq!(
        parse_record("x", JAN_1_2024, "ten thousand", "40", "1.5").unwrap_err(),
        ValidationError::NonNumeric {
            field: RecordField::Odometer
        }
    );

    let mut service = seeded_service();
    let record = parse_record("x", FEB_1_2024 + DAY, "11500", "0", "1.5").unwrap();
    assert!(service.submit(record, true).is_err());
    assert_eq!(service.records().unwrap().len(), 3);
}

#[test]
fn test_regressing_entry_needs_confirmation() {
    let mut service = seeded_service();

    let outcome = submit_form(&mut service, "r4", FEB_1_2024 + 9 * DAY, "10800", "20", "1.5");
    let Admission::NeedsConfirmation(warnings) = outcome else {
        panic!("expected a confirmation prompt, got {outcome:?}");
    };
    assert_eq!(warnings, vec![ValidationWarning::OdometerNotIncreasing]);
    assert_eq!(service.records().unwrap().len(), 3);

    let record = parse_record("r4", FEB_1_2024 + 9 * DAY, "10800", "20", "1.5").unwrap();
    assert!(matches!(
        service.submit(record, true).unwrap(),
        Admission::Stored(_)
    ));

    // No figure against the record entered before it in time.
    assert_eq!(service.record_consumption("r4", true).unwrap(), None);
    assert!(service.record_consumption("r3", true).unwrap().is_some());

    let summary = service.summary(&AppSettings::default()).unwrap();
    assert_eq!(summary.stats.record_count, 4);
    assert_eq!(summary.stats.valid_segments, 3);
    assert!((summary.stats.total_distance - 1_000.0).abs() < 1e-9);
    assert_eq!(summary.current_odometer, 11_000.0);
    assert_eq!(summary.latest_record.map(|r| r.id), Some("r4".to_string()));
}

#[test]
fn test_export_after_edits() {
    let mut service = seeded_service();
    service.delete("r2").unwrap();
    service
        .update_vehicle(VehicleInfo {
            brand: "Mazda".to_string(),
            model: "3".to_string(),
            year: 2021,
            tank_capacity: 51.0,
        })
        .unwrap();

    let csv = export_csv(service.records().unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Mileage,Liters,Price per Liter,Total Cost",
            "2024-01-01,10000.0,40.0,1.5,60.0",
            "2024-02-01,11000.0,40.0,1.55,62.0",
        ]
    );

    let json = export_json(
        service.records().unwrap(),
        service.vehicle().unwrap(),
        FEB_1_2024 + DAY,
    )
    .unwrap();
    assert!(json.contains("\"exportDate\": \"2024-02-02T00:00:00+0000\""));
    assert!(json.contains("\"brand\": \"Mazda\""));
    assert!(!json.contains("\"r2\""));

    service.reset().unwrap();
    assert_eq!(
        export_csv(service.records().unwrap()).unwrap(),
        "Date,Mileage,Liters,Price per Liter,Total Cost\n"
    );
}
