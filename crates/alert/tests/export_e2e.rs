//! End-to-end test: score a week of readings, then export the
//! rolling window with one day forced to fail.

use alert::{AlertExporter, ExportStatus, ExporterConfig};
use chrono::{Duration, NaiveDate};
use scoring::{score_readings, DetectorConfig, Reading};

/// A week of hourly readings with a deep dip on the most recent day.
fn week_of_readings(last_day: NaiveDate) -> Vec<Reading> {
    let mut readings = Vec::new();
    for offset in (0..7).rev() {
        let day = last_day - Duration::days(offset);
        for hour in [6u32, 10, 14, 18] {
            let ts = day.and_hms_opt(hour, 0, 0).unwrap();
            let value = if offset == 0 && hour == 14 {
                150.0
            } else {
                500.0 + (hour as f64) * 2.0
            };
            readings.push(Reading::at(ts, value));
        }
    }
    readings
}

#[test]
fn e2e_week_batch_exports_every_day() {
    let last_day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let readings = week_of_readings(last_day);
    let (scored, summary) = score_readings(&readings, &DetectorConfig::default()).unwrap();
    assert_eq!(scored.len(), 28);
    assert!(summary.total_anomalies >= 1);

    let dir = tempfile::tempdir().unwrap();
    let exporter = AlertExporter::new(ExporterConfig::new(dir.path())).unwrap();
    let results = exporter.export_batch_ending(&scored, last_day);

    assert_eq!(results.len(), 7);
    assert!(results.iter().all(|r| r.status == ExportStatus::Success));
    // Most recent day first, each day gets its four readings.
    assert_eq!(results[0].date, last_day);
    assert!(results.iter().all(|r| r.alert_count == 4));
    for result in &results {
        let path = result.file_path.as_ref().unwrap();
        assert!(path.is_file());
        let summary_name = format!("alerts_{}_summary.json", result.date.format("%Y%m%d"));
        assert!(dir.path().join(summary_name).is_file());
    }
}

#[test]
fn e2e_failed_day_does_not_stop_the_batch() {
    let last_day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let readings = week_of_readings(last_day);
    let (scored, _) = score_readings(&readings, &DetectorConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let exporter = AlertExporter::new(ExporterConfig::new(dir.path())).unwrap();

    // A directory squatting on one day's CSV path makes that single
    // day fail while the rest of the window proceeds.
    let blocked = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    std::fs::create_dir(dir.path().join("alerts_20240307.csv")).unwrap();

    let results = exporter.export_batch_ending(&scored, last_day);
    assert_eq!(results.len(), 7);

    let failed: Vec<_> = results
        .iter()
        .filter(|r| r.status == ExportStatus::Failed)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].date, blocked);
    assert!(failed[0].file_path.is_none());
    assert!(failed[0].error.is_some());

    let succeeded = results
        .iter()
        .filter(|r| r.status == ExportStatus::Success)
        .count();
    assert_eq!(succeeded, 6);
}

#[test]
fn e2e_dip_day_summary_flags_the_dip() {
    let last_day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let readings = week_of_readings(last_day);
    let (scored, _) = score_readings(&readings, &DetectorConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let exporter = AlertExporter::new(ExporterConfig::new(dir.path())).unwrap();
    let export = exporter.export_daily(&scored, Some(last_day)).unwrap();

    assert_eq!(export.alert_count, 4);
    // The 150 kWh dip deviates far more from the day mean than its
    // steady neighbours.
    let dip = export
        .summary
        .min_energy_output;
    assert_eq!(dip, 150.0);
    assert!(export.summary.max_deviation > 30.0);
}
