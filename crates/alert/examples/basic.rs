//! Basic example demonstrating daily alert export
//!
//! Run with: cargo run --example basic -p alert

use alert::{AlertExporter, ExportStatus, ExporterConfig};
use chrono::{Duration, NaiveDate};
use scoring::{score_readings, DetectorConfig, Reading};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== gridpulse-alert Basic Example ===\n");

    // A week of readings, four per day, with a dip on the last day
    let last_day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut readings = Vec::new();
    for offset in (0..7i64).rev() {
        let day = last_day - Duration::days(offset);
        for hour in [6u32, 10, 14, 18] {
            let value = if offset == 0 && hour == 14 {
                160.0
            } else {
                500.0 + (hour as f64) * 1.5
            };
            readings.push(Reading::at(day.and_hms_opt(hour, 0, 0).unwrap(), value));
        }
    }

    let (scored, _) = score_readings(&readings, &DetectorConfig::default())?;

    let exporter = AlertExporter::new(ExporterConfig::new("./exports"))?;
    let results = exporter.export_batch_ending(&scored, last_day);

    for r in &results {
        match r.status {
            ExportStatus::Success => println!(
                "{}: {} alerts -> {}",
                r.date,
                r.alert_count,
                r.file_path.as_ref().unwrap().display()
            ),
            ExportStatus::Failed => println!(
                "{}: FAILED ({})",
                r.date,
                r.error.as_deref().unwrap_or("unknown")
            ),
        }
    }

    Ok(())
}
