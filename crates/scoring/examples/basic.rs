//! Basic example demonstrating anomaly scoring
//!
//! Run with: cargo run --example basic -p scoring

use chrono::NaiveDate;
use scoring::{score_readings, DetectorConfig, Reading};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== gridpulse-scoring Basic Example ===\n");

    // A day of hourly readings with a mid-afternoon dip
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut readings = Vec::new();
    for hour in 0..24u32 {
        let base = 500.0 + 40.0 * ((hour as f64) * 0.4).sin();
        let ts = day.and_hms_opt(hour, 0, 0).unwrap();
        readings.push(Reading::at(ts, base));
    }
    readings[15].value = 180.0;

    let (scored, summary) = score_readings(&readings, &DetectorConfig::default())?;

    println!("Scored {} readings", scored.len());
    println!(
        "Anomalies: {} ({:.1}% of batch)\n",
        summary.total_anomalies, summary.anomaly_rate
    );

    for s in scored.iter().filter(|s| s.anomaly_flag) {
        println!(
            "{:?}  {:.1} kWh  score={:.3}  severity={}  action={}",
            s.reading.timestamp, s.reading.value, s.anomaly_score, s.severity,
            s.recommended_action
        );
    }

    Ok(())
}
