//! Daily summary aggregation and escalation recommendations.

use std::collections::{BTreeMap, BTreeSet};

use alert_spi::{Alert, DailySummary};
use chrono::{Local, NaiveDate};
use scoring_spi::Severity;

/// Aggregate one day's alerts into the summary persisted beside the
/// alert file. An empty day still yields a well-formed summary.
pub fn daily_summary(alerts: &[Alert], date: NaiveDate) -> DailySummary {
    let export_timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    if alerts.is_empty() {
        return DailySummary {
            export_date: date,
            total_alerts: 0,
            severity_breakdown: BTreeMap::new(),
            critical_alerts: 0,
            warning_alerts: 0,
            info_alerts: 0,
            avg_energy_output: 0.0,
            min_energy_output: 0.0,
            max_energy_output: 0.0,
            avg_deviation: 0.0,
            max_deviation: 0.0,
            primary_trend: "N/A".to_string(),
            systems_affected: 0,
            status: "No alerts".to_string(),
            export_timestamp,
            recommendations: vec![
                "No immediate action required - no anomalies detected".to_string()
            ],
        };
    }

    let mut severity_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    for alert in alerts {
        *severity_breakdown
            .entry(alert.severity.to_string())
            .or_insert(0) += 1;
    }
    let count_of = |s: Severity| alerts.iter().filter(|a| a.severity == s).count();
    let critical_alerts = count_of(Severity::Critical);
    let warning_alerts = count_of(Severity::Warning);
    let info_alerts = count_of(Severity::Info);

    let energies: Vec<f64> = alerts.iter().map(|a| a.energy_kwh).collect();
    let deviations: Vec<f64> = alerts.iter().map(|a| a.deviation_percentage).collect();
    let avg_energy_output = energies.iter().sum::<f64>() / energies.len() as f64;
    let min_energy_output = energies.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_energy_output = energies.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg_deviation = deviations.iter().sum::<f64>() / deviations.len() as f64;
    let max_deviation = deviations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let systems_affected = alerts
        .iter()
        .map(|a| a.units_affected.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let status = if critical_alerts > 0 {
        "Critical".to_string()
    } else {
        "Normal".to_string()
    };

    DailySummary {
        export_date: date,
        total_alerts: alerts.len(),
        severity_breakdown,
        critical_alerts,
        warning_alerts,
        info_alerts,
        avg_energy_output,
        min_energy_output,
        max_energy_output,
        avg_deviation,
        max_deviation,
        primary_trend: primary_trend(alerts),
        systems_affected,
        status,
        export_timestamp,
        recommendations: recommendations(critical_alerts, warning_alerts, max_deviation),
    }
}

/// Most common trend direction, ties broken alphabetically.
fn primary_trend(alerts: &[Alert]) -> String {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for alert in alerts {
        *counts.entry(alert.trend_direction.to_string()).or_insert(0) += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for (trend, count) in &counts {
        if best.map_or(true, |(_, c)| *count > c) {
            best = Some((trend, *count));
        }
    }
    best.map(|(t, _)| t.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn recommendations(critical: usize, warning: usize, max_deviation: f64) -> Vec<String> {
    let mut out = Vec::new();
    if critical > 0 {
        out.push(format!(
            "Immediate attention required: {critical} critical anomalies detected"
        ));
        out.push("Contact on-call engineer for immediate investigation".to_string());
    }
    if warning > 2 {
        out.push(format!(
            "Monitor closely: {warning} warning-level anomalies detected"
        ));
        out.push("Schedule maintenance check within 24 hours".to_string());
    }
    if max_deviation > 50.0 {
        out.push("High deviation detected - investigate potential equipment issues".to_string());
    }
    if out.is_empty() {
        out.push("Continue normal monitoring procedures".to_string());
    }
    out
}
