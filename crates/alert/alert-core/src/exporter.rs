//! Daily and rolling-window alert export.

use std::fs;
use std::path::{Path, PathBuf};

use alert_api::ExporterConfig;
use alert_spi::{Alert, BatchResult, DailyExport, ExportError, ExportStatus, Result};
use chrono::{Duration, Local, NaiveDate};
use scoring_spi::ScoredReading;
use tracing::{error, info};

use crate::formatter::daily_alerts;
use crate::summary::daily_summary;

/// Writes one CSV file and one JSON summary per exported day.
#[derive(Debug)]
pub struct AlertExporter {
    config: ExporterConfig,
}

impl AlertExporter {
    /// Create an exporter, creating the output directory if missing.
    pub fn new(config: ExporterConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir).map_err(|e| ExportError::Io(e.to_string()))?;
        info!(output_dir = %config.output_dir.display(), "alert exporter ready");
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    /// Export one day's alerts. `date` defaults to today.
    ///
    /// A day without matching readings still produces a header-only
    /// CSV and a zero-count summary, keeping the file schema stable
    /// for downstream consumers.
    pub fn export_daily(
        &self,
        scored: &[ScoredReading],
        date: Option<NaiveDate>,
    ) -> Result<DailyExport> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.export_day(scored, date)
    }

    /// Export every day in the configured rolling window ending at
    /// `reference`, most recent day first. A failed day is recorded
    /// and does not stop the remaining days; the returned vector
    /// always holds one entry per day in the window.
    pub fn export_batch_ending(
        &self,
        scored: &[ScoredReading],
        reference: NaiveDate,
    ) -> Vec<BatchResult> {
        let mut results = Vec::with_capacity(self.config.window_days as usize);
        for offset in 0..self.config.window_days {
            let date = reference - Duration::days(offset as i64);
            match self.export_day(scored, date) {
                Ok(export) => {
                    results.push(BatchResult {
                        date,
                        file_path: Some(export.file_path),
                        alert_count: export.alert_count,
                        status: ExportStatus::Success,
                        error: None,
                    });
                }
                Err(e) => {
                    error!(%date, error = %e, "daily export failed");
                    results.push(BatchResult {
                        date,
                        file_path: None,
                        alert_count: 0,
                        status: ExportStatus::Failed,
                        error: Some(e.to_string()),
                    });
                }
            }
        }
        let failed = results
            .iter()
            .filter(|r| r.status == ExportStatus::Failed)
            .count();
        info!(
            days = results.len(),
            failed, "batch export finished"
        );
        results
    }

    /// Export the rolling window ending today.
    pub fn export_batch(&self, scored: &[ScoredReading]) -> Vec<BatchResult> {
        self.export_batch_ending(scored, Local::now().date_naive())
    }

    fn export_day(&self, scored: &[ScoredReading], date: NaiveDate) -> Result<DailyExport> {
        let alerts = daily_alerts(scored, date);
        let csv_path = self.day_path(date, "csv");
        write_alert_csv(&csv_path, &alerts)?;

        let summary = daily_summary(&alerts, date);
        let summary_path = self.summary_path(date);
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| ExportError::Json(e.to_string()))?;
        fs::write(&summary_path, json).map_err(|e| ExportError::Io(e.to_string()))?;

        info!(
            %date,
            alerts = alerts.len(),
            path = %csv_path.display(),
            "exported daily alerts"
        );
        Ok(DailyExport {
            file_path: csv_path,
            alert_count: alerts.len(),
            summary,
        })
    }

    fn day_path(&self, date: NaiveDate, extension: &str) -> PathBuf {
        self.config.output_dir.join(format!(
            "{}_{}.{}",
            self.config.filename_prefix,
            date.format("%Y%m%d"),
            extension
        ))
    }

    fn summary_path(&self, date: NaiveDate) -> PathBuf {
        self.config.output_dir.join(format!(
            "{}_{}_summary.json",
            self.config.filename_prefix,
            date.format("%Y%m%d")
        ))
    }
}

/// Write the alert CSV. The header row is written explicitly so that
/// an empty day still yields the full column schema.
fn write_alert_csv(path: &Path, alerts: &[Alert]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    writer
        .write_record(Alert::COLUMNS)
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    for alert in alerts {
        writer
            .serialize(alert)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(())
}
