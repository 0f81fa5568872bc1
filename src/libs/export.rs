//! Export of an operator's logsheets to a file.
//!
//! The server renders its own CSV (`GET /api/logsheet/export-csv`), which is
//! what `export` saves by default. A local CSV or JSON rendering of the
//! `my-logs` listing is available as well, for when the records should be
//! filtered or kept with their review status.
//!
//! ```rust,no_run
//! use logsheet::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.write_bytes(b"assetCode,date\n")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::logsheet::{display_date, LogsheetRecord};
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name the web client downloads the server export as.
pub const DEFAULT_EXPORT_NAME: &str = "my-logsheets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One flattened logsheet row of the local CSV export.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub status: String,
    pub submitted_at: String,
    pub asset_code: String,
    pub asset_description: String,
    pub operator_name: String,
    pub date: String,
    pub commenced_time: String,
    pub commenced_reading: String,
    pub completed_time: String,
    pub completed_reading: String,
    pub activity_code: String,
    pub quantity_produced: f64,
    pub work_done: String,
    pub working_hours: f64,
    pub idle_hours: f64,
    pub breakdown_hours: f64,
    pub production_qty: f64,
    pub hmr_or_kmr_run: String,
    pub fuel_in_liters: f64,
    pub user_name: String,
    pub rejection_reason: String,
}

impl From<&LogsheetRecord> for ExportRow {
    fn from(record: &LogsheetRecord) -> Self {
        let sheet = &record.data;
        let working = &sheet.working_details;
        Self {
            id: record.id.clone(),
            status: record.status.to_string(),
            submitted_at: display_date(&record.submitted_at),
            asset_code: sheet.asset_code.clone(),
            asset_description: sheet.asset_description.clone(),
            operator_name: sheet.operator_name.clone(),
            date: sheet.date.clone(),
            commenced_time: working.commenced.time.clone(),
            commenced_reading: working.commenced.hmr_or_kmr_reading.clone(),
            completed_time: working.completed.time.clone(),
            completed_reading: working.completed.hmr_or_kmr_reading.clone(),
            activity_code: sheet.production_details.activity_code.clone(),
            quantity_produced: sheet.production_details.quantity_produced,
            work_done: sheet.production_details.work_done.clone(),
            working_hours: sheet.totals.working_hours,
            idle_hours: sheet.totals.idle_hours,
            breakdown_hours: sheet.totals.breakdown_hours,
            production_qty: sheet.totals.production_qty,
            hmr_or_kmr_run: sheet.totals.hmr_or_kmr_run.clone(),
            fuel_in_liters: sheet.totals.fuel_in_liters,
            user_name: sheet.user_info.user_name.clone(),
            rejection_reason: record.rejection_reason.clone().unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Exporter writing to `output_path`, or to `my-logsheets.<ext>` in the
    /// current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", DEFAULT_EXPORT_NAME, format.extension())));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Saves a server-rendered export as is.
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(&self.output_path)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    /// Renders the records locally in the exporter's format.
    pub fn write_records(&self, records: &[LogsheetRecord]) -> Result<()> {
        tracing::debug!(count = records.len(), path = %self.output_path.display(), "exporting logsheets");
        match self.format {
            ExportFormat::Csv => self.write_csv(records),
            ExportFormat::Json => self.write_json(records),
        }
    }

    fn write_csv(&self, records: &[LogsheetRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for record in records {
            wtr.serialize(ExportRow::from(record))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_json(&self, records: &[LogsheetRecord]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, records)?;
        Ok(())
    }
}
