use super::clock::to_12_hour;
use super::logsheet::{display_date, Logsheet, LogsheetRecord};
use super::session::SessionContext;
use super::summary::StatusSummary;
use super::totals::Totals;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// `14:30 (2:30 PM)`, or a dash when the time was left empty.
fn shift_time(value: &str) -> String {
    match to_12_hour(value) {
        Some(twelve) => format!("{} ({})", value, twelve),
        None => or_dash(value).to_string(),
    }
}

impl View {
    /// Operator dashboard listing.
    pub fn logsheets(records: &[LogsheetRecord]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "ASSET", "OPERATOR", "DATE", "HOURS", "STATUS", "SUBMITTED"]);
        for record in records {
            table.add_row(row![
                record.id,
                record.data.asset_code,
                record.data.operator_name,
                display_date(&record.data.date),
                format!("{:.1}", record.data.totals.total_hours()),
                format!("{} {}", record.status.icon(), record.status),
                display_date(&record.submitted_at)
            ]);
        }
        table.printstd();
        Ok(())
    }

    /// Admin review queue.
    pub fn pending(records: &[LogsheetRecord]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "USER EMAIL", "ASSET", "OPERATOR", "DATE", "SUBMITTED"]);
        for record in records {
            table.add_row(row![
                record.id,
                record.submitter_email(),
                record.data.asset_code,
                record.data.operator_name,
                display_date(&record.data.date),
                display_date(&record.submitted_at)
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn summary(summary: &StatusSummary) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["TOTAL", "PENDING", "ACCEPTED", "REJECTED"]);
        table.add_row(row![summary.total, summary.pending, summary.accepted, summary.rejected]);
        table.printstd();
        Ok(())
    }

    pub fn totals(totals: &Totals) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["WORKING H", "IDLE H", "BREAKDOWN H", "PRODUCTION QTY", "HMR/KMR RUN", "FUEL L"]);
        table.add_row(row![
            format!("{:.1}", totals.working_hours),
            format!("{:.1}", totals.idle_hours),
            format!("{:.1}", totals.breakdown_hours),
            totals.production_qty,
            or_dash(&totals.hmr_or_kmr_run),
            format!("{:.1}", totals.fuel_in_liters)
        ]);
        table.printstd();
        Ok(())
    }

    /// Every section of a logsheet, one field per row.
    pub fn logsheet(sheet: &Logsheet) -> Result<()> {
        let working = &sheet.working_details;
        let production = &sheet.production_details;
        let totals = &sheet.totals;

        let mut table = Table::new();
        table.add_row(row![b->"Asset code", sheet.asset_code]);
        table.add_row(row![b->"Operator", sheet.operator_name]);
        table.add_row(row![b->"Date", display_date(&sheet.date)]);
        table.add_row(row![b->"Description", or_dash(&sheet.asset_description)]);
        table.add_row(row![b->"Commenced", shift_time(&working.commenced.time)]);
        table.add_row(row![b->"Commenced reading", or_dash(&working.commenced.hmr_or_kmr_reading)]);
        table.add_row(row![b->"Completed", shift_time(&working.completed.time)]);
        table.add_row(row![b->"Completed reading", or_dash(&working.completed.hmr_or_kmr_reading)]);
        table.add_row(row![b->"Activity code", or_dash(&production.activity_code)]);
        table.add_row(row![b->"Quantity produced", production.quantity_produced]);
        table.add_row(row![b->"Work done", or_dash(&production.work_done)]);
        table.add_row(row![b->"Working hours", format!("{:.1}", totals.working_hours)]);
        table.add_row(row![b->"Idle hours", format!("{:.1}", totals.idle_hours)]);
        table.add_row(row![b->"Breakdown hours", format!("{:.1}", totals.breakdown_hours)]);
        table.add_row(row![b->"Production qty", totals.production_qty]);
        table.add_row(row![b->"HMR/KMR run", or_dash(&totals.hmr_or_kmr_run)]);
        table.add_row(row![b->"Fuel (liters)", totals.fuel_in_liters]);
        table.add_row(row![b->"User name", sheet.user_info.user_name]);
        table.add_row(row![b->"Signature", or_dash(&sheet.user_info.user_signature)]);
        table.printstd();
        Ok(())
    }

    /// Detail view of a submitted logsheet including its review state.
    pub fn record(record: &LogsheetRecord) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![b->"Status", format!("{} {}", record.status.icon(), record.status)]);
        table.add_row(row![b->"Submitted", display_date(&record.submitted_at)]);
        if let Some(email) = record.user_id.as_ref().and_then(|user| user.email()) {
            table.add_row(row![b->"User email", email]);
        }
        if let Some(reviewer) = &record.reviewed_by {
            table.add_row(row![b->"Reviewed by", or_dash(&reviewer.email)]);
        }
        if let Some(reason) = &record.rejection_reason {
            table.add_row(row![b->"Rejection reason", reason]);
        }
        table.printstd();
        Self::logsheet(&record.data)
    }

    pub fn profile(session: &SessionContext) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![b->"Initials", session.initials()]);
        table.add_row(row![b->"Email", session.email()]);
        table.add_row(row![b->"Role", session.role()]);
        table.printstd();
        Ok(())
    }
}
