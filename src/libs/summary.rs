use super::logsheet::{LogsheetRecord, LogsheetStatus};

/// Dashboard counters of a logsheet listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl StatusSummary {
    pub fn from_records(records: &[LogsheetRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            match record.status {
                LogsheetStatus::Pending => summary.pending += 1,
                LogsheetStatus::Accepted => summary.accepted += 1,
                LogsheetStatus::Rejected => summary.rejected += 1,
            }
            summary
        })
    }
}

/// Newest submissions first; `submittedAt` is ISO 8601 so text order is time order.
pub fn sort_newest_first(records: &mut [LogsheetRecord]) {
    records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
}

/// Narrows a listing to one status.
pub fn filter_by_status(records: Vec<LogsheetRecord>, status: Option<LogsheetStatus>) -> Vec<LogsheetRecord> {
    match status {
        Some(status) => records.into_iter().filter(|record| record.status == status).collect(),
        None => records,
    }
}
