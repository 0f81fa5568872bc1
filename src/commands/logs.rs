//! Operator dashboard: submitted logsheets with their review status.

use super::{api_failure, connect, Role};
use crate::{
    libs::{
        logsheet::LogsheetStatus,
        messages::Message,
        summary::{filter_by_status, sort_newest_first, StatusSummary},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Show every section of one logsheet
    #[arg(long)]
    id: Option<String>,

    /// Only list logsheets with this status
    #[arg(short, long, value_enum)]
    status: Option<LogsheetStatus>,
}

pub async fn cmd(args: LogsArgs) -> Result<()> {
    let (mut api, session) = connect(Role::Operator).await?;
    let mut records = api
        .my_logsheets(&session)
        .await
        .map_err(|e| api_failure(e, Message::FetchLogsheetsFailed))?;

    if let Some(id) = args.id {
        let Some(record) = records.iter().find(|record| record.id == id) else {
            msg_bail_anyhow!(Message::LogsheetNotFound(id));
        };
        msg_print!(Message::LogsheetDetailsHeader(record.id.clone()), true);
        return View::record(record);
    }

    msg_print!(Message::LogsheetsHeader(session.email().to_string()), true);
    View::summary(&StatusSummary::from_records(&records))?;

    sort_newest_first(&mut records);
    let records = filter_by_status(records, args.status);
    if records.is_empty() {
        msg_info!(Message::NoLogsheets);
        return Ok(());
    }
    View::logsheets(&records)
}
