//! Admin dashboard: logsheets waiting for review.

use super::{api_failure, connect, Role};
use crate::{
    libs::{messages::Message, summary::sort_newest_first, view::View},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PendingArgs {
    /// Show every section of one pending logsheet
    #[arg(long)]
    id: Option<String>,
}

pub async fn cmd(args: PendingArgs) -> Result<()> {
    let (mut api, session) = connect(Role::Admin).await?;
    let mut records = api
        .pending_logsheets(&session)
        .await
        .map_err(|e| api_failure(e, Message::FetchPendingFailed))?;

    if let Some(id) = args.id {
        let Some(record) = records.iter().find(|record| record.id == id) else {
            msg_bail_anyhow!(Message::LogsheetNotFound(id));
        };
        msg_print!(Message::LogsheetDetailsHeader(record.id.clone()), true);
        return View::record(record);
    }

    if records.is_empty() {
        msg_info!(Message::NoPendingLogsheets);
        return Ok(());
    }

    sort_newest_first(&mut records);
    msg_print!(Message::PendingHeader(records.len()), true);
    View::pending(&records)
}
