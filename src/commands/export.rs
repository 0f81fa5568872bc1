//! Export of the operator's logsheets.
//!
//! By default the CSV rendered by the server is saved as `my-logsheets.csv`.
//! `--local` builds the file from the `logs` listing instead, which is also
//! the only way to get JSON.

use super::{api_failure, connect, Role};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
        summary::sort_newest_first,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, `my-logsheets.<format>` in the current directory by default
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the file locally from the fetched logsheets
    #[arg(short, long)]
    local: bool,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (mut api, session) = connect(Role::Operator).await?;
    let exporter = Exporter::new(args.format, args.output);
    msg_info!(Message::ExportingLogsheets(args.format.extension().to_uppercase()));

    if args.local || args.format == ExportFormat::Json {
        let mut records = api
            .my_logsheets(&session)
            .await
            .map_err(|e| api_failure(e, Message::FetchLogsheetsFailed))?;
        sort_newest_first(&mut records);
        exporter.write_records(&records)?;
    } else {
        let csv = api.export_csv(&session).await.map_err(|e| api_failure(e, Message::ExportFailed))?;
        exporter.write_bytes(&csv)?;
    }

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
