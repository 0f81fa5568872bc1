use super::{api_failure, connect, Role};
use crate::{
    libs::{logsheet::StatusUpdate, messages::Message},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{ArgGroup, Args};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("decision").required(true).args(["accept", "reject"])))]
pub struct ReviewArgs {
    /// Logsheet id as shown by `pending`
    id: String,

    #[arg(short, long)]
    accept: bool,

    #[arg(short, long)]
    reject: bool,

    /// Reason shown to the operator; asked for when rejecting without it
    #[arg(long)]
    reason: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: ReviewArgs) -> Result<()> {
    let (mut api, session) = connect(Role::Admin).await?;

    let update = if args.accept {
        if !args.yes {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmAccept(args.id.clone()).to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::ReviewCancelled);
                return Ok(());
            }
        }
        StatusUpdate::accept()
    } else {
        let reason = match args.reason {
            Some(reason) => reason,
            None => Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRejectionReason.to_string())
                .allow_empty(true)
                .interact_text()?,
        };
        StatusUpdate::reject(&reason).map_err(|e| msg_error_anyhow!(Message::from(e)))?
    };

    api.update_status(&session, &args.id, &update)
        .await
        .map_err(|e| api_failure(e, Message::UpdateStatusFailed))?;

    if args.accept {
        msg_success!(Message::LogsheetAccepted(args.id));
    } else {
        msg_success!(Message::LogsheetRejected(args.id));
    }
    Ok(())
}
