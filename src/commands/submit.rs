//! Daily logsheet submission.
//!
//! Every field can be passed as an argument; whatever is missing is asked for
//! interactively, prefilled from the operator defaults of the configuration.
//! Totals are derived while the form is filled in and can be overridden with
//! `--working-hours` and friends before the preview is shown.

use super::calc::{meter_reading, shift_time};
use super::{api_failure, connect, Role};
use crate::{
    libs::{
        clock::normalize_time,
        config::{Config, OperatorConfig},
        form::{FormAction, LogsheetForm},
        messages::Message,
        totals::{parse_reading, WorkStatus},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Asset code of the machine
    #[arg(short, long)]
    asset: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(short, long)]
    operator: Option<String>,

    /// Shift date (YYYY-MM-DD), today by default
    #[arg(short, long)]
    date: Option<String>,

    /// Shift start, `HH:MM` or `h:MM AM/PM`
    #[arg(long)]
    commenced: Option<String>,

    #[arg(long)]
    commenced_reading: Option<String>,

    /// Shift end, `HH:MM` or `h:MM AM/PM`
    #[arg(long)]
    completed: Option<String>,

    #[arg(long)]
    completed_reading: Option<String>,

    #[arg(short = 'w', long, value_enum)]
    status: Option<WorkStatus>,

    #[arg(long)]
    activity_code: Option<String>,

    #[arg(short, long)]
    quantity: Option<f64>,

    #[arg(long)]
    work_done: Option<String>,

    #[arg(short, long)]
    fuel: Option<f64>,

    /// Override the calculated working hours
    #[arg(long)]
    working_hours: Option<f64>,

    /// Override the calculated idle hours
    #[arg(long)]
    idle_hours: Option<f64>,

    /// Override the calculated breakdown hours
    #[arg(long)]
    breakdown_hours: Option<f64>,

    /// Override the calculated HMR/KMR run
    #[arg(long)]
    run: Option<String>,

    #[arg(long)]
    user_name: Option<String>,

    /// Digital signature (typed name)
    #[arg(long)]
    signature: Option<String>,

    /// Do not ask for missing fields
    #[arg(long)]
    no_prompt: bool,

    /// Submit without the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Asks for one text field unless it was given as an argument.
struct Prompter {
    interactive: bool,
}

impl Prompter {
    fn text(&self, value: Option<String>, message: Message, default: &str) -> Result<String> {
        if let Some(value) = value {
            return Ok(value.trim().to_string());
        }
        if !self.interactive {
            return Ok(default.to_string());
        }
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()?;
        Ok(input.trim().to_string())
    }

    fn time(&self, value: Option<String>, message: Message) -> Result<String> {
        if let Some(value) = value {
            return shift_time(&value);
        }
        if !self.interactive {
            return Ok(String::new());
        }
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                normalize_time(input).map(|_| ()).ok_or_else(|| Message::InvalidTime(input.clone()).to_string())
            })
            .interact_text()?;
        shift_time(&input)
    }

    fn reading(&self, value: Option<String>, message: Message) -> Result<String> {
        if let Some(value) = value {
            return meter_reading(&value);
        }
        if !self.interactive {
            return Ok(String::new());
        }
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() || parse_reading(input).is_some() {
                    Ok(())
                } else {
                    Err(Message::InvalidNumber(input.clone()).to_string())
                }
            })
            .interact_text()?;
        meter_reading(&input)
    }

    fn number(&self, value: Option<f64>, message: Message) -> Result<f64> {
        if let Some(value) = value {
            return Ok(value);
        }
        if !self.interactive {
            return Ok(0.0);
        }
        Ok(Input::<f64>::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .default(0.0)
            .interact_text()?)
    }

    fn status(&self, value: Option<WorkStatus>) -> Result<WorkStatus> {
        if let Some(value) = value {
            return Ok(value);
        }
        if !self.interactive {
            return Ok(WorkStatus::default());
        }
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkStatus.to_string())
            .items(&WorkStatus::ALL)
            .default(0)
            .interact()?;
        Ok(WorkStatus::ALL[selection])
    }
}

/// Fills the form from arguments and prompts, in the order of the paper logsheet.
fn fill_form(args: SubmitArgs, defaults: &OperatorConfig) -> Result<LogsheetForm> {
    let prompt = Prompter { interactive: !args.no_prompt };
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let mut form = LogsheetForm::new();

    form.apply_all([
        FormAction::AssetCode(prompt.text(args.asset, Message::PromptAssetCode, "")?),
        FormAction::AssetDescription(prompt.text(args.description, Message::PromptAssetDescription, "")?),
        FormAction::OperatorName(prompt.text(args.operator, Message::PromptOperatorName, &defaults.operator_name)?),
        FormAction::Date(prompt.text(args.date, Message::PromptDate, &today)?),
        FormAction::CommencedTime(prompt.time(args.commenced, Message::PromptCommencedTime)?),
        FormAction::CommencedReading(prompt.reading(args.commenced_reading, Message::PromptCommencedReading)?),
        FormAction::CompletedTime(prompt.time(args.completed, Message::PromptCompletedTime)?),
        FormAction::CompletedReading(prompt.reading(args.completed_reading, Message::PromptCompletedReading)?),
        FormAction::WorkStatus(prompt.status(args.status)?),
        FormAction::ActivityCode(prompt.text(args.activity_code, Message::PromptActivityCode, "")?),
        FormAction::QuantityProduced(prompt.number(args.quantity, Message::PromptQuantityProduced)?),
        FormAction::WorkDone(prompt.text(args.work_done, Message::PromptWorkDone, "")?),
        FormAction::FuelInLiters(prompt.number(args.fuel, Message::PromptFuelInLiters)?),
    ]);

    // Manual corrections of the derived totals.
    if let Some(hours) = args.working_hours {
        form.apply(FormAction::WorkingHours(hours));
    }
    if let Some(hours) = args.idle_hours {
        form.apply(FormAction::IdleHours(hours));
    }
    if let Some(hours) = args.breakdown_hours {
        form.apply(FormAction::BreakdownHours(hours));
    }
    if let Some(run) = args.run {
        form.apply(FormAction::HmrOrKmrRun(meter_reading(&run)?));
    }

    form.apply_all([
        FormAction::UserName(prompt.text(args.user_name, Message::PromptUserName, &defaults.user_name)?),
        FormAction::UserSignature(prompt.text(args.signature, Message::PromptUserSignature, &defaults.user_signature)?),
    ]);

    Ok(form)
}

pub async fn cmd(args: SubmitArgs) -> Result<()> {
    let (mut api, session) = connect(Role::Operator).await?;
    let defaults = Config::read()?.operator.unwrap_or_default();
    let skip_confirmation = args.yes;

    let form = fill_form(args, &defaults)?;
    let logsheet = form.into_submission().map_err(|e| msg_error_anyhow!(Message::from(e)))?;

    msg_print!(Message::SubmissionPreview, true);
    View::logsheet(&logsheet)?;

    if !skip_confirmation {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmSubmission.to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::SubmissionCancelled);
            return Ok(());
        }
    }

    let reply = api
        .submit(&session, &logsheet)
        .await
        .map_err(|e| api_failure(e, Message::SubmissionFailed))?;
    tracing::debug!(reply = ?reply, asset = %logsheet.asset_code, "logsheet submitted");

    msg_success!(Message::LogsheetSubmitted);
    Ok(())
}
