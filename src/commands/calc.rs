//! Offline totals calculation.
//!
//! Runs the same form logic as `submit` and prints the derived totals, so an
//! operator can check a shift before filling in the whole logsheet.

use crate::{
    libs::{
        clock::normalize_time,
        form::{FormAction, LogsheetForm},
        messages::Message,
        totals::{parse_reading, WorkStatus},
        view::View,
    },
    msg_bail_anyhow,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Shift start, `HH:MM` or `h:MM AM/PM`
    #[arg(short = 's', long)]
    commenced: Option<String>,

    /// Shift end, `HH:MM` or `h:MM AM/PM`; earlier than the start means the next day
    #[arg(short = 'e', long)]
    completed: Option<String>,

    /// HMR/KMR meter reading at the start of the shift
    #[arg(long)]
    commenced_reading: Option<String>,

    /// HMR/KMR meter reading at the end of the shift
    #[arg(long)]
    completed_reading: Option<String>,

    /// Bucket the shift hours are counted in
    #[arg(short = 'w', long, value_enum, default_value_t = WorkStatus::Working)]
    status: WorkStatus,

    /// Quantity produced during the shift
    #[arg(short, long)]
    quantity: Option<f64>,
}

/// Normalized `HH:MM` of a shift time argument.
pub(crate) fn shift_time(value: &str) -> Result<String> {
    match normalize_time(value) {
        Some(time) => Ok(time),
        None => msg_bail_anyhow!(Message::InvalidTime(value.to_string())),
    }
}

/// Meter readings stay text; blank is allowed, anything else must be a number.
pub(crate) fn meter_reading(value: &str) -> Result<String> {
    let value = value.trim();
    if !value.is_empty() && parse_reading(value).is_none() {
        msg_bail_anyhow!(Message::InvalidNumber(value.to_string()));
    }
    Ok(value.to_string())
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let mut form = LogsheetForm::new();
    form.apply(FormAction::WorkStatus(args.status));

    if let Some(time) = args.commenced {
        form.apply(FormAction::CommencedTime(shift_time(&time)?));
    }
    if let Some(time) = args.completed {
        form.apply(FormAction::CompletedTime(shift_time(&time)?));
    }
    if let Some(reading) = args.commenced_reading {
        form.apply(FormAction::CommencedReading(meter_reading(&reading)?));
    }
    if let Some(reading) = args.completed_reading {
        form.apply(FormAction::CompletedReading(meter_reading(&reading)?));
    }
    if let Some(quantity) = args.quantity {
        form.apply(FormAction::QuantityProduced(quantity));
    }

    View::totals(form.totals())
}
