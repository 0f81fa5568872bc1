//! Submission form state.
//!
//! Every edit goes through [`LogsheetForm::apply`] as a typed [`FormAction`].
//! Edits to the working interval, the meter readings, the work status or the
//! produced quantity re-run the totals calculation; all other edits are
//! stored as entered.

use super::logsheet::{Logsheet, LogsheetError};
use super::totals::{MeterReadingPair, Totals, WorkStatus, WorkingInterval};

/// One edit of one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    AssetCode(String),
    AssetDescription(String),
    OperatorName(String),
    Date(String),
    CommencedTime(String),
    CommencedReading(String),
    CompletedTime(String),
    CompletedReading(String),
    WorkStatus(WorkStatus),
    ActivityCode(String),
    QuantityProduced(f64),
    WorkDone(String),
    WorkingHours(f64),
    IdleHours(f64),
    BreakdownHours(f64),
    ProductionQty(f64),
    HmrOrKmrRun(String),
    FuelInLiters(f64),
    UserName(String),
    UserSignature(String),
}

impl FormAction {
    /// Whether this edit changes an input of the totals calculation.
    pub fn affects_totals(&self) -> bool {
        matches!(
            self,
            FormAction::CommencedTime(_)
                | FormAction::CommencedReading(_)
                | FormAction::CompletedTime(_)
                | FormAction::CompletedReading(_)
                | FormAction::WorkStatus(_)
                | FormAction::QuantityProduced(_)
        )
    }
}

/// In-memory state of a logsheet being filled in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogsheetForm {
    logsheet: Logsheet,
    work_status: WorkStatus,
}

impl LogsheetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logsheet(&self) -> &Logsheet {
        &self.logsheet
    }

    pub fn totals(&self) -> &Totals {
        &self.logsheet.totals
    }

    pub fn work_status(&self) -> WorkStatus {
        self.work_status
    }

    /// Applies a batch of edits in order.
    pub fn apply_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = FormAction>,
    {
        for action in actions {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        let recompute = action.affects_totals();
        let sheet = &mut self.logsheet;

        match action {
            FormAction::AssetCode(value) => sheet.asset_code = value,
            FormAction::AssetDescription(value) => sheet.asset_description = value,
            FormAction::OperatorName(value) => sheet.operator_name = value,
            FormAction::Date(value) => sheet.date = value,
            FormAction::CommencedTime(value) => sheet.working_details.commenced.time = value,
            FormAction::CommencedReading(value) => sheet.working_details.commenced.hmr_or_kmr_reading = value,
            FormAction::CompletedTime(value) => sheet.working_details.completed.time = value,
            FormAction::CompletedReading(value) => sheet.working_details.completed.hmr_or_kmr_reading = value,
            FormAction::WorkStatus(status) => self.work_status = status,
            FormAction::ActivityCode(value) => sheet.production_details.activity_code = value,
            FormAction::QuantityProduced(value) => sheet.production_details.quantity_produced = value,
            FormAction::WorkDone(value) => sheet.production_details.work_done = value,
            FormAction::WorkingHours(value) => sheet.totals.working_hours = value,
            FormAction::IdleHours(value) => sheet.totals.idle_hours = value,
            FormAction::BreakdownHours(value) => sheet.totals.breakdown_hours = value,
            FormAction::ProductionQty(value) => sheet.totals.production_qty = value,
            FormAction::HmrOrKmrRun(value) => sheet.totals.hmr_or_kmr_run = value,
            FormAction::FuelInLiters(value) => sheet.totals.fuel_in_liters = value,
            FormAction::UserName(value) => sheet.user_info.user_name = value,
            FormAction::UserSignature(value) => sheet.user_info.user_signature = value,
        }

        if recompute {
            self.recompute_totals();
        }
    }

    fn recompute_totals(&mut self) {
        let working = &self.logsheet.working_details;
        let interval = WorkingInterval::parse(&working.commenced.time, &working.completed.time);
        let readings = MeterReadingPair::parse(&working.commenced.hmr_or_kmr_reading, &working.completed.hmr_or_kmr_reading);
        let quantity = self.logsheet.production_details.quantity_produced;

        self.logsheet.totals = self.logsheet.totals.recompute(&interval, self.work_status, &readings, quantity);
        tracing::debug!(totals = ?self.logsheet.totals, status = %self.work_status, "totals recomputed");
    }

    /// Validates the required fields and hands out the payload to submit.
    pub fn into_submission(self) -> Result<Logsheet, LogsheetError> {
        self.logsheet.validate()?;
        Ok(self.logsheet)
    }
}
