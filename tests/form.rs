#[cfg(test)]
mod tests {
    use logsheet::libs::form::{FormAction, LogsheetForm};
    use logsheet::libs::logsheet::LogsheetError;
    use logsheet::libs::totals::WorkStatus;
    use test_context::{test_context, TestContext};

    struct FormTestContext {
        form: LogsheetForm,
    }

    impl TestContext for FormTestContext {
        fn setup() -> Self {
            let mut form = LogsheetForm::new();
            form.apply_all([
                FormAction::AssetCode("EXC-042".into()),
                FormAction::OperatorName("Ravi Kumar".into()),
                FormAction::Date("2025-03-14".into()),
                FormAction::UserName("Ravi Kumar".into()),
            ]);
            FormTestContext { form }
        }
    }

    #[test_context(FormTestContext)]
    #[test]
    fn times_update_the_working_bucket(ctx: &mut FormTestContext) {
        ctx.form.apply(FormAction::CommencedTime("08:00".into()));
        assert_eq!(ctx.form.totals().working_hours, 0.0);

        ctx.form.apply(FormAction::CompletedTime("16:00".into()));
        assert_eq!(ctx.form.totals().working_hours, 8.0);
    }

    #[test_context(FormTestContext)]
    #[test]
    fn status_change_moves_hours_between_buckets(ctx: &mut FormTestContext) {
        ctx.form.apply_all([
            FormAction::CommencedTime("22:00".into()),
            FormAction::CompletedTime("06:00".into()),
            FormAction::WorkStatus(WorkStatus::Idle),
        ]);
        assert_eq!(ctx.form.work_status(), WorkStatus::Idle);
        assert_eq!(ctx.form.totals().working_hours, 0.0);
        assert_eq!(ctx.form.totals().idle_hours, 8.0);
    }

    #[test_context(FormTestContext)]
    #[test]
    fn readings_update_the_run(ctx: &mut FormTestContext) {
        ctx.form.apply_all([
            FormAction::CommencedReading("100".into()),
            FormAction::CompletedReading("145".into()),
        ]);
        assert_eq!(ctx.form.totals().hmr_or_kmr_run, "45");

        ctx.form.apply(FormAction::CompletedReading("90".into()));
        assert_eq!(ctx.form.totals().hmr_or_kmr_run, "45");
    }

    #[test_context(FormTestContext)]
    #[test]
    fn manual_totals_survive_unwatched_edits(ctx: &mut FormTestContext) {
        ctx.form.apply_all([
            FormAction::CommencedTime("08:00".into()),
            FormAction::CompletedTime("16:00".into()),
            FormAction::WorkingHours(7.5),
            FormAction::FuelInLiters(60.0),
            FormAction::WorkDone("Trenching".into()),
            FormAction::ActivityCode("A-7".into()),
        ]);
        assert_eq!(ctx.form.totals().working_hours, 7.5);
        assert_eq!(ctx.form.totals().fuel_in_liters, 60.0);

        // A watched edit re-derives the hours but keeps the fuel.
        ctx.form.apply(FormAction::QuantityProduced(20.0));
        assert_eq!(ctx.form.totals().working_hours, 8.0);
        assert_eq!(ctx.form.totals().production_qty, 20.0);
        assert_eq!(ctx.form.totals().fuel_in_liters, 60.0);
    }

    #[test_context(FormTestContext)]
    #[test]
    fn clearing_quantity_keeps_production(ctx: &mut FormTestContext) {
        ctx.form.apply(FormAction::QuantityProduced(20.0));
        ctx.form.apply(FormAction::QuantityProduced(0.0));
        assert_eq!(ctx.form.logsheet().production_details.quantity_produced, 0.0);
        assert_eq!(ctx.form.totals().production_qty, 20.0);
    }

    #[test]
    fn only_calculator_inputs_are_watched() {
        assert!(FormAction::CommencedTime(String::new()).affects_totals());
        assert!(FormAction::CompletedReading(String::new()).affects_totals());
        assert!(FormAction::WorkStatus(WorkStatus::Breakdown).affects_totals());
        assert!(FormAction::QuantityProduced(1.0).affects_totals());

        assert!(!FormAction::AssetCode(String::new()).affects_totals());
        assert!(!FormAction::HmrOrKmrRun(String::new()).affects_totals());
        assert!(!FormAction::FuelInLiters(1.0).affects_totals());
        assert!(!FormAction::WorkingHours(1.0).affects_totals());
    }

    #[test_context(FormTestContext)]
    #[test]
    fn submission_carries_every_section(ctx: &mut FormTestContext) {
        ctx.form.apply_all([
            FormAction::AssetDescription("Excavator".into()),
            FormAction::CommencedTime("08:00".into()),
            FormAction::CommencedReading("100".into()),
            FormAction::CompletedTime("12:00".into()),
            FormAction::CompletedReading("104".into()),
            FormAction::UserSignature("R.K.".into()),
        ]);
        let sheet = ctx.form.clone().into_submission().unwrap();

        assert_eq!(sheet.asset_code, "EXC-042");
        assert_eq!(sheet.working_details.commenced.time, "08:00");
        assert_eq!(sheet.working_details.completed.hmr_or_kmr_reading, "104");
        assert_eq!(sheet.totals.working_hours, 4.0);
        assert_eq!(sheet.totals.hmr_or_kmr_run, "4");
        assert_eq!(sheet.user_info.user_signature, "R.K.");
    }

    #[test_context(FormTestContext)]
    #[test]
    fn submission_requires_asset_code(ctx: &mut FormTestContext) {
        ctx.form.apply(FormAction::AssetCode("  ".into()));
        assert_eq!(ctx.form.clone().into_submission(), Err(LogsheetError::MissingField("Asset code")));
    }

    #[test]
    fn empty_form_is_rejected() {
        assert!(LogsheetForm::new().into_submission().is_err());
    }
}
