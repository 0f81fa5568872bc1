#[cfg(test)]
mod tests {
    use logsheet::libs::export::{ExportFormat, Exporter};
    use logsheet::libs::logsheet::{Logsheet, LogsheetRecord, LogsheetStatus};
    use logsheet::libs::totals::Totals;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        records: Vec<LogsheetRecord>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let accepted = LogsheetRecord {
                id: "65f0c1".to_string(),
                user_id: None,
                data: Logsheet {
                    asset_code: "EXC-042".to_string(),
                    operator_name: "Ravi, Kumar".to_string(),
                    date: "2025-03-14".to_string(),
                    totals: Totals {
                        working_hours: 8.0,
                        hmr_or_kmr_run: "45".to_string(),
                        ..Totals::default()
                    },
                    ..Logsheet::default()
                },
                status: LogsheetStatus::Accepted,
                rejection_reason: None,
                submitted_at: "2025-03-14T17:00:00.000Z".to_string(),
                reviewed_by: None,
            };
            let rejected = LogsheetRecord {
                id: "65f0c2".to_string(),
                status: LogsheetStatus::Rejected,
                rejection_reason: Some("Fuel missing".to_string()),
                ..accepted.clone()
            };

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                records: vec![accepted, rejected],
            }
        }
    }

    impl ExportTestContext {
        fn path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    #[test]
    fn default_file_name_follows_format() {
        assert_eq!(Exporter::new(ExportFormat::Csv, None).output_path(), PathBuf::from("my-logsheets.csv"));
        assert_eq!(Exporter::new(ExportFormat::Json, None).output_path(), PathBuf::from("my-logsheets.json"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn csv_has_one_row_per_logsheet(ctx: &mut ExportTestContext) {
        let path = ctx.path("out.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).write_records(&ctx.records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "id");
        assert!(headers.iter().any(|header| header == "hmr_or_kmr_run"));
        assert!(headers.iter().any(|header| header == "rejection_reason"));

        let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "65f0c1");
        assert_eq!(&rows[0][1], "Accepted");
        assert_eq!(&rows[0][5], "Ravi, Kumar");
        assert_eq!(&rows[1][headers.len() - 1], "Fuel missing");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn json_keeps_api_records(ctx: &mut ExportTestContext) {
        let path = ctx.path("out.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).write_records(&ctx.records).unwrap();

        let records: Vec<LogsheetRecord> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(records, ctx.records);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn server_csv_is_saved_verbatim(ctx: &mut ExportTestContext) {
        let path = ctx.path("server.csv");
        let body = b"Asset Code,Date,Status\nEXC-042,2025-03-14,Accepted\n";
        Exporter::new(ExportFormat::Csv, Some(path.clone())).write_bytes(body).unwrap();

        assert_eq!(fs::read(&path).unwrap(), body);
    }
}
