#[cfg(test)]
mod tests {
    use logsheet::libs::config::{ApiConfig, Config, OperatorConfig, CONFIG_FILE_NAME};
    use logsheet::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("lacodda").join("logsheet"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    fn full_config() -> Config {
        Config {
            api: Some(ApiConfig {
                api_url: "https://logsheets.example.com".to_string(),
                email: "ravi.kumar@gmail.com".to_string(),
            }),
            operator: Some(OperatorConfig {
                operator_name: "Ravi Kumar".to_string(),
                user_name: "Ravi".to_string(),
                user_signature: "R.K.".to_string(),
            }),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn saved_config_reads_back(ctx: &mut ConfigTestContext) {
        full_config().save_to(&ctx.storage).unwrap();
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), full_config());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn empty_sections_are_not_written(ctx: &mut ConfigTestContext) {
        let config = Config {
            operator: None,
            ..full_config()
        };
        config.save_to(&ctx.storage).unwrap();

        let text = fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert!(text.contains("\"api_url\""));
        assert!(!text.contains("operator"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn operator_fields_default_when_absent(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), r#"{"operator":{"operator_name":"Anil"}}"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        let operator = config.operator.unwrap();
        assert_eq!(operator.operator_name, "Anil");
        assert_eq!(operator.user_signature, "");
        assert!(config.api.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn corrupted_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn delete_removes_the_file(ctx: &mut ConfigTestContext) {
        full_config().save_to(&ctx.storage).unwrap();
        Config::delete_from(&ctx.storage).unwrap();

        assert!(!ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());
        assert!(Config::delete_from(&ctx.storage).is_ok());
    }

    #[test]
    fn data_storage_creates_its_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(temp_dir.path().join("nested").join("dir"));

        let path = storage.get_path("config.json").unwrap();
        assert!(storage.base_path().is_dir());
        assert_eq!(path, temp_dir.path().join("nested").join("dir").join("config.json"));
    }
}
