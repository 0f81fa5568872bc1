#[cfg(test)]
mod tests {
    use logsheet::libs::data_storage::DataStorage;
    use logsheet::libs::secret::Secret;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SecretTestContext {
        _temp_dir: TempDir,
        secret: Secret,
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path());
            SecretTestContext {
                secret: Secret::new(&storage, ".test_secret", "Enter test password"),
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn stored_password_reads_back(ctx: &mut SecretTestContext) {
        ctx.secret.store("test_password_123").unwrap();
        assert_eq!(ctx.secret.read().unwrap(), "test_password_123");
        assert_eq!(ctx.secret.get_or_prompt().unwrap(), "test_password_123");
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn password_is_not_stored_in_clear(ctx: &mut SecretTestContext) {
        ctx.secret.store("test_password_123").unwrap();
        let content = fs::read_to_string(ctx.secret.path()).unwrap();
        assert!(!content.contains("test_password_123"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn corrupted_secret_cannot_be_read(ctx: &mut SecretTestContext) {
        fs::write(ctx.secret.path(), "invalid_base64_content!@#$").unwrap();
        assert!(ctx.secret.read().is_err());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn forget_removes_the_file(ctx: &mut SecretTestContext) {
        ctx.secret.store("pw123456").unwrap();
        ctx.secret.forget().unwrap();

        assert!(!ctx.secret.path().exists());
        assert!(ctx.secret.forget().is_ok());
    }
}
