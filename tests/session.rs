#[cfg(test)]
mod tests {
    use anyhow::Result;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
    use base64::Engine;
    use logsheet::api::client::ApiError;
    use logsheet::api::Session;
    use logsheet::libs::data_storage::DataStorage;
    use logsheet::libs::logsheet::LogsheetError;
    use logsheet::libs::secret::Secret;
    use logsheet::libs::session::{Claims, SessionContext};
    use reqwest::StatusCode;
    use serde_json::json;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    const TOKEN_FILE: &str = ".test_token";
    const SECRET_FILE: &str = ".test_secret";

    fn token(claims: serde_json::Value) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl", URL_SAFE_NO_PAD.encode(claims.to_string()))
    }

    fn operator_token() -> String {
        token(json!({ "email": "ravi.kumar@gmail.com", "isAdmin": false, "exp": 4102444800i64 }))
    }

    struct MockSession {
        storage: DataStorage,
        issued_token: String,
        password: Option<String>,
        logins: Cell<u32>,
        retries: i32,
        offline: bool,
    }

    impl Session for MockSession {
        async fn login(&self) -> Result<String> {
            self.logins.set(self.logins.get() + 1);
            if self.offline {
                return Err(ApiError::Network("connection refused".to_string()).into());
            }
            match self.password.as_deref() {
                Some("correct horse") => Ok(self.issued_token.clone()),
                _ => Err(ApiError::Rejected {
                    status: StatusCode::UNAUTHORIZED,
                    message: "Invalid credentials".to_string(),
                }
                .into()),
            }
        }

        fn set_credentials(&mut self, password: &str) -> Result<()> {
            self.password = Some(password.to_string());
            Ok(())
        }

        fn token_file(&self) -> &str {
            TOKEN_FILE
        }

        fn storage(&self) -> &DataStorage {
            &self.storage
        }

        fn secret(&self) -> Secret {
            Secret::new(&self.storage, SECRET_FILE, "Password")
        }

        fn retry(&self) -> i32 {
            self.retries
        }

        fn inc_retry(&mut self) {
            self.retries += 1;
        }
    }

    struct SessionTestContext {
        _temp_dir: TempDir,
        session: MockSession,
    }

    impl AsyncTestContext for SessionTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("logsheet"));
            Secret::new(&storage, SECRET_FILE, "Password").store("correct horse").unwrap();

            SessionTestContext {
                _temp_dir: temp_dir,
                session: MockSession {
                    storage,
                    issued_token: operator_token(),
                    password: None,
                    logins: Cell::new(0),
                    retries: 0,
                    offline: false,
                },
            }
        }
    }

    impl SessionTestContext {
        fn token_path(&self) -> std::path::PathBuf {
            self.session.storage.get_path(TOKEN_FILE).unwrap()
        }
    }

    #[test]
    fn claims_are_read_from_the_payload() {
        let claims = Claims::decode(&token(json!({ "email": "boss@gmail.com", "isAdmin": true, "id": "a1" }))).unwrap();
        assert_eq!(claims.email, "boss@gmail.com");
        assert!(claims.is_admin);
        assert_eq!(claims.exp, None);
        assert!(!claims.is_expired());
    }

    #[test]
    fn padded_standard_base64_is_accepted() {
        let payload = STANDARD.encode(json!({ "email": "x@gmail.com" }).to_string());
        let claims = Claims::decode(&format!("h.{}.s", payload)).unwrap();
        assert_eq!(claims.email, "x@gmail.com");
        assert!(!claims.is_admin);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(Claims::decode("no-dots-here"), Err(LogsheetError::MalformedToken));
        assert_eq!(Claims::decode("a.%%%.c"), Err(LogsheetError::MalformedToken));
        assert_eq!(Claims::decode(&format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"))), Err(LogsheetError::MalformedToken));
    }

    #[test]
    fn past_expiry_is_expired() {
        let claims = Claims::decode(&token(json!({ "email": "x@gmail.com", "exp": 1000 }))).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn operator_context() {
        let context = SessionContext::from_token(&operator_token()).unwrap();
        assert_eq!(context.email(), "ravi.kumar@gmail.com");
        assert_eq!(context.role(), "User");
        assert_eq!(context.initials(), "RA");
        assert!(context.require_operator().is_ok());
        assert_eq!(context.require_admin(), Err(LogsheetError::AdminOnly));
    }

    #[test]
    fn admin_context() {
        let context = SessionContext::from_token(&token(json!({ "email": "b@gmail.com", "isAdmin": true }))).unwrap();
        assert_eq!(context.role(), "Administrator");
        assert_eq!(context.initials(), "B");
        assert!(context.require_admin().is_ok());
        assert_eq!(context.require_operator(), Err(LogsheetError::OperatorOnly));
    }

    #[test]
    fn missing_email_falls_back_to_user() {
        let context = SessionContext::from_token(&token(json!({}))).unwrap();
        assert_eq!(context.email(), "User");
        assert_eq!(context.initials(), "");
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn cached_token_skips_login(ctx: &mut SessionTestContext) {
        fs::write(ctx.token_path(), operator_token()).unwrap();

        let context = ctx.session.session_context().await.unwrap();
        assert_eq!(context.email(), "ravi.kumar@gmail.com");
        assert_eq!(ctx.session.logins.get(), 0);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn login_uses_cached_password_and_stores_token(ctx: &mut SessionTestContext) {
        let token = ctx.session.get_token().await.unwrap();

        assert_eq!(token, operator_token());
        assert_eq!(ctx.session.logins.get(), 1);
        assert_eq!(fs::read_to_string(ctx.token_path()).unwrap(), token);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn expired_token_is_replaced(ctx: &mut SessionTestContext) {
        fs::write(ctx.token_path(), token(json!({ "email": "ravi.kumar@gmail.com", "exp": 1000 }))).unwrap();

        let token = ctx.session.get_token().await.unwrap();
        assert_eq!(token, operator_token());
        assert_eq!(ctx.session.logins.get(), 1);
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn garbage_token_file_is_discarded(ctx: &mut SessionTestContext) {
        fs::write(ctx.token_path(), "garbage").unwrap();

        assert_eq!(ctx.session.cached_token().unwrap(), None);
        assert!(!ctx.token_path().exists());
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn undecodable_login_token_fails_the_session(ctx: &mut SessionTestContext) {
        ctx.session.issued_token = "opaque-token".to_string();

        let error = ctx.session.session_context().await.unwrap_err();
        assert!(error.to_string().contains("Login failed"));
        assert!(!ctx.token_path().exists());
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn unreachable_login_is_not_a_wrong_password(ctx: &mut SessionTestContext) {
        ctx.session.offline = true;

        let error = ctx.session.get_token().await.unwrap_err();
        assert!(matches!(error.downcast_ref::<ApiError>(), Some(ApiError::Network(_))));
        assert_eq!(ctx.session.logins.get(), 1);
        assert_eq!(ctx.session.retries, 0);
        assert!(!ctx.token_path().exists());
        assert_eq!(ctx.session.secret().read().unwrap(), "correct horse");
    }

    #[test_context(SessionTestContext)]
    #[tokio::test]
    async fn delete_token_tolerates_missing_file(ctx: &mut SessionTestContext) {
        assert!(ctx.session.delete_token().is_ok());
        ctx.session.write_token("abc").unwrap();
        ctx.session.delete_token().unwrap();
        assert!(!ctx.token_path().exists());
    }
}
