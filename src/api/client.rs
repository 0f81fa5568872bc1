//! HTTP client of the logsheet REST API.
//!
//! Every call except login sends the session's bearer token. A `401` drops
//! the cached token, waits a second and signs in again, up to
//! [`MAX_RETRY_COUNT`] times. Other non-success responses are turned into an
//! [`ApiError`] carrying the server's `error` text when it sends one.

use super::{Session, MAX_RETRY_COUNT};
use crate::libs::config::ApiConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::logsheet::{Logsheet, LogsheetRecord, NewUser, PasswordChange, StatusUpdate};
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::session::SessionContext;
use anyhow::Result;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const TOKEN_FILE: &str = ".logsheet_token";
const SECRET_FILE: &str = ".logsheet_secret";
const LOGIN_URL: &str = "api/auth/login";
const CHANGE_PASSWORD_URL: &str = "api/auth/change-password";
const SUBMIT_URL: &str = "api/logsheet/submit";
const MY_LOGS_URL: &str = "api/logsheet/my-logs";
const EXPORT_CSV_URL: &str = "api/logsheet/export-csv";
const PENDING_LOGS_URL: &str = "api/admin/pending-logs";
const UPDATE_STATUS_URL: &str = "api/admin/update-status";
const CREATE_USERS_URL: &str = "api/admin/users/create";

/// Failures talking to the logsheet API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    /// Builds the error from a non-success response, preferring the body's
    /// `error` (or `message`) text over the bare status line.
    async fn from_response(res: Response) -> Self {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .ok()
            .and_then(|body| body.error.or(body.message))
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().map_or_else(|| status.to_string(), str::to_string));
        ApiError::Rejected { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    /// True when the server refused the credentials themselves.
    pub fn is_rejected_credentials(&self) -> bool {
        matches!(self.status(), Some(StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED))
    }
}

#[derive(Serialize, Clone, Debug)]
struct LoginCredentials {
    email: String,
    password: String,
}

#[derive(Deserialize, Debug)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize, Debug, Default)]
struct ApiMessage {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize, Debug)]
struct CreateUsersRequest<'a> {
    users: &'a [NewUser],
}

#[derive(Debug)]
pub struct LogsheetApi {
    client: Client,
    config: ApiConfig,
    storage: DataStorage,
    credentials: Option<LoginCredentials>,
    retries: i32,
}

impl Session for LogsheetApi {
    async fn login(&self) -> Result<String> {
        let credentials = self.credentials.as_ref().ok_or_else(|| anyhow::anyhow!("credentials are not set"))?;
        let res = self
            .client
            .post(self.config.url(LOGIN_URL))
            .json(credentials)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.status().is_success() {
            return Err(ApiError::from_response(res).await.into());
        }
        Ok(res.json::<LoginResponse>().await?.token)
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.credentials = Some(LoginCredentials {
            email: self.config.email.clone(),
            password: password.to_owned(),
        });
        Ok(())
    }

    fn token_file(&self) -> &str {
        TOKEN_FILE
    }

    fn storage(&self) -> &DataStorage {
        &self.storage
    }

    fn secret(&self) -> Secret {
        Secret::new(&self.storage, SECRET_FILE, &Message::PromptPassword.to_string())
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

impl LogsheetApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_storage(config, DataStorage::new())
    }

    pub fn with_storage(config: &ApiConfig, storage: DataStorage) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            storage,
            credentials: None,
            retries: 0,
        }
    }

    /// Forgets the cached token and password.
    pub fn logout(&self) -> Result<()> {
        self.delete_token()?;
        self.secret().forget()
    }

    /// Sends an authorized request and returns the successful response.
    async fn execute(&mut self, session: &SessionContext, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<Response> {
        let url = self.config.url(path);
        let mut token = session.token().to_string();
        let mut attempts = 0;

        loop {
            let mut request = self.client.request(method.clone(), &url).bearer_auth(&token);
            if let Some(body) = &body {
                request = request.json(body);
            }
            let res = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            tracing::debug!(%method, path, status = %res.status(), "api call");

            match res.status() {
                StatusCode::UNAUTHORIZED if attempts < MAX_RETRY_COUNT => {
                    attempts += 1;
                    self.delete_token()?;
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    token = self.get_token().await?;
                }
                status if status.is_success() => return Ok(res),
                _ => return Err(ApiError::from_response(res).await.into()),
            }
        }
    }

    /// Submits a logsheet, returning the server's confirmation text if any.
    pub async fn submit(&mut self, session: &SessionContext, logsheet: &Logsheet) -> Result<Option<String>> {
        let body = serde_json::to_value(logsheet)?;
        let res = self.execute(session, Method::POST, SUBMIT_URL, Some(body)).await?;
        let text = res.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<ApiMessage>(&text).ok().and_then(|body| body.message))
    }

    /// Logsheets submitted by the signed-in operator.
    pub async fn my_logsheets(&mut self, session: &SessionContext) -> Result<Vec<LogsheetRecord>> {
        let res = self.execute(session, Method::GET, MY_LOGS_URL, None).await?;
        Ok(res.json::<Vec<LogsheetRecord>>().await?)
    }

    /// Server-rendered CSV of the operator's logsheets.
    pub async fn export_csv(&mut self, session: &SessionContext) -> Result<Vec<u8>> {
        let res = self.execute(session, Method::GET, EXPORT_CSV_URL, None).await?;
        Ok(res.bytes().await?.to_vec())
    }

    /// Logsheets waiting for review, with the submitter's email populated.
    pub async fn pending_logsheets(&mut self, session: &SessionContext) -> Result<Vec<LogsheetRecord>> {
        let res = self.execute(session, Method::GET, PENDING_LOGS_URL, None).await?;
        Ok(res.json::<Vec<LogsheetRecord>>().await?)
    }

    pub async fn update_status(&mut self, session: &SessionContext, id: &str, update: &StatusUpdate) -> Result<()> {
        let path = format!("{}/{}", UPDATE_STATUS_URL, id);
        self.execute(session, Method::PUT, &path, Some(serde_json::to_value(update)?)).await?;
        Ok(())
    }

    /// Creates accounts; the server mails the generated credentials.
    pub async fn create_users(&mut self, session: &SessionContext, users: &[NewUser]) -> Result<()> {
        let body = serde_json::to_value(CreateUsersRequest { users })?;
        self.execute(session, Method::POST, CREATE_USERS_URL, Some(body)).await?;
        Ok(())
    }

    pub async fn change_password(&mut self, session: &SessionContext, change: &PasswordChange) -> Result<()> {
        self.execute(session, Method::POST, CHANGE_PASSWORD_URL, Some(serde_json::to_value(change)?)).await?;
        Ok(())
    }
}
