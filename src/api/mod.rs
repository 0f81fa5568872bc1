//! Logsheet API client and session management.
//!
//! [`Session`] is the reusable authentication pattern: restore a cached
//! token, otherwise sign in with a password taken from the encrypted
//! [`Secret`] cache or an interactive prompt, retrying a wrong password a
//! limited number of times. [`client::LogsheetApi`] implements it and
//! exposes one method per API endpoint.
//!
//! ```rust,no_run
//! use logsheet::api::{LogsheetApi, Session};
//! use logsheet::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut api = LogsheetApi::new(&Config::read()?.api()?);
//! let session = api.session_context().await?;
//! let logsheets = api.my_logsheets(&session).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::session::SessionContext;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use std::fs;

pub mod client;

pub use client::LogsheetApi;

/// Wrong-password attempts allowed before giving up.
pub const MAX_RETRY_COUNT: i32 = 3;

/// Token-based session shared by API clients.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Exchanges the stored credentials for a token.
    async fn login(&self) -> Result<String>;

    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// File name of the token cache inside [`Session::storage`].
    fn token_file(&self) -> &str;

    fn storage(&self) -> &DataStorage;

    fn secret(&self) -> Secret;

    fn retry(&self) -> i32;

    fn inc_retry(&mut self);

    /// Returns a usable token, signing in when the cache is empty, unreadable
    /// or expired. Only a rejected password is asked for again; any other
    /// login failure is returned as is.
    async fn get_token(&mut self) -> Result<String> {
        if let Some(token) = self.cached_token()? {
            return Ok(token);
        }

        loop {
            let password = if self.retry() > 0 {
                self.secret().prompt()?
            } else {
                self.secret().get_or_prompt()?
            };
            self.set_credentials(&password)?;

            match self.login().await {
                Ok(token) => {
                    if let Err(e) = self.write_token(&token) {
                        tracing::debug!(error = %e, "token cache not written");
                    }
                    return Ok(token);
                }
                Err(e) => {
                    tracing::debug!(error = %e, attempt = self.retry(), "login failed");
                    let wrong_password = e
                        .downcast_ref::<client::ApiError>()
                        .is_some_and(client::ApiError::is_rejected_credentials);
                    if !wrong_password {
                        return Err(e);
                    }
                    if self.retry() < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    /// Token plus decoded identity, the object commands work with.
    async fn session_context(&mut self) -> Result<SessionContext> {
        let token = self.get_token().await?;
        match SessionContext::from_token(&token) {
            Ok(context) => Ok(context),
            Err(e) => {
                let _ = self.delete_token();
                Err(msg_error_anyhow!(Message::LoginFailed(e.to_string())))
            }
        }
    }

    /// Cached token if present and not expired. Stale tokens are removed.
    fn cached_token(&self) -> Result<Option<String>> {
        let path = self.storage().get_path(self.token_file())?;
        let Ok(token) = fs::read_to_string(&path) else {
            return Ok(None);
        };
        let token = token.trim().to_string();
        match SessionContext::from_token(&token) {
            Ok(context) if !context.claims().is_expired() => Ok(Some(token)),
            Ok(_) => {
                msg_info!(Message::SessionExpired);
                self.delete_token()?;
                Ok(None)
            }
            Err(_) => {
                self.delete_token()?;
                Ok(None)
            }
        }
    }

    fn write_token(&self, token: &str) -> Result<()> {
        fs::write(self.storage().get_path(self.token_file())?, token)?;
        Ok(())
    }

    /// Drops the cached token. A missing file is not an error.
    fn delete_token(&self) -> Result<()> {
        let path = self.storage().get_path(self.token_file())?;
        match fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
