//! Authenticated session handed to every command.
//!
//! The logsheet API issues a JWT. Its payload carries the account email and
//! role; the client reads them to decide which commands a user may run and
//! whether a cached token is still usable. The signature is never checked
//! here, that is the server's job.

use super::logsheet::LogsheetError;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;

/// Claims read from the token payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Decodes the payload segment of a `header.payload.signature` token.
    ///
    /// Both the URL-safe and the standard base64 alphabets are accepted, with
    /// or without padding.
    pub fn decode(token: &str) -> Result<Self, LogsheetError> {
        let payload = token.trim().split('.').nth(1).ok_or(LogsheetError::MalformedToken)?;
        let payload = payload.trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .or_else(|_| STANDARD_NO_PAD.decode(payload))
            .map_err(|_| LogsheetError::MalformedToken)?;
        serde_json::from_slice(&bytes).map_err(|_| LogsheetError::MalformedToken)
    }

    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| exp <= Utc::now().timestamp())
    }
}

/// Bearer token plus the identity it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    claims: Claims,
}

impl SessionContext {
    pub fn from_token(token: &str) -> Result<Self, LogsheetError> {
        let token = token.trim();
        let claims = Claims::decode(token)?;
        Ok(Self {
            token: token.to_string(),
            claims,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn email(&self) -> &str {
        if self.claims.email.is_empty() {
            "User"
        } else {
            &self.claims.email
        }
    }

    pub fn is_admin(&self) -> bool {
        self.claims.is_admin
    }

    pub fn role(&self) -> &'static str {
        if self.is_admin() {
            "Administrator"
        } else {
            "User"
        }
    }

    /// First two characters of the mailbox name, upper-cased.
    pub fn initials(&self) -> String {
        let local = self.claims.email.split('@').next().unwrap_or_default();
        local.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn require_admin(&self) -> Result<(), LogsheetError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(LogsheetError::AdminOnly)
        }
    }

    /// Operators submit and track logsheets; administrators only review.
    pub fn require_operator(&self) -> Result<(), LogsheetError> {
        if self.is_admin() {
            Err(LogsheetError::OperatorOnly)
        } else {
            Ok(())
        }
    }
}
