//! Logsheet data model shared by the submission form and the API client.
//!
//! A [`Logsheet`] is what an operator fills in and submits; a
//! [`LogsheetRecord`] is the server's view of a submitted logsheet with its
//! review status. Field names follow the JSON the logsheet API exchanges.

use super::totals::Totals;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Only addresses on this domain can receive generated credentials.
pub const ALLOWED_EMAIL_DOMAIN: &str = "@gmail.com";

/// Minimum length accepted for a new account password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side validation failures raised before anything is sent to the API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogsheetError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("a rejection reason is required")]
    MissingRejectionReason,
    #[error("please add at least one user email")]
    NoUsers,
    #[error("only Gmail addresses are supported: {0}")]
    UnsupportedEmail(String),
    #[error("new passwords do not match")]
    PasswordMismatch,
    #[error("new password must be at least {} characters long", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("session token is malformed")]
    MalformedToken,
    #[error("this command is available to administrators only")]
    AdminOnly,
    #[error("administrators review logsheets with `pending` and `review` instead")]
    OperatorOnly,
}

/// Time and meter reading captured at one end of the shift.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPoint {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub hmr_or_kmr_reading: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingDetails {
    #[serde(default)]
    pub commenced: ShiftPoint,
    #[serde(default)]
    pub completed: ShiftPoint,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionDetails {
    #[serde(default)]
    pub activity_code: String,
    #[serde(default)]
    pub quantity_produced: f64,
    #[serde(default)]
    pub work_done: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_signature: String,
}

/// One daily equipment-usage submission.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logsheet {
    #[serde(default)]
    pub asset_code: String,
    #[serde(default)]
    pub asset_description: String,
    #[serde(default)]
    pub operator_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub working_details: WorkingDetails,
    #[serde(default)]
    pub production_details: ProductionDetails,
    #[serde(default)]
    pub totals: Totals,
    #[serde(default)]
    pub user_info: UserInfo,
}

impl Logsheet {
    /// Checks the fields the API refuses to accept empty.
    pub fn validate(&self) -> Result<(), LogsheetError> {
        if self.asset_code.trim().is_empty() {
            return Err(LogsheetError::MissingField("Asset code"));
        }
        if self.operator_name.trim().is_empty() {
            return Err(LogsheetError::MissingField("Operator name"));
        }
        if self.date.trim().is_empty() {
            return Err(LogsheetError::MissingField("Date"));
        }
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| LogsheetError::InvalidDate(self.date.clone()))?;
        if self.user_info.user_name.trim().is_empty() {
            return Err(LogsheetError::MissingField("User name"));
        }
        Ok(())
    }
}

/// Review state of a submitted logsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum LogsheetStatus {
    Pending,
    Accepted,
    Rejected,
}

impl LogsheetStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            LogsheetStatus::Pending => "🕒",
            LogsheetStatus::Accepted => "✅",
            LogsheetStatus::Rejected => "❌",
        }
    }
}

impl fmt::Display for LogsheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LogsheetStatus::Pending => "Pending",
            LogsheetStatus::Accepted => "Accepted",
            LogsheetStatus::Rejected => "Rejected",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Submitter reference: admin listings populate it, personal listings may
/// only carry the raw id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Submitter {
    Populated {
        #[serde(default)]
        email: String,
    },
    Id(String),
}

impl Submitter {
    pub fn email(&self) -> Option<&str> {
        match self {
            Submitter::Populated { email } if !email.is_empty() => Some(email),
            _ => None,
        }
    }
}

/// A submitted logsheet as stored by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsheetRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Submitter>,
    pub data: Logsheet,
    pub status: LogsheetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Reviewer>,
}

impl LogsheetRecord {
    pub fn submitter_email(&self) -> &str {
        self.user_id.as_ref().and_then(Submitter::email).unwrap_or("-")
    }
}

/// Status change requested by an administrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: LogsheetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl StatusUpdate {
    pub fn accept() -> Self {
        Self {
            status: LogsheetStatus::Accepted,
            rejection_reason: None,
        }
    }

    /// Rejection always carries a non-blank, trimmed reason.
    pub fn reject(reason: &str) -> Result<Self, LogsheetError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(LogsheetError::MissingRejectionReason);
        }
        Ok(Self {
            status: LogsheetStatus::Rejected,
            rejection_reason: Some(reason.to_string()),
        })
    }
}

/// Account requested by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub is_admin: bool,
}

/// Drops blank rows and enforces the mail domain for the remaining ones.
pub fn validate_new_users(users: &[NewUser]) -> Result<Vec<NewUser>, LogsheetError> {
    let users: Vec<NewUser> = users
        .iter()
        .filter(|user| !user.email.trim().is_empty())
        .map(|user| NewUser {
            email: user.email.trim().to_string(),
            is_admin: user.is_admin,
        })
        .collect();

    if users.is_empty() {
        return Err(LogsheetError::NoUsers);
    }

    let rejected: Vec<&str> = users
        .iter()
        .filter(|user| !user.email.to_lowercase().ends_with(ALLOWED_EMAIL_DOMAIN))
        .map(|user| user.email.as_str())
        .collect();
    if !rejected.is_empty() {
        return Err(LogsheetError::UnsupportedEmail(rejected.join(", ")));
    }

    Ok(users)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn new(old_password: &str, new_password: &str, confirmation: &str) -> Result<Self, LogsheetError> {
        if new_password != confirmation {
            return Err(LogsheetError::PasswordMismatch);
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LogsheetError::PasswordTooShort);
        }
        Ok(Self {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        })
    }
}

/// Formats an API date (`YYYY-MM-DD` or an RFC 3339 timestamp) as a local
/// calendar date. Unparseable input is returned unchanged.
pub fn display_date(value: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.with_timezone(&Local).format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    value.to_string()
}
