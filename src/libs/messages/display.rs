//! Wording of every [`Message`] variant.
//!
//! Keeping the text in one match makes it easy to review tone and to keep
//! the server's default error texts in a single place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleApi => "Logsheet API settings".to_string(),
            Message::ConfigModuleOperator => "Operator defaults".to_string(),
            Message::ApiNotConfigured => "The logsheet API is not configured. Run `logsheet init` or set LOGSHEET_API_URL".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptApiUrl => "Enter the logsheet API URL".to_string(),
            Message::PromptApiEmail => "Enter your account email".to_string(),
            Message::PromptDefaultOperatorName => "Default operator name".to_string(),
            Message::PromptDefaultUserName => "Default user name".to_string(),
            Message::PromptDefaultUserSignature => "Default digital signature".to_string(),

            // === SESSION MESSAGES ===
            Message::PromptPassword => "Enter your logsheet password".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::LoggedIn { email, role } => format!("Logged in as {} ({})", email, role),
            Message::LoggedOut => "Logged out".to_string(),
            Message::SessionExpired => "Session expired, signing in again".to_string(),
            Message::LoginFailed(error) => format!("Login failed: {}", error),

            // === PROFILE MESSAGES ===
            Message::ProfileHeader => "Account Information".to_string(),

            // === SUBMISSION MESSAGES ===
            Message::PromptAssetCode => "Asset code".to_string(),
            Message::PromptAssetDescription => "Asset description".to_string(),
            Message::PromptOperatorName => "Operator name".to_string(),
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptCommencedTime => "Commenced time (HH:MM or h:MM AM/PM)".to_string(),
            Message::PromptCommencedReading => "Commenced HMR/KMR reading".to_string(),
            Message::PromptCompletedTime => "Completed time (HH:MM or h:MM AM/PM)".to_string(),
            Message::PromptCompletedReading => "Completed HMR/KMR reading".to_string(),
            Message::PromptWorkStatus => "Work status".to_string(),
            Message::PromptActivityCode => "Activity code".to_string(),
            Message::PromptQuantityProduced => "Quantity produced".to_string(),
            Message::PromptWorkDone => "Work done".to_string(),
            Message::PromptFuelInLiters => "Fuel in liters".to_string(),
            Message::PromptUserName => "User name".to_string(),
            Message::PromptUserSignature => "Digital signature".to_string(),
            Message::InvalidTime(value) => format!("Invalid time '{}', use HH:MM or h:MM AM/PM", value),
            Message::InvalidNumber(value) => format!("Invalid number '{}'", value),
            Message::SubmissionPreview => "Logsheet to be submitted:".to_string(),
            Message::ConfirmSubmission => "Submit this logsheet?".to_string(),
            Message::SubmissionCancelled => "Submission cancelled".to_string(),
            Message::LogsheetSubmitted => "Logsheet submitted successfully!".to_string(),
            Message::SubmissionFailed(error) => format!("Submission failed: {}", error),

            // === DASHBOARD MESSAGES ===
            Message::LogsheetsHeader(email) => format!("Logsheets of {}", email),
            Message::NoLogsheets => "No logsheets submitted yet".to_string(),
            Message::FetchLogsheetsFailed(error) => format!("Failed to fetch logsheets: {}", error),
            Message::LogsheetNotFound(id) => format!("Logsheet {} not found", id),
            Message::LogsheetDetailsHeader(id) => format!("Logsheet {}", id),

            // === EXPORT MESSAGES ===
            Message::ExportingLogsheets(format) => format!("Exporting logsheets as {}...", format),
            Message::ExportCompleted(path) => format!("Logsheets exported to {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === REVIEW MESSAGES ===
            Message::PendingHeader(count) => format!("Pending logsheets: {}", count),
            Message::NoPendingLogsheets => "No pending logsheets. All caught up!".to_string(),
            Message::FetchPendingFailed(error) => format!("Failed to fetch pending logsheets: {}", error),
            Message::PromptRejectionReason => "Reason for rejecting this logsheet".to_string(),
            Message::ConfirmAccept(id) => format!("Accept logsheet {}?", id),
            Message::ReviewCancelled => "Review cancelled".to_string(),
            Message::LogsheetAccepted(id) => format!("Logsheet {} accepted", id),
            Message::LogsheetRejected(id) => format!("Logsheet {} rejected", id),
            Message::UpdateStatusFailed(error) => format!("Failed to update logsheet status: {}", error),

            // === USER MANAGEMENT MESSAGES ===
            Message::PromptUserEmail => "User email (Gmail)".to_string(),
            Message::PromptGrantAdmin => "Grant administrator rights?".to_string(),
            Message::PromptAddAnotherUser => "Add another user?".to_string(),
            Message::UsersCreated(count) => format!(
                "{} user(s) created successfully! Login credentials have been sent to their email addresses.",
                count
            ),
            Message::CreateUsersFailed(error) => format!("Failed to create users: {}", error),

            // === PASSWORD MESSAGES ===
            Message::PromptCurrentPassword => "Current password".to_string(),
            Message::PromptNewPassword => "New password".to_string(),
            Message::PromptConfirmPassword => "Confirm new password".to_string(),
            Message::PasswordChanged => "Password changed successfully!".to_string(),
            Message::ChangePasswordFailed(error) => format!("Failed to change password: {}", error),

            // === GENERIC MESSAGES ===
            Message::NetworkError(error) => format!("Network error. Please try again. ({})", error),
            Message::Validation(error) => capitalize(error),
        };

        write!(f, "{}", text)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
