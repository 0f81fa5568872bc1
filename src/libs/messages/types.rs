/// Every user-facing text of the application.
///
/// Variants carry the values interpolated into their text; the wording lives
/// in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigModuleOperator,
    ApiNotConfigured,
    PromptSelectModules,
    PromptApiUrl,
    PromptApiEmail,
    PromptDefaultOperatorName,
    PromptDefaultUserName,
    PromptDefaultUserSignature,

    // === SESSION MESSAGES ===
    PromptPassword,
    WrongPassword(i32),
    LoggedIn { email: String, role: String },
    LoggedOut,
    SessionExpired,
    LoginFailed(String),

    // === PROFILE MESSAGES ===
    ProfileHeader,

    // === SUBMISSION MESSAGES ===
    PromptAssetCode,
    PromptAssetDescription,
    PromptOperatorName,
    PromptDate,
    PromptCommencedTime,
    PromptCommencedReading,
    PromptCompletedTime,
    PromptCompletedReading,
    PromptWorkStatus,
    PromptActivityCode,
    PromptQuantityProduced,
    PromptWorkDone,
    PromptFuelInLiters,
    PromptUserName,
    PromptUserSignature,
    InvalidTime(String),
    InvalidNumber(String),
    SubmissionPreview,
    ConfirmSubmission,
    SubmissionCancelled,
    LogsheetSubmitted,
    SubmissionFailed(String),

    // === DASHBOARD MESSAGES ===
    LogsheetsHeader(String),
    NoLogsheets,
    FetchLogsheetsFailed(String),
    LogsheetNotFound(String),
    LogsheetDetailsHeader(String),

    // === EXPORT MESSAGES ===
    ExportingLogsheets(String),
    ExportCompleted(String),
    ExportFailed(String),

    // === REVIEW MESSAGES ===
    PendingHeader(usize),
    NoPendingLogsheets,
    FetchPendingFailed(String),
    PromptRejectionReason,
    ConfirmAccept(String),
    ReviewCancelled,
    LogsheetAccepted(String),
    LogsheetRejected(String),
    UpdateStatusFailed(String),

    // === USER MANAGEMENT MESSAGES ===
    PromptUserEmail,
    PromptGrantAdmin,
    PromptAddAnotherUser,
    UsersCreated(usize),
    CreateUsersFailed(String),

    // === PASSWORD MESSAGES ===
    PromptCurrentPassword,
    PromptNewPassword,
    PromptConfirmPassword,
    PasswordChanged,
    ChangePasswordFailed(String),

    // === GENERIC MESSAGES ===
    NetworkError(String),
    Validation(String),
}
