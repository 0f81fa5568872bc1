//! Command-line interface of the logsheet client.
//!
//! Operators submit and track their logsheets (`submit`, `logs`, `export`),
//! administrators review them and manage accounts (`pending`, `review`,
//! `users`). `calc` works offline and needs no account.

pub mod calc;
pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod logs;
pub mod password;
pub mod pending;
pub mod profile;
pub mod review;
pub mod submit;
pub mod users;

use crate::api::client::ApiError;
use crate::api::{LogsheetApi, Session};
use crate::libs::{config::Config, messages::Message, session::SessionContext};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in to the logsheet API")]
    Login(login::LoginArgs),
    #[command(about = "Forget the cached session and password")]
    Logout,
    #[command(about = "Show the signed-in account")]
    Profile,
    #[command(about = "Change the account password")]
    Password,
    #[command(about = "Calculate logsheet totals without submitting")]
    Calc(calc::CalcArgs),
    #[command(about = "Fill in and submit a daily logsheet")]
    Submit(submit::SubmitArgs),
    #[command(about = "List submitted logsheets")]
    Logs(logs::LogsArgs),
    #[command(about = "Export submitted logsheets to a file")]
    Export(export::ExportArgs),
    #[command(about = "List logsheets waiting for review (admin)")]
    Pending(pending::PendingArgs),
    #[command(about = "Accept or reject a logsheet (admin)", arg_required_else_help = true)]
    Review(review::ReviewArgs),
    #[command(about = "Create user accounts (admin)")]
    Users(users::UsersArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Profile => profile::cmd().await,
            Commands::Password => password::cmd().await,
            Commands::Calc(args) => calc::cmd(args),
            Commands::Submit(args) => submit::cmd(args).await,
            Commands::Logs(args) => logs::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Pending(args) => pending::cmd(args).await,
            Commands::Review(args) => review::cmd(args).await,
            Commands::Users(args) => users::cmd(args).await,
        }
    }
}

/// Role a command is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Any,
    Operator,
    Admin,
}

/// Client for the configured API plus a session checked against `role`.
pub(crate) async fn connect(role: Role) -> Result<(LogsheetApi, SessionContext)> {
    let config = Config::read()?;
    let mut api = LogsheetApi::new(&config.api()?);
    let session = api.session_context().await?;

    let allowed = match role {
        Role::Any => Ok(()),
        Role::Operator => session.require_operator(),
        Role::Admin => session.require_admin(),
    };
    allowed.map_err(|e| msg_error_anyhow!(Message::from(e)))?;

    Ok((api, session))
}

/// Turns an API failure into the user-facing message of the failed action.
/// Transport failures get the generic network text instead.
pub(crate) fn api_failure(error: anyhow::Error, action: fn(String) -> Message) -> anyhow::Error {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::Network(e)) => msg_error_anyhow!(Message::NetworkError(e.clone())),
        Some(ApiError::Rejected { message, .. }) => msg_error_anyhow!(action(message.clone())),
        None => error,
    }
}
