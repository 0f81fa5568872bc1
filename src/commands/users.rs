//! Bulk account creation. The server generates the passwords and mails
//! them to the new users.

use super::{api_failure, connect, Role};
use crate::{
    libs::{
        logsheet::{validate_new_users, NewUser},
        messages::Message,
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct UsersArgs {
    /// Emails of the accounts to create; asked for one by one when omitted
    emails: Vec<String>,

    /// Grant administrator rights to every listed account
    #[arg(long)]
    admin: bool,
}

fn ask_users() -> Result<Vec<NewUser>> {
    let mut users = Vec::new();
    loop {
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUserEmail.to_string())
            .allow_empty(true)
            .interact_text()?;
        let is_admin = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptGrantAdmin.to_string())
            .default(false)
            .interact()?;
        users.push(NewUser { email, is_admin });

        let another = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAddAnotherUser.to_string())
            .default(false)
            .interact()?;
        if !another {
            return Ok(users);
        }
    }
}

pub async fn cmd(args: UsersArgs) -> Result<()> {
    let (mut api, session) = connect(Role::Admin).await?;

    let users = if args.emails.is_empty() {
        ask_users()?
    } else {
        args.emails
            .into_iter()
            .map(|email| NewUser { email, is_admin: args.admin })
            .collect()
    };
    let users = validate_new_users(&users).map_err(|e| msg_error_anyhow!(Message::from(e)))?;

    api.create_users(&session, &users)
        .await
        .map_err(|e| api_failure(e, Message::CreateUsersFailed))?;
    msg_success!(Message::UsersCreated(users.len()));
    Ok(())
}
