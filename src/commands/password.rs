use super::{api_failure, connect, Role};
use crate::{
    api::Session,
    libs::{logsheet::PasswordChange, messages::Message},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};

fn ask(message: Message) -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .interact()?)
}

pub async fn cmd() -> Result<()> {
    let (mut api, session) = connect(Role::Any).await?;

    let current = ask(Message::PromptCurrentPassword)?;
    let new_password = ask(Message::PromptNewPassword)?;
    let confirmation = ask(Message::PromptConfirmPassword)?;
    let change = PasswordChange::new(&current, &new_password, &confirmation).map_err(|e| msg_error_anyhow!(Message::from(e)))?;

    api.change_password(&session, &change)
        .await
        .map_err(|e| api_failure(e, Message::ChangePasswordFailed))?;

    // Keep the cached password in step with the account.
    api.secret().store(&change.new_password)?;
    msg_success!(Message::PasswordChanged);
    Ok(())
}
