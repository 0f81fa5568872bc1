use crate::{
    api::{LogsheetApi, Session},
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Sign in with this account instead of the configured one
    #[arg(short, long)]
    email: Option<String>,
}

/// Signs in and caches the token. Switching accounts drops the previous
/// session first.
pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let mut config = Config::read()?;
    let mut api_config = config.api()?;

    if let Some(email) = login_args.email.map(|email| email.trim().to_string()).filter(|email| !email.is_empty()) {
        if email != api_config.email {
            LogsheetApi::new(&api_config).logout()?;
            api_config.email = email;
            if let Some(api) = config.api.as_mut() {
                api.email = api_config.email.clone();
                config.save()?;
            }
        }
    }

    let mut api = LogsheetApi::new(&api_config);
    let session = api.session_context().await?;
    msg_success!(Message::LoggedIn {
        email: session.email().to_string(),
        role: session.role().to_string(),
    });
    Ok(())
}
