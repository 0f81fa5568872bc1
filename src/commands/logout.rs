use crate::{
    api::LogsheetApi,
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

/// Works without a configured API: only local files are touched.
pub fn cmd() -> Result<()> {
    let api_config = Config::read()?.api.unwrap_or_default();
    LogsheetApi::new(&api_config).logout()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
