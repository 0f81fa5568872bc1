use super::{connect, Role};
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let (_, session) = connect(Role::Any).await?;
    msg_print!(Message::ProfileHeader, true);
    View::profile(&session)
}
