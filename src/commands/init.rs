//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for the Clockify API URL and the
//! workday window, then writes `config.json`. The API key is not part of it;
//! it stays in the environment or `.env`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
