//! Month-to-date fill command.
//!
//! Resolves the account, asks for the run preferences, then walks every
//! working day from the first of the month to today, creating the entries
//! that are missing.
//!
//! ## Startup Failures
//!
//! A missing `CLOCKIFY_API_KEY`, an invalid configured workday window, an
//! account without workspaces, or a failing project/task listing abort the
//! command before any entry is created.

use crate::api::{clockify::Clockify, Account};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::prompt::ConsolePrompt;
use crate::libs::reconciler::Reconciler;
use crate::libs::view::View;
use crate::libs::workdays::{month_to_date, working_days};
use crate::{msg_debug, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let api_key = Config::api_key()?;
    let workday = config.workday();
    let hours = workday.hours()?;

    let client = Clockify::new(&config.clockify(), &api_key)?;
    let account = Account::resolve(&client).await?;
    msg_debug!(Message::UsingWorkspace(account.workspace.id.clone()));

    let mut prompt = ConsolePrompt::new();
    let mut reconciler = Reconciler::new(&client, &mut prompt, &account, hours, &workday.default_description);
    let preferences = reconciler.preferences().await?;

    let now = Local::now();
    let (first, last) = month_to_date(now.naive_local(), hours.start);
    let days = working_days(first, last);
    if days.is_empty() {
        msg_info!(Message::NoWorkingDays);
        return Ok(());
    }

    msg_print!(Message::FillHeader(now.format("%B %Y").to_string()), true);
    let summary = reconciler.fill(&preferences, &days).await?;

    msg_print!("");
    View::outcomes(&summary.days)?;
    msg_print!(
        Message::FillSummary {
            added: summary.added,
            skipped: summary.skipped,
        },
        true
    );
    if summary.failed > 0 {
        msg_warning!(Message::FillFailures(summary.failed));
    }

    Ok(())
}
