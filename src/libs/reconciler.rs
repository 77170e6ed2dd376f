//! Month-to-date fill workflow.
//!
//! The run has two phases:
//!
//! 1. **Preferences**: project, optional task, description mode and billable
//!    flag are asked once and stay fixed for the whole run.
//! 2. **Fill**: for each working day, check the day's window for an existing
//!    entry on the project; skip the day if there is one, otherwise create it.
//!
//! A failed check or creation is reported and the day is left alone; the
//! loop always moves on to the next day. Nothing is retried.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut reconciler = Reconciler::new(&client, &mut prompt, &account, hours, "Standard workday");
//! let preferences = reconciler.preferences().await?;
//! let summary = reconciler.fill(&preferences, &days).await?;
//! ```

use crate::api::{Account, NewTimeEntry, Project, Task, TimeTracker};
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::workdays::WorkHours;
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use std::fmt;

/// Description of entries created in the default description mode.
pub const DEFAULT_DESCRIPTION: &str = "Standard workday";

/// Description mode as picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionKind {
    /// The configured default text for every entry
    Default,
    /// One custom text, asked once, for every entry
    Global,
    /// A separate text asked for every created day
    PerDay,
}

/// Resolved description source for the fill loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionMode {
    Fixed(String),
    PerDay,
}

/// Choices fixed before the fill loop starts.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPreferences {
    pub project: Project,
    pub task: Option<Task>,
    pub description: DescriptionMode,
    pub billable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    Added,
    Skipped,
    Failed(String),
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Added => write!(f, "added"),
            DayStatus::Skipped => write!(f, "skipped (already tracked)"),
            DayStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Counters and per-day outcomes of a fill run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillSummary {
    pub added: usize,
    pub skipped: usize,
    pub failed: usize,
    pub days: Vec<DayOutcome>,
}

impl FillSummary {
    fn record(&mut self, date: NaiveDate, status: DayStatus) {
        match status {
            DayStatus::Added => self.added += 1,
            DayStatus::Skipped => self.skipped += 1,
            DayStatus::Failed(_) => self.failed += 1,
        }
        self.days.push(DayOutcome { date, status });
    }
}

pub struct Reconciler<'a, T: TimeTracker, P: Prompt> {
    tracker: &'a T,
    prompt: &'a mut P,
    account: &'a Account,
    hours: WorkHours,
    default_description: String,
}

impl<'a, T: TimeTracker, P: Prompt> Reconciler<'a, T, P> {
    pub fn new(tracker: &'a T, prompt: &'a mut P, account: &'a Account, hours: WorkHours, default_description: &str) -> Self {
        Self {
            tracker,
            prompt,
            account,
            hours,
            default_description: default_description.to_owned(),
        }
    }

    /// Asks for project, task, description mode and billable flag, in that order.
    ///
    /// # Errors
    ///
    /// Listing failures abort the run, as does a workspace without projects.
    pub async fn preferences(&mut self) -> Result<FillPreferences> {
        let workspace_id = &self.account.workspace.id;

        let projects = self
            .tracker
            .list_projects(workspace_id)
            .await
            .map_err(|e| msg_error_anyhow!(Message::ProjectsFetchFailed(e.to_string())))?;
        if projects.is_empty() {
            msg_bail_anyhow!(Message::NoProjectsFound);
        }

        let index = self.prompt.select_project(&projects)?;
        let project = projects.get(index).cloned().ok_or_else(|| msg_error_anyhow!(Message::InvalidSelection(index + 1)))?;
        msg_info!(Message::ProjectSelected(project.name.clone()));

        let tasks = self
            .tracker
            .list_tasks(workspace_id, &project.id)
            .await
            .map_err(|e| msg_error_anyhow!(Message::TasksFetchFailed(e.to_string())))?;

        let task = if tasks.is_empty() {
            msg_info!(Message::NoTasksForProject);
            None
        } else {
            match self.prompt.select_task(&tasks)? {
                Some(index) => {
                    let task = tasks.get(index).cloned().ok_or_else(|| msg_error_anyhow!(Message::InvalidSelection(index + 1)))?;
                    msg_info!(Message::TaskSelected(task.name.clone()));
                    Some(task)
                }
                None => None,
            }
        };

        let kind = self.prompt.description_kind(&self.default_description)?;
        let billable = self.prompt.billable()?;
        let description = match kind {
            DescriptionKind::Default => DescriptionMode::Fixed(self.default_description.clone()),
            DescriptionKind::Global => DescriptionMode::Fixed(self.prompt.global_description()?),
            DescriptionKind::PerDay => DescriptionMode::PerDay,
        };

        Ok(FillPreferences {
            project,
            task,
            description,
            billable,
        })
    }

    /// Creates one entry per working day in `days` that has none yet.
    ///
    /// Per-day failures are reported and counted; only a failing prompt
    /// aborts the loop.
    pub async fn fill(&mut self, preferences: &FillPreferences, days: &[NaiveDate]) -> Result<FillSummary> {
        let mut summary = FillSummary::default();
        let workspace_id = &self.account.workspace.id;
        let project_id = &preferences.project.id;

        for &day in days {
            let label = day.format("%Y-%m-%d").to_string();

            let window = match self.hours.window(day) {
                Ok(window) => window,
                Err(e) => {
                    msg_error!(Message::EntryCheckFailed(label, e.to_string()));
                    summary.record(day, DayStatus::Failed(e.to_string()));
                    continue;
                }
            };

            match self
                .tracker
                .has_entry_in_window(workspace_id, &self.account.user_id, project_id, &window)
                .await
            {
                Ok(true) => {
                    msg_info!(Message::EntryExists(label));
                    summary.record(day, DayStatus::Skipped);
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    msg_error!(Message::EntryCheckFailed(label, e.to_string()));
                    summary.record(day, DayStatus::Failed(e.to_string()));
                    continue;
                }
            }

            let description = match &preferences.description {
                DescriptionMode::Fixed(text) => text.clone(),
                DescriptionMode::PerDay => self.prompt.day_description(day, &self.default_description)?,
            };

            let entry = NewTimeEntry::new(
                &window,
                &description,
                project_id,
                preferences.task.as_ref().map(|task| task.id.as_str()),
                preferences.billable,
            );

            match self.tracker.create_entry(workspace_id, &entry).await {
                Ok(()) => {
                    msg_success!(Message::EntryAdded(label));
                    summary.record(day, DayStatus::Added);
                }
                Err(e) => {
                    msg_error!(Message::EntryCreateFailed(label, e.to_string()));
                    summary.record(day, DayStatus::Failed(e.to_string()));
                }
            }
        }

        Ok(summary)
    }
}
