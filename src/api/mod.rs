//! API client modules for the remote time-tracking service.
//!
//! The rest of the crate talks to the service only through the
//! [`TimeTracker`] trait. [`clockify::Clockify`] is the HTTP implementation;
//! tests substitute an in-memory one.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clockfill::api::{Account, ClockifyConfig, clockify::Clockify};
//!
//! let client = Clockify::new(&ClockifyConfig::default(), &api_key)?;
//! let account = Account::resolve(&client).await?;
//! let projects = client.list_projects(&account.workspace.id).await?;
//! ```

use crate::libs::messages::Message;
use crate::libs::workdays::WorkWindow;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;

pub mod clockify;

pub use clockify::{ClockifyConfig, ClockifyError, NewTimeEntry, Project, Task, User, Workspace};

/// Operations the fill workflow needs from the time-tracking service.
///
/// Every call is awaited before the next one is issued; implementations do
/// not retry.
#[allow(async_fn_in_trait)]
pub trait TimeTracker {
    /// Returns the first workspace of the account.
    ///
    /// # Errors
    ///
    /// [`ClockifyError::NoWorkspaces`] when the account has none.
    async fn resolve_workspace(&self) -> Result<Workspace, ClockifyError>;

    /// Returns the user the API key belongs to.
    async fn resolve_current_user(&self) -> Result<User, ClockifyError>;

    async fn list_projects(&self, workspace_id: &str) -> Result<Vec<Project>, ClockifyError>;

    /// Lists the tasks of a project. An empty list is a valid answer.
    async fn list_tasks(&self, workspace_id: &str, project_id: &str) -> Result<Vec<Task>, ClockifyError>;

    /// Checks whether the user already tracked time on `project_id` inside `window`.
    ///
    /// An empty response body counts as "no entries". A body that is not a
    /// JSON array is a [`ClockifyError::Decode`] carrying the raw status and body.
    async fn has_entry_in_window(
        &self,
        workspace_id: &str,
        user_id: &str,
        project_id: &str,
        window: &WorkWindow,
    ) -> Result<bool, ClockifyError>;

    /// Creates a time entry. Only `201 Created` counts as success.
    async fn create_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<(), ClockifyError>;
}

/// Workspace and user every request of a run is scoped to.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub workspace: Workspace,
    pub user_id: String,
}

impl Account {
    /// Resolves the workspace and the current user, in that order.
    ///
    /// Both failures are fatal for a run, so they come back as user-facing errors.
    pub async fn resolve<T: TimeTracker>(tracker: &T) -> Result<Self> {
        let workspace = match tracker.resolve_workspace().await {
            Ok(workspace) => workspace,
            Err(ClockifyError::NoWorkspaces) => msg_bail_anyhow!(Message::NoWorkspacesFound),
            Err(e) => msg_bail_anyhow!(Message::WorkspaceResolveFailed(e.to_string())),
        };

        let user = tracker
            .resolve_current_user()
            .await
            .map_err(|e| msg_error_anyhow!(Message::UserResolveFailed(e.to_string())))?;

        Ok(Self {
            workspace,
            user_id: user.id,
        })
    }
}
