//! Display implementation for clockfill application messages.
//!
//! All user-facing text lives here, in one match over the `Message` enum.
//! Call sites never format strings themselves; they pick a variant and let
//! the messaging macros decide where the text goes.
//!
//! ## Usage Integration
//!
//! ```rust,ignore
//! use clockfill::{msg_error, msg_success};
//! use clockfill::libs::messages::Message;
//!
//! msg_success!(Message::EntryAdded("2024-03-01".to_string()));
//! msg_error!(Message::NoWorkspacesFound);
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into human-readable text.
    ///
    /// Parameters carried by a variant are interpolated in place, so the
    /// same variant always renders the same sentence shape.
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleClockify => "Clockify settings".to_string(),
            Message::ConfigModuleWorkday => "Workday settings".to_string(),
            Message::ApiKeyMissing(var) => format!("{} not found in environment variables", var),
            Message::InvalidTimeFormat(value) => format!("Invalid time '{}', expected HH:MM", value),
            Message::InvalidWorkHours(start, end) => {
                format!("Workday start ({}) must be earlier than workday end ({})", start, end)
            }
            Message::LocalTimeUnavailable(local) => format!("{} does not exist in the local time zone", local),

            // === ACCOUNT MESSAGES ===
            Message::NoWorkspacesFound => "No workspaces found".to_string(),
            Message::WorkspaceResolveFailed(error) => format!("Error resolving workspace: {}", error),
            Message::UserResolveFailed(error) => format!("Error resolving current user: {}", error),
            Message::UsingWorkspace(id) => format!("Using workspace {}", id),

            // === PROJECT AND TASK MESSAGES ===
            Message::ProjectsFetchFailed(error) => format!("Error getting projects: {}", error),
            Message::TasksFetchFailed(error) => format!("Error getting tasks: {}", error),
            Message::NoProjectsFound => "No projects found in this workspace".to_string(),
            Message::ProjectSelected(name) => format!("Project: {}", name),
            Message::TaskSelected(name) => format!("Task: {}", name),
            Message::NoTasksForProject => "No tasks found for this project, proceeding without task selection".to_string(),
            Message::ProceedWithoutTask => "Proceed without a task".to_string(),
            Message::InvalidSelection(choice) => format!("Selection {} is out of range", choice),

            // === DESCRIPTION MESSAGES ===
            Message::DescriptionModeDefault(text) => format!("Use default description ('{}') for all entries", text),
            Message::DescriptionModeGlobal => "Set one custom description for all entries".to_string(),
            Message::DescriptionModePerDay => "Enter custom description for each day".to_string(),

            // === FILL MESSAGES ===
            Message::FillHeader(month) => format!("Filling working days of {}", month),
            Message::NoWorkingDays => "No working days to fill yet this month".to_string(),
            Message::EntryExists(date) => format!("Skipping {} - Time entry already exists", date),
            Message::EntryAdded(date) => format!("Added time entry for {}", date),
            Message::EntryCheckFailed(date, error) => format!("Error checking time entry for {}: {}", date, error),
            Message::EntryCreateFailed(date, error) => format!("Failed to add time entry for {}: {}", date, error),
            Message::FillSummary { added, skipped } => {
                format!("Summary: Added {} entries, Skipped {} existing entries", added, skipped)
            }
            Message::FillFailures(count) => format!("{} day(s) could not be processed, see the errors above", count),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the Clockify API URL".to_string(),
            Message::PromptWorkdayStart => "Enter workday start (HH:MM)".to_string(),
            Message::PromptWorkdayEnd => "Enter workday end (HH:MM)".to_string(),
            Message::PromptDefaultDescription => "Enter the default entry description".to_string(),
            Message::PromptSelectProject => "Select project".to_string(),
            Message::PromptSelectTask => "Select task".to_string(),
            Message::PromptDescriptionMode => "How would you like to handle task descriptions?".to_string(),
            Message::PromptGlobalDescription => "Enter the description to use for all entries".to_string(),
            Message::PromptDayDescription(date) => format!("Enter description for {}", date),
            Message::PromptBillable => "Make entries billable?".to_string(),
        };

        write!(f, "{}", text)
    }
}
