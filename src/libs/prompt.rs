//! Interactive questions asked before and during a fill run.
//!
//! The fill workflow only depends on the [`Prompt`] trait, so tests can
//! answer with scripted values. [`ConsolePrompt`] is the terminal
//! implementation built on `dialoguer`.

use crate::api::{Project, Task};
use crate::libs::messages::Message;
use crate::libs::reconciler::DescriptionKind;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

pub trait Prompt {
    /// Index of the chosen project in `projects`.
    fn select_project(&mut self, projects: &[Project]) -> Result<usize>;

    /// Index of the chosen task in `tasks`, or `None` to proceed without one.
    /// Never called with an empty list.
    fn select_task(&mut self, tasks: &[Task]) -> Result<Option<usize>>;

    fn description_kind(&mut self, default_description: &str) -> Result<DescriptionKind>;

    fn billable(&mut self) -> Result<bool>;

    /// The one description used for every entry.
    fn global_description(&mut self) -> Result<String>;

    /// Description for a single day's entry.
    fn day_description(&mut self, date: NaiveDate, default_description: &str) -> Result<String>;
}

/// Terminal prompts with the colorful `dialoguer` theme.
#[derive(Default)]
pub struct ConsolePrompt {
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for ConsolePrompt {
    fn select_project(&mut self, projects: &[Project]) -> Result<usize> {
        let names: Vec<&str> = projects.iter().map(|project| project.name.as_str()).collect();
        Ok(Select::with_theme(&self.theme)
            .with_prompt(Message::PromptSelectProject.to_string())
            .items(&names)
            .default(0)
            .interact()?)
    }

    fn select_task(&mut self, tasks: &[Task]) -> Result<Option<usize>> {
        // First item skips task selection, so Enter on the default proceeds without a task
        let mut items = vec![Message::ProceedWithoutTask.to_string()];
        items.extend(tasks.iter().map(|task| task.name.clone()));

        let selection = Select::with_theme(&self.theme)
            .with_prompt(Message::PromptSelectTask.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        Ok(selection.checked_sub(1))
    }

    fn description_kind(&mut self, default_description: &str) -> Result<DescriptionKind> {
        let options = [
            Message::DescriptionModeDefault(default_description.to_string()).to_string(),
            Message::DescriptionModeGlobal.to_string(),
            Message::DescriptionModePerDay.to_string(),
        ];
        let selection = Select::with_theme(&self.theme)
            .with_prompt(Message::PromptDescriptionMode.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        Ok(match selection {
            0 => DescriptionKind::Default,
            1 => DescriptionKind::Global,
            _ => DescriptionKind::PerDay,
        })
    }

    fn billable(&mut self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(Message::PromptBillable.to_string())
            .default(false)
            .interact()?)
    }

    fn global_description(&mut self) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(Message::PromptGlobalDescription.to_string())
            .interact_text()?)
    }

    fn day_description(&mut self, date: NaiveDate, default_description: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(Message::PromptDayDescription(date.format("%Y-%m-%d").to_string()).to_string())
            .default(default_description.to_string())
            .interact_text()?)
    }
}
