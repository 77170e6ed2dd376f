//! # Clockfill - month-to-date Clockify entries
//!
//! A command-line utility that fills every working day of the current month
//! with a Clockify time entry, leaving days that are already tracked alone.
//!
//! ## Features
//!
//! - **Working-Day Calendar**: Monday to Friday from the first of the month to today
//! - **Duplicate Avoidance**: Each day's window is checked before anything is created
//! - **Interactive Setup**: Project, optional task, description mode and billable flag
//! - **Configuration**: API key from the environment or `.env`, optional JSON settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockfill::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
