//! Core library modules for the clockfill application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, logging
//! - **Calendar**: Working-day generation and per-day entry windows
//! - **Fill Workflow**: Preference collection and the per-day reconcile loop
//! - **User Interface**: Interactive prompts and the result table
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use clockfill::libs::workdays::working_days;
//!
//! let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! assert_eq!(working_days(first, today).len(), 11);
//! ```

pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod reconciler;
pub mod view;
pub mod workdays;
