//! Convenient macros for application messaging and logging.
//!
//! Every piece of console output in clockfill goes through these macros. They
//! decide at runtime whether a message is plain console text or a `tracing`
//! event, so the same call site serves both an interactive run and a debug
//! session.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either environment variable is present:
//! - **`CLOCKFILL_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! The result is cached on first use.
//!
//! ## Output Routing
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Macro Call    │───▶│ CLOCKFILL_DEBUG  │───▶│ tracing::info!  │
//! │   msg_info!()   │    │ or RUST_LOG set? │    │ OR println!     │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**, **`msg_success!`**, **`msg_info!`**, **`msg_warning!`**: display
//! - **`msg_error!`**: errors, written to stderr
//! - **`msg_error_anyhow!`**, **`msg_bail_anyhow!`**: build or return `anyhow::Error`
//! - **`msg_debug!`**: debug-only output
//!
//! ## Usage Examples
//!
//! ```rust,ignore
//! use clockfill::{msg_info, msg_success, msg_error};
//! use clockfill::libs::messages::Message;
//!
//! msg_success!(Message::EntryAdded("2024-03-04".to_string()));
//! msg_info!(Message::NoTasksForProject, true);
//! msg_error!(Message::NoWorkspacesFound);
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching.
///
/// Debug mode is on when `CLOCKFILL_DEBUG` or `RUST_LOG` is set. The first call
/// reads the environment; later calls return the cached value.
///
/// # Examples
///
/// ```rust,ignore
/// use clockfill::libs::messages::macros::is_debug_mode;
///
/// if is_debug_mode() {
///     println!("Running in debug mode with enhanced logging");
/// }
/// ```
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("CLOCKFILL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
///
/// - **Debug Mode**: Uses `tracing::info!`
/// - **Normal Mode**: Uses `println!`
///
/// ```rust,ignore
/// msg_print!(Message::FillHeader("March 2024".to_string()));
/// msg_print!(Message::FillHeader("March 2024".to_string()), true); // surrounded by blank lines
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// Normal mode writes to stderr so errors stay visible when stdout is
/// redirected.
///
/// ```rust,ignore
/// msg_error!(Message::NoWorkspacesFound);
/// // Output to stderr: "❌ No workspaces found"
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Prints a debug message, only in debug mode.
///
/// ```rust,ignore
/// msg_debug!(format!("Checking window {} - {}", start, end));
/// // Debug mode output: "🔍 Checking window ..."
/// // Normal mode output: (nothing)
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// ```rust,ignore
/// use anyhow::Result;
/// use clockfill::{msg_error_anyhow, libs::messages::Message};
///
/// fn first_workspace(ids: &[String]) -> Result<String> {
///     ids.first().cloned().ok_or_else(|| msg_error_anyhow!(Message::NoWorkspacesFound))
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))`.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
