//! Tracing subscriber setup.
//!
//! Installed only in debug mode (`CLOCKFILL_DEBUG` or `RUST_LOG` set), where
//! the messaging macros emit `tracing` events instead of printing. Output goes
//! to stderr so it never mixes with prompts on stdout.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "clockfill=debug";

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
