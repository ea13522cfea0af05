// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console logging helpers.
//!
//! Library output is silent unless [`set_verbose`] turns it on.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        {
            use colored::Colorize;
            eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
        }
    }
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            use colored::Colorize;
            println!("{} {}", "pose-draw:".dimmed(), format!($($arg)*));
        }
    }
}
