//! MateApps - Terminal Navigation Shell
//!
//! A small shell that switches between the MateApps mini-applications
//! (expressions, thermometer, GCD/LCM, sudoku) and shows the selected one in
//! a content viewer.
//!
//! ## Layout
//!
//! - Wide terminals (more than 850 logical pixels, i.e. 107+ columns) keep
//!   the sidebar on screen.
//! - Narrow terminals hide it behind a menu button; picking an app closes it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive mode
//! mateapps
//!
//! # Start on the sudoku, without sounds
//! mateapps run --app sudoku --mute
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod tui;

// Re-export commonly used types
pub use error::{ErrorCode, ShellError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
