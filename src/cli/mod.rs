//! Handles the example application's command-line surface.
//!
//! Includes argument parsing and the handler that turns main-menu selections into
//! user-directory workflows.

mod commands;

pub use commands::*;
