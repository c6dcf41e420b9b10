//! Provides the services the example application's handlers talk to.
//!
//! Includes:
//! - `directory`: an in-memory user directory.

mod directory;

pub use directory::*;
