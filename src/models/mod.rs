//! Defines the data structures used by the example application.

mod user;

pub use user::*;
