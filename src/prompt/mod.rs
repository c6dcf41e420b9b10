//! Interactive prompts: lettered option menus, confirmations and free-text questions.
//!
//! Options are labelled with letter codes (see [`codec`]); every read goes through a
//! [`TextInput`] owned by a [`Prompter`], which also owns the [`Console`] the prompts
//! print to.

pub mod codec;
mod console;
mod input;
mod menu;
mod options;
mod outcome;
mod scripted;

pub use console::*;
pub use input::*;
pub use menu::*;
pub use options::*;
pub use outcome::*;
pub use scripted::*;
