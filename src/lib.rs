//! Mnemonic-letter menus for the terminal.
//!
//! An option string like `"Apple/baNana/Carrot"` becomes a one-line
//! prompt whose uppercase letters are the keys the user types; a
//! [`Menu`] asks once, a [`CommandLoop`] keeps asking and dispatches
//! each selection to a handler until `x` (`"eXit"`) is chosen.

pub mod error;
pub mod item;
pub mod menu;
pub mod style;
mod util;

pub use error::{Error, Result};
pub use menu::{CommandLoop, Menu, OutputMode};
