//! Kibo console helpers
//!
//! Bounded input, text layout, menus and tables for small interactive
//! terminal programs.

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod menu;
pub mod table;

pub use error::{InputError, MenuError, TableError};
pub use input::Prompter;
pub use menu::Menu;
pub use table::{Alignment, Table};
