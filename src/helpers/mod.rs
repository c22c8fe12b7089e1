//! Helper functions shared by the loader and the commands

mod date;
mod text;

pub use date::*;
pub use text::*;
