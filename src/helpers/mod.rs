//! Helper functions shared by the commands

mod date;
mod summary;

pub use date::*;
pub use summary::*;
