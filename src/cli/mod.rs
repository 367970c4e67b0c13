//! Command-line interface for userql.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
