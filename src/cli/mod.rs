//! Command-line interface

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
