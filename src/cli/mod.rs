//! CLI layer - Command-line interface

pub mod args;
pub mod commands;

pub use args::normalize_args;
pub use commands::Cli;
