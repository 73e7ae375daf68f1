//! letalone CLI library
//!
//! This library provides the command-line interface that writes the
//! evaluation artifacts of the cross-corpus *let alone* study.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
