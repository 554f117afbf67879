//! ssfconv CLI library
//!
//! This library provides the command-line interface for converting
//! POS-tagged sentences into Shakti Standard Format.

pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

pub use error::{CliError, CliResult};
