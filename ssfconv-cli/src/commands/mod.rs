//! CLI command implementations

use clap::Parser;

pub mod convert;

pub use convert::ConvertArgs;

/// Convert POS-tagged sentences into Shakti Standard Format (SSF)
#[derive(Debug, Parser)]
#[command(name = "ssfconv", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,
}
