//! ssfconv command-line entry point

use clap::Parser;
use ssfconv_cli::commands::Cli;
use ssfconv_cli::CliResult;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.convert.execute()
}
