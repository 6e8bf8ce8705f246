use anyhow::Result;
use clap::Parser;

use crate::Commands;

#[derive(Parser)]
#[command(name = "rline")]
#[command(about = "Command-line client for the rline microblog", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::cli_exec::handle_command(cli.command)
}
