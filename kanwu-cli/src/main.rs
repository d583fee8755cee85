//! Kanwu command-line entry point

use clap::{Parser, Subcommand};
use kanwu_cli::commands::CompareArgs;

/// Errata extraction for proofread documents
#[derive(Debug, Parser)]
#[command(name = "kanwu", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Align an original and a revised document and report the differences
    Compare(CompareArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Compare(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
