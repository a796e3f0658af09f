use clap::Parser;
use miette::Result;
use xp::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => xp::cli::info::run(args)?,
        Commands::Cat(args) => xp::cli::cat::run(args)?,
        Commands::Export(args) => xp::cli::export::run(args)?,
        Commands::Completions(args) => xp::cli::completions::run(args)?,
    }

    Ok(())
}
