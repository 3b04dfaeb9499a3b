pub mod commands;
pub mod handlers;

use anyhow::Result;
use clap::Parser;

use commands::{Cli, Commands};
use handlers::{BuildHandler, HelpHandler, ListHandler};

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build(args)) => BuildHandler::handle_build(args),
        Some(Commands::List(args)) => ListHandler::handle_list_packages(args),
        Some(Commands::Help { command }) => HelpHandler::handle_help(command.as_deref()),
        None => BuildHandler::handle_build(cli.build),
    }
}
