use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use vendorfs_constants::{
    BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, MANIFEST_ENV, REPOSITORY_URL, SOURCES_ENV, VERSION,
};

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<()> {
        match command {
            Some(cmd) => Self::show_command_help(cmd),
            None => {
                Self::show_custom_help();
                Ok(())
            }
        }
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cmd = Cli::command();

        if let Some(subcommand) = cmd.find_subcommand_mut(command) {
            subcommand.print_help()?;
        } else {
            println!(
                "{}: Unknown command '{}'",
                "Error".bright_red().bold(),
                command
            );
            println!();
            Self::show_custom_help();
        }

        println!();
        Ok(())
    }

    fn show_custom_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "[COMMAND]".bright_white(),
            "<OPTIONS>".bright_black().bold()
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let rows = COMMANDS
            .iter()
            .map(|(cmd, desc, aliases)| {
                let label = if aliases.is_empty() {
                    (*cmd).to_string()
                } else {
                    format!("{cmd} [{}]", aliases.join(", "))
                };
                (label, *desc)
            })
            .collect::<Vec<_>>();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, desc) in &rows {
            println!("  {:<width$}  {}", label.bright_cyan(), desc.bright_white());
        }
        println!();

        println!("{}", "Environment:".bright_magenta().bold());
        println!(
            "  {:<12}  {}",
            MANIFEST_ENV.bright_cyan(),
            "Package manifest used when --manifest is not given".bright_white()
        );
        println!(
            "  {:<12}  {}",
            SOURCES_ENV.bright_cyan(),
            "Source map used when --sources is not given".bright_white()
        );
        println!();

        println!("{}", "Examples:".bright_magenta().bold());
        for (example, desc) in EXAMPLES {
            println!("  {}", example.bright_white());
            println!("      {}", desc.bright_black());
        }
        println!();

        println!(
            "{} {}",
            "Learn more:".bright_white().bold(),
            REPOSITORY_URL.bright_blue().underline()
        );
    }
}
