//! tmix command-line entry point.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tmix::cli::{Cli, Commands, ConfigCommands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    tmix::logging::init(cli.verbose, matches!(cli.command, Commands::Ui));

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let theme = commands::cli_theme();
            eprintln!("{} {:#}", theme.error_text("error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(args),
        Commands::Ui => commands::ui::handle(),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
