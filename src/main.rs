//! packbunch - install packages in bunches
//!
//! Keeps named lists of package names ("bunches") as plain text files and
//! installs or uninstalls a whole bunch through the system package manager.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod installer;
mod logging;
mod package_manager;
mod store;
mod validate;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Version => {
            commands::version::run(cli.bunch_dir.as_deref(), &cli.package_manager)
        }
        Commands::Completions(args) => commands::completions::run(args),
        Commands::List => commands::bunch::list(&load_config(cli)?),
        Commands::View(args) => commands::bunch::view(&load_config(cli)?, args),
        Commands::Create(args) => commands::bunch::create(&load_config(cli)?, args),
        Commands::Delete(args) => commands::delete::run(&load_config(cli)?, args),
        Commands::Add(args) => commands::packages::add(&load_config(cli)?, args),
        Commands::Remove(args) => commands::packages::remove(&load_config(cli)?, args),
        Commands::Install(args) => commands::install::install(&load_config(cli)?, args),
        Commands::Uninstall(args) => commands::install::uninstall(&load_config(cli)?, args),
        Commands::Import(args) => commands::transfer::import(&load_config(cli)?, args),
        Commands::Export(args) => commands::transfer::export(&load_config(cli)?, args),
    }
}

/// Resolve the configuration for commands that work on bunches
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::resolve(cli.bunch_dir.clone(), cli.package_manager.clone())?;
    config.ensure_bunch_dir()?;
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: Failed to start logger: {e}");
            None
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
