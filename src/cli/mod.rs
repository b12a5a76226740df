//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bunch: Arguments shared by commands taking a single bunch name
//! - packages: Add/remove command arguments
//! - delete: Delete command arguments
//! - transfer: Import/export command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{BUNCH_DIR_ENV, DEFAULT_PACKAGE_MANAGER, PACKAGE_MANAGER_ENV};

pub mod bunch;
pub mod completions;
pub mod delete;
pub mod packages;
pub mod transfer;

pub use bunch::{BunchArgs, CreateArgs};
pub use completions::CompletionsArgs;
pub use delete::DeleteArgs;
pub use packages::PackagesArgs;
pub use transfer::{ExportArgs, ImportArgs};

/// packbunch - install packages in bunches
#[derive(Parser, Debug)]
#[command(
    name = "packbunch",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage bunches of packages and install them in one go",
    long_about = "packbunch keeps named lists of packages (bunches) in ~/.packbunch/bunches \
                  and installs or uninstalls a whole bunch through the system package manager. \
                  If any package of a bunch fails to install, the whole bunch is uninstalled again.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  packbunch create dev                   \x1b[90m# Create an empty bunch\x1b[0m\n   \
                  packbunch add dev git curl vim         \x1b[90m# Add packages to it\x1b[0m\n   \
                  sudo packbunch install dev             \x1b[90m# Install every package in it\x1b[0m\n   \
                  packbunch export dev ~/backup/         \x1b[90m# Copy it somewhere else\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Bunch directory (defaults to ~/.packbunch/bunches of the invoking user)
    #[arg(long, global = true, env = BUNCH_DIR_ENV)]
    pub bunch_dir: Option<PathBuf>,

    /// Package manager program called as `<program> install|remove <package>`
    #[arg(long, global = true, env = PACKAGE_MANAGER_ENV, default_value = DEFAULT_PACKAGE_MANAGER)]
    pub package_manager: String,

    /// Enable verbose output (-vv for trace output)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all bunches
    List,

    /// List all packages in a bunch
    View(BunchArgs),

    /// Create an empty bunch
    Create(CreateArgs),

    /// Delete a bunch (requires sudo)
    Delete(DeleteArgs),

    /// Add one or more packages to a bunch
    Add(PackagesArgs),

    /// Remove one or more packages from a bunch
    Remove(PackagesArgs),

    /// Install all packages in a bunch (requires sudo)
    Install(BunchArgs),

    /// Uninstall all packages in a bunch (requires sudo)
    Uninstall(BunchArgs),

    /// Copy a bunch file into the bunch directory
    Import(ImportArgs),

    /// Copy a bunch to a directory
    Export(ExportArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
