//! Command implementations for packbunch CLI
//!
//! Each command is a thin wrapper: it resolves what it needs from [`Config`],
//! calls into the store or installer, and prints the outcome.
//!
//! [`Config`]: crate::config::Config

pub mod bunch;
pub mod completions;
pub mod delete;
pub mod install;
pub mod packages;
pub mod transfer;
pub mod version;

use console::Style;

/// Print a success line like `Created bunch "dev".`
fn print_done(verb: &str, rest: &str) {
    println!("{} {rest}", Style::new().green().bold().apply_to(verb));
}
