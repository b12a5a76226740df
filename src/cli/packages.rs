use clap::Parser;

/// Arguments for the add and remove commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add packages to a bunch:\n    packbunch add dev git curl vim\n\n\
                  Remove a package from a bunch:\n    packbunch remove dev vim")]
pub struct PackagesArgs {
    /// Bunch name
    pub bunch: String,

    /// Package names
    #[arg(required = true)]
    pub packages: Vec<String>,
}
