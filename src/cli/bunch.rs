use clap::Parser;

/// Arguments for commands operating on one existing bunch
#[derive(Parser, Debug)]
pub struct BunchArgs {
    /// Bunch name
    pub bunch: String,
}

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a bunch:\n    packbunch create dev-tools\n\n\
                  Bunch names can contain letters, digits, '_', '-' and '.'")]
pub struct CreateArgs {
    /// Name of the new bunch
    pub name: String,
}
