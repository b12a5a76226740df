use clap::Parser;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Import a bunch file (the bunch is named after the file):\n    packbunch import ~/backup/dev")]
pub struct ImportArgs {
    /// Path to a bunch file
    pub path: PathBuf,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Export a bunch into a directory:\n    packbunch export dev ~/backup/\n\n\
                  The bunch name is appended to the path as is, so end it with '/'")]
pub struct ExportArgs {
    /// Bunch name
    pub bunch: String,

    /// Target directory
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use super::*;

    #[test]
    fn test_cli_parsing_import() {
        let cli = Cli::try_parse_from(["packbunch", "import", "/some/dir/mybunch"]).unwrap();
        match cli.command {
            Commands::Import(args) => assert_eq!(args.path, PathBuf::from("/some/dir/mybunch")),
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_cli_parsing_export() {
        let cli = Cli::try_parse_from(["packbunch", "export", "dev", "/tmp/out/"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.bunch, "dev");
                assert_eq!(args.path, "/tmp/out/");
            }
            _ => panic!("Expected Export command"),
        }
    }
}
