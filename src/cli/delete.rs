use clap::Parser;

/// Arguments for the delete command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete a bunch, asking whether to uninstall its packages:\n    sudo packbunch delete dev\n\n\
                  Uninstall the packages and delete without asking:\n    sudo packbunch delete dev -y\n\n\
                  Delete the bunch but keep its packages installed:\n    sudo packbunch delete dev --keep-packages")]
pub struct DeleteArgs {
    /// Bunch name
    pub bunch: String,

    /// Uninstall the bunch's packages without asking
    #[arg(long, short = 'y', conflicts_with = "keep_packages")]
    pub yes: bool,

    /// Keep the bunch's packages installed
    #[arg(long)]
    pub keep_packages: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_delete() {
        let cli = Cli::try_parse_from(["packbunch", "delete", "dev"]).unwrap();
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.bunch, "dev");
                assert!(!args.yes);
                assert!(!args.keep_packages);
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parsing_delete_flags_conflict() {
        assert!(Cli::try_parse_from(["packbunch", "delete", "dev", "-y", "--keep-packages"]).is_err());
    }
}
