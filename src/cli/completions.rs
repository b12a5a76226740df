use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    packbunch completions bash > ~/.bash_completion.d/packbunch\n\n\
                  Generate zsh completions:\n    packbunch completions zsh > ~/.zfunc/_packbunch\n\n\
                  Generate fish completions:\n    packbunch completions fish > ~/.config/fish/completions/packbunch.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
