//! The `completions` command: shell completion script generation.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Generates completion scripts for the requested shell.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.args.shell,
            &mut cmd,
            "etchkit",
            &mut std::io::stdout(),
        );
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn generate(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        clap_complete::generate(shell, &mut cmd, "etchkit", &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bash_completions_mention_binary() {
        let script = generate(Shell::Bash);
        assert!(script.contains("etchkit"));
        assert!(script.contains("validate"));
    }

    #[test]
    fn zsh_completions_mention_binary() {
        let script = generate(Shell::Zsh);
        assert!(script.contains("etchkit"));
    }

    #[test]
    fn fish_completions_mention_subcommands() {
        let script = generate(Shell::Fish);
        assert!(script.contains("patterns"));
        assert!(script.contains("encode"));
    }
}
