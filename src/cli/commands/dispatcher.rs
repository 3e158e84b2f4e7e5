//! Command dispatcher and shared command plumbing.

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::{
    CompletionsCommand, EncodeCommand, InitCommand, PatternsCommand, ValidateCommand,
};

/// Outcome of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub exit_code: i32,
}

impl CommandResult {
    /// A successful run.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// A failed run with the given exit code.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// A runnable CLI command.
pub trait Command {
    /// Run the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Routes parsed CLI arguments to the matching command.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher rooted at `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Run the command selected by `cli`.
    ///
    /// A bare file argument without a subcommand runs `validate`.
    pub fn dispatch(&self, cli: Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.command {
            Some(Commands::Validate(args)) => {
                ValidateCommand::new(&self.working_dir, args).execute(ui)
            }
            Some(Commands::Init(args)) => InitCommand::new(&self.working_dir, args).execute(ui),
            Some(Commands::Encode(args)) => EncodeCommand::new(args).execute(ui),
            Some(Commands::Patterns(args)) => PatternsCommand::new(args).execute(ui),
            Some(Commands::Completions(args)) => CompletionsCommand::new(args).execute(ui),
            None => {
                if cli.validate.file.is_none() {
                    ui.error("No file given. Usage: etchkit <file.json> or etchkit <command>");
                    ui.message("Run 'etchkit --help' for available commands.");
                    return Ok(CommandResult::failure(1));
                }
                ValidateCommand::new(&self.working_dir, cli.validate).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_constructors() {
        assert_eq!(CommandResult::success().exit_code, 0);
        assert!(CommandResult::success().success);
        assert_eq!(CommandResult::failure(2).exit_code, 2);
        assert!(!CommandResult::failure(2).success);
    }

    #[test]
    fn no_command_and_no_file_fails_with_usage() {
        let cli = Cli::try_parse_from(["etchkit"]).unwrap();
        let dispatcher = CommandDispatcher::new(std::env::temp_dir());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(cli, &mut ui).unwrap();
        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_message("No file given"));
    }
}
