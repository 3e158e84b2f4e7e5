//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// etchkit - Validation and authoring toolkit for Etch components.
#[derive(Debug, Parser)]
#[command(name = "etchkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Validate a document without the explicit `validate` subcommand
    #[command(flatten)]
    pub validate: ValidateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a component document (default if no command specified)
    Validate(ValidateArgs),

    /// Initialize an Etch project record for this directory
    Init(InitArgs),

    /// Encode a script payload for embedding in a component
    Encode(EncodeArgs),

    /// Collect pattern templates from the pattern library
    Patterns(PatternsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Component document to validate
    pub file: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Class prefix to check against (overrides .etch-project.json)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing project record without asking
    #[arg(long)]
    pub force: bool,

    /// Project name (skips the prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Class prefix, 2-4 lowercase letters (skips the prompt)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Development site URL (skips the prompt)
    #[arg(long)]
    pub dev_url: Option<String>,
}

/// Arguments for the `encode` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EncodeArgs {
    /// Read script text from a file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Script id to emit (default: freshly generated)
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the `patterns` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PatternsArgs {
    /// Collect one category instead of all known patterns
    #[arg(long)]
    pub category: Option<String>,

    /// Output directory for collected patterns
    #[arg(long, short, default_value = "patterns")]
    pub output: PathBuf,

    /// Pattern library base URL
    #[arg(long, default_value = crate::fetch::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bypass the on-disk response cache
    #[arg(long)]
    pub fresh: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_without_panic() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_file_path_becomes_validate() {
        let cli = Cli::try_parse_from(["etchkit", "hero.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.validate.file, Some(PathBuf::from("hero.json")));
    }

    #[test]
    fn explicit_validate_subcommand() {
        let cli =
            Cli::try_parse_from(["etchkit", "validate", "hero.json", "--strict"]).unwrap();
        match cli.command {
            Some(Commands::Validate(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("hero.json")));
                assert!(args.strict);
            }
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn validate_format_defaults_to_human() {
        let cli = Cli::try_parse_from(["etchkit", "validate", "hero.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate(args)) => assert_eq!(args.format, "human"),
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn init_accepts_name_and_prefix() {
        let cli = Cli::try_parse_from([
            "etchkit", "init", "--name", "Demo", "--prefix", "dm", "--force",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert_eq!(args.name.as_deref(), Some("Demo"));
                assert_eq!(args.prefix.as_deref(), Some("dm"));
                assert!(args.force);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn patterns_defaults() {
        let cli = Cli::try_parse_from(["etchkit", "patterns"]).unwrap();
        match cli.command {
            Some(Commands::Patterns(args)) => {
                assert_eq!(args.base_url, crate::fetch::DEFAULT_BASE_URL);
                assert_eq!(args.output, PathBuf::from("patterns"));
                assert!(!args.fresh);
            }
            other => panic!("expected patterns, got {other:?}"),
        }
    }
}
