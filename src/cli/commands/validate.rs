//! The `validate` command (also the default when given a bare file path).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::ValidateArgs;
use crate::config::resolve_prefix;
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintContext, LintFormatter, OutputFormat, Validator,
};
use crate::ui::{theme, UserInterface};

use super::{Command, CommandResult};

/// Validates a component document and prints a report.
pub struct ValidateCommand {
    working_dir: PathBuf,
    args: ValidateArgs,
}

impl ValidateCommand {
    pub fn new(working_dir: &Path, args: ValidateArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(file) = &self.args.file else {
            ui.error("No file given. Usage: etchkit validate <file.json>");
            return Ok(CommandResult::failure(1));
        };

        let format: OutputFormat = match self.args.format.parse() {
            Ok(format) => format,
            Err(message) => {
                ui.error(&message);
                return Ok(CommandResult::failure(1));
            }
        };

        let path = if file.is_absolute() {
            file.clone()
        } else {
            self.working_dir.join(file)
        };

        if !path.is_file() {
            ui.error(&format!("Document not found: {}", path.display()));
            return Ok(CommandResult::failure(1));
        }

        let source = std::fs::read_to_string(&path)?;

        let (prefix, prefix_warning) =
            resolve_prefix(self.args.prefix.as_deref(), &self.working_dir);
        if let Some(warning) = prefix_warning {
            ui.warning(&warning);
        }
        debug!(file = %path.display(), prefix = ?prefix, "validating document");

        let validator = Validator::new(LintContext { prefix });
        let report = match validator.validate_source(&source) {
            Ok(report) => report,
            Err(e) => {
                ui.error(&format!("Failed to parse {}: {e}", path.display()));
                return Ok(CommandResult::failure(1));
            }
        };

        let mut stdout = std::io::stdout().lock();
        match format {
            OutputFormat::Human => {
                HumanFormatter::new(theme::should_use_colors()).format(&report, &mut stdout)?
            }
            OutputFormat::Json => JsonFormatter::new().format(&report, &mut stdout)?,
        }

        let failed =
            report.has_errors() || (self.args.strict && report.has_warnings());
        if failed {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    const VALID_PASTE: &str = r#"{
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/element",
            "attrs": { "tag": "div" },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": {}
    }"#;

    fn run(dir: &Path, args: ValidateArgs) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = ValidateCommand::new(dir, args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn valid_document_succeeds() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("hero.json");
        std::fs::write(&file, VALID_PASTE).unwrap();

        let (result, _) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(file),
                format: "human".into(),
                ..Default::default()
            },
        );
        assert!(result.success);
    }

    #[test]
    fn invalid_document_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("broken.json");
        std::fs::write(&file, r#"{ "type": "block" }"#).unwrap();

        let (result, _) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(file),
                format: "human".into(),
                ..Default::default()
            },
        );
        assert_eq!(result, CommandResult::failure(1));
    }

    #[test]
    fn missing_file_reports_error() {
        let tmp = TempDir::new().unwrap();
        let (result, ui) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(tmp.path().join("nope.json")),
                format: "human".into(),
                ..Default::default()
            },
        );
        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_message("Document not found"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("hero.json");
        std::fs::write(&file, VALID_PASTE).unwrap();

        let (result, ui) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(file),
                format: "yaml".into(),
                ..Default::default()
            },
        );
        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_message("unknown format"));
    }

    #[test]
    fn broken_project_record_warns_but_still_validates() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".etch-project.json"), "{ broken").unwrap();
        let file = tmp.path().join("hero.json");
        std::fs::write(&file, VALID_PASTE).unwrap();

        let (result, ui) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(file),
                format: "human".into(),
                ..Default::default()
            },
        );
        assert!(result.success);
        assert!(!ui.warnings().is_empty());
    }

    #[test]
    fn strict_turns_warnings_into_failure() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("hero.json");
        // Valid shape but missing the styles map, which is a warning.
        std::fs::write(
            &file,
            r#"{
                "type": "block",
                "version": 2,
                "gutenbergBlock": {
                    "blockName": "etch/element",
                    "attrs": { "tag": "div" },
                    "innerBlocks": [],
                    "innerContent": []
                }
            }"#,
        )
        .unwrap();

        let (relaxed, _) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(file.clone()),
                format: "human".into(),
                ..Default::default()
            },
        );
        assert!(relaxed.success);

        let (strict, _) = run(
            tmp.path(),
            ValidateArgs {
                file: Some(file),
                format: "human".into(),
                strict: true,
                ..Default::default()
            },
        );
        assert_eq!(strict, CommandResult::failure(1));
    }
}
