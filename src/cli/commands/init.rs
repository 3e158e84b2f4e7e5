//! The `init` command: write a `.etch-project.json` record.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::cli::args::InitArgs;
use crate::config::{validate_prefix, ProjectConfig, StyleGuide, PROJECT_CONFIG_FILE};
use crate::error::Result;
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::{Command, CommandResult};

const AESTHETIC_CHOICES: &[&str] = &[
    "Minimal & clean",
    "Bold & vibrant",
    "Corporate & professional",
    "Warm & organic",
    "Dark & technical",
];

/// Initializes an Etch project record in the working directory.
pub struct InitCommand {
    working_dir: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    pub fn new(working_dir: &Path, args: InitArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    fn ask_input(
        ui: &mut dyn UserInterface,
        key: &str,
        question: &str,
        default: Option<&str>,
    ) -> Result<String> {
        let result = ui.prompt(&Prompt {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        })?;
        Ok(result.as_string().trim().to_string())
    }

    fn ask_prefix(&self, ui: &mut dyn UserInterface) -> Result<Option<String>> {
        if let Some(prefix) = &self.args.prefix {
            if !validate_prefix(prefix) {
                ui.error(&format!(
                    "Invalid prefix '{prefix}': expected 2-4 lowercase letters (e.g. 'dm')"
                ));
                return Ok(None);
            }
            return Ok(Some(prefix.clone()));
        }

        loop {
            let answer = Self::ask_input(
                ui,
                "prefix",
                "Class prefix (2-4 lowercase letters, e.g. 'dm')",
                None,
            )?;
            if validate_prefix(&answer) {
                return Ok(Some(answer));
            }
            ui.warning("Prefix must be 2-4 lowercase letters");
            if !ui.is_interactive() {
                return Ok(None);
            }
        }
    }

    fn ask_style_guide(&self, ui: &mut dyn UserInterface) -> Result<Option<StyleGuide>> {
        let aesthetic = ui
            .prompt(&Prompt {
                key: "aesthetic".to_string(),
                question: "Overall aesthetic".to_string(),
                prompt_type: PromptType::Select {
                    options: AESTHETIC_CHOICES
                        .iter()
                        .map(|choice| PromptOption {
                            label: choice.to_string(),
                            value: choice.to_string(),
                        })
                        .collect(),
                },
                default: Some(AESTHETIC_CHOICES[0].to_string()),
            })?
            .as_string();

        let primary_colors =
            Self::ask_input(ui, "colors", "Primary colors (free text, optional)", Some(""))?;
        let typography =
            Self::ask_input(ui, "typography", "Typography notes (optional)", Some(""))?;
        let target_audience =
            Self::ask_input(ui, "audience", "Target audience (optional)", Some(""))?;
        let reference_sites =
            Self::ask_input(ui, "references", "Reference sites (optional)", Some(""))?;

        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        let guide = StyleGuide {
            aesthetic: non_empty(aesthetic),
            primary_colors: non_empty(primary_colors),
            typography: non_empty(typography),
            target_audience: non_empty(target_audience),
            reference_sites: non_empty(reference_sites),
        };

        if guide.aesthetic.is_none()
            && guide.primary_colors.is_none()
            && guide.typography.is_none()
            && guide.target_audience.is_none()
            && guide.reference_sites.is_none()
        {
            Ok(None)
        } else {
            Ok(Some(guide))
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("etchkit init");

        let config_path = self.working_dir.join(PROJECT_CONFIG_FILE);
        if config_path.exists() && !self.args.force {
            let overwrite = ui
                .prompt(&Prompt {
                    key: "overwrite".to_string(),
                    question: format!("{PROJECT_CONFIG_FILE} already exists. Overwrite?"),
                    prompt_type: PromptType::Confirm,
                    default: Some("false".to_string()),
                })?
                .as_bool()
                .unwrap_or(false);
            if !overwrite {
                ui.error(&format!(
                    "{PROJECT_CONFIG_FILE} already exists (pass --force to overwrite)"
                ));
                return Ok(CommandResult::failure(1));
            }
        }

        let name = match &self.args.name {
            Some(name) => name.clone(),
            None => Self::ask_input(ui, "name", "Project name", None)?,
        };
        if name.is_empty() {
            ui.error("Project name cannot be empty");
            return Ok(CommandResult::failure(1));
        }

        let Some(prefix) = self.ask_prefix(ui)? else {
            return Ok(CommandResult::failure(1));
        };

        let dev_url = match &self.args.dev_url {
            Some(url) => url.clone(),
            None => Self::ask_input(
                ui,
                "dev_url",
                "Development site URL (optional)",
                Some(""),
            )?,
        };
        let dev_url = if dev_url.is_empty() {
            None
        } else {
            Some(dev_url.trim_end_matches('/').to_string())
        };

        // Flag-driven runs skip the design questionnaire.
        let fully_scripted = self.args.name.is_some() && self.args.prefix.is_some();
        let styles = if fully_scripted {
            None
        } else {
            self.ask_style_guide(ui)?
        };

        let config = ProjectConfig {
            name: name.clone(),
            prefix: prefix.clone(),
            created: Some(Utc::now()),
            dev_url,
            acss_url: None,
            styles,
        };
        config.save(&config_path)?;

        ui.success(&format!("Wrote {}", config_path.display()));
        ui.message(&format!("Project: {name}"));
        if let Some(acss) = config.effective_acss_url() {
            ui.message(&format!("ACSS stylesheet: {acss}"));
        }
        ui.message(&format!(
            "Class naming: {prefix}-block__element--modifier (e.g. .{prefix}-hero__title)"
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn scripted_args(name: &str, prefix: &str) -> InitArgs {
        InitArgs {
            force: false,
            name: Some(name.to_string()),
            prefix: Some(prefix.to_string()),
            dev_url: None,
        }
    }

    #[test]
    fn scripted_init_writes_record() {
        let tmp = TempDir::new().unwrap();
        let mut args = scripted_args("Demo Site", "dm");
        args.dev_url = Some("https://demo.local/".to_string());
        let mut ui = MockUI::new();

        let result = InitCommand::new(tmp.path(), args)
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);

        let config = ProjectConfig::load(&tmp.path().join(PROJECT_CONFIG_FILE)).unwrap();
        assert_eq!(config.name, "Demo Site");
        assert_eq!(config.prefix, "dm");
        assert_eq!(config.dev_url.as_deref(), Some("https://demo.local"));
        assert!(config.created.is_some());
        assert!(config.styles.is_none());
        assert!(ui.has_message("dm-block__element--modifier"));
    }

    #[test]
    fn invalid_prefix_flag_fails() {
        let tmp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = InitCommand::new(tmp.path(), scripted_args("Demo", "TOOLONG"))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_message("Invalid prefix"));
        assert!(!tmp.path().join(PROJECT_CONFIG_FILE).exists());
    }

    #[test]
    fn refuses_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(PROJECT_CONFIG_FILE),
            r#"{ "name": "Old", "prefix": "ol" }"#,
        )
        .unwrap();

        let mut ui = MockUI::new();
        // Confirm prompt defaults to false, so the mock declines.
        let result = InitCommand::new(tmp.path(), scripted_args("New", "nw"))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(result, CommandResult::failure(1));

        let config = ProjectConfig::load(&tmp.path().join(PROJECT_CONFIG_FILE)).unwrap();
        assert_eq!(config.name, "Old");
    }

    #[test]
    fn force_overwrites_existing_record() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(PROJECT_CONFIG_FILE),
            r#"{ "name": "Old", "prefix": "ol" }"#,
        )
        .unwrap();

        let mut args = scripted_args("New", "nw");
        args.force = true;
        let mut ui = MockUI::new();
        let result = InitCommand::new(tmp.path(), args).execute(&mut ui).unwrap();
        assert!(result.success);

        let config = ProjectConfig::load(&tmp.path().join(PROJECT_CONFIG_FILE)).unwrap();
        assert_eq!(config.name, "New");
        assert_eq!(config.prefix, "nw");
    }

    #[test]
    fn interactive_init_collects_style_guide() {
        let tmp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("name", "Prompted Site");
        ui.set_prompt_response("prefix", "ps");
        ui.set_prompt_response("dev_url", "");
        ui.set_prompt_response("aesthetic", "Bold & vibrant");
        ui.set_prompt_response("colors", "electric blue");

        let args = InitArgs {
            force: false,
            name: None,
            prefix: None,
            dev_url: None,
        };
        let result = InitCommand::new(tmp.path(), args).execute(&mut ui).unwrap();
        assert!(result.success);

        let config = ProjectConfig::load(&tmp.path().join(PROJECT_CONFIG_FILE)).unwrap();
        assert_eq!(config.name, "Prompted Site");
        assert_eq!(config.prefix, "ps");
        let styles = config.styles.unwrap();
        assert_eq!(styles.aesthetic.as_deref(), Some("Bold & vibrant"));
        assert_eq!(styles.primary_colors.as_deref(), Some("electric blue"));
        assert!(styles.typography.is_none());
    }

    #[test]
    fn prefix_reprompt_gives_up_when_not_interactive() {
        let tmp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.set_interactive(false);
        ui.set_prompt_response("name", "Demo");
        ui.set_prompt_response("prefix", "NOPE");

        let args = InitArgs {
            force: false,
            name: None,
            prefix: None,
            dev_url: None,
        };
        let result = InitCommand::new(tmp.path(), args).execute(&mut ui).unwrap();
        assert_eq!(result, CommandResult::failure(1));
    }
}
