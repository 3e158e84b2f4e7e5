//! Non-interactive UI for CI/headless environments.

use anyhow::anyhow;

use crate::error::{EtchError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from their defaults; a prompt without a default is
/// an error, since there is nobody to ask.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if let Some(default) = &prompt.default {
            return Ok(match prompt.prompt_type {
                PromptType::Confirm => PromptResult::Bool(
                    default.to_lowercase() == "true" || default == "y" || default == "yes",
                ),
                _ => PromptResult::String(default.clone()),
            });
        }

        Err(EtchError::Other(anyhow!(
            "Cannot prompt for '{}' in non-interactive mode (no default value)",
            prompt.key
        )))
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_prompt(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Question?".to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let result = ui.prompt(&input_prompt("name", Some("Demo"))).unwrap();
        assert_eq!(result.as_string(), "Demo");
    }

    #[test]
    fn prompt_without_default_is_an_error() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(ui.prompt(&input_prompt("name", None)).is_err());
    }

    #[test]
    fn confirm_default_parses_to_bool() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("false".to_string()),
        };
        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }
}
