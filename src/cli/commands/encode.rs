//! The `encode` command: turn script text into an embeddable payload.

use std::io::Read;

use crate::cli::args::EncodeArgs;
use crate::error::Result;
use crate::payload;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Encodes a script body as a base64 payload with a script id.
pub struct EncodeCommand {
    args: EncodeArgs,
}

impl EncodeCommand {
    pub fn new(args: EncodeArgs) -> Self {
        Self { args }
    }

    fn read_source(&self) -> Result<String> {
        match &self.args.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

impl Command for EncodeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = self.read_source()?;
        if source.trim().is_empty() {
            let origin = self
                .args
                .input
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdin".to_string());
            ui.error(&format!("No script text read from {origin}"));
            return Ok(CommandResult::failure(1));
        }

        let (code, fixed) = payload::fix_typos(&source);
        for typo in &fixed {
            ui.warning(&format!("Fixed typo: {} -> {}", typo.name, typo.fix));
        }

        let mut broken = false;
        if payload::has_smart_quotes(&code) {
            ui.error("Smart quotes found; replace them with straight quotes before encoding");
            broken = true;
        }
        for pair in payload::unbalanced_delimiters(&code) {
            ui.error(&format!(
                "Unbalanced {}{}: {} opening vs {} closing",
                pair.open, pair.close, pair.opens, pair.closes
            ));
            broken = true;
        }
        if broken {
            return Ok(CommandResult::failure(1));
        }

        if payload::missing_plugin_registration(&code) {
            ui.warning("ScrollTrigger is used without gsap.registerPlugin(ScrollTrigger)");
        }

        let encoded = payload::encode(&code);
        let id = self
            .args
            .id
            .clone()
            .unwrap_or_else(payload::generate_script_id);

        println!("{encoded}");
        println!();
        println!("\"script\": {{");
        println!("  \"id\": \"{id}\",");
        println!("  \"code\": \"{encoded}\"");
        println!("}}");

        Ok(CommandResult::success())
    }
}
