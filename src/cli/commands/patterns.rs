//! The `patterns` command: collect pattern templates from the library.

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::PatternsArgs;
use crate::error::Result;
use crate::fetch::{PatternFetcher, CATEGORIES, PATTERNS};
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Downloads pattern templates and writes them under the output directory.
pub struct PatternsCommand {
    args: PatternsArgs,
}

impl PatternsCommand {
    pub fn new(args: PatternsArgs) -> Self {
        Self { args }
    }

    fn slugs(&self, ui: &mut dyn UserInterface) -> Option<Vec<&'static str>> {
        match &self.args.category {
            Some(category) => {
                let slugs = PatternFetcher::slugs_for(category);
                if slugs.is_empty() {
                    ui.error(&format!(
                        "No known patterns for category '{category}'. Known categories: {}",
                        CATEGORIES.join(", ")
                    ));
                    return None;
                }
                Some(slugs.to_vec())
            }
            None => Some(
                PATTERNS
                    .iter()
                    .flat_map(|(_, slugs)| slugs.iter().copied())
                    .collect(),
            ),
        }
    }
}

impl Command for PatternsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(slugs) = self.slugs(ui) else {
            return Ok(CommandResult::failure(1));
        };

        ui.show_header("etchkit patterns");
        ui.message(&format!(
            "Collecting {} pattern(s) from {}",
            slugs.len(),
            self.args.base_url
        ));

        let fetcher = PatternFetcher::new(
            self.args.base_url.clone(),
            self.args.output.clone(),
            self.args.fresh,
        )?;

        let progress = if ui.output_mode().shows_progress() && ui.is_interactive() {
            let bar = ProgressBar::new(slugs.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            Some(bar)
        } else {
            None
        };

        let mut collected = Vec::new();
        let mut failures = 0usize;
        for slug in &slugs {
            if let Some(bar) = &progress {
                bar.set_message(slug.to_string());
            }
            match fetcher.collect(slug) {
                Ok(pattern) => collected.push(pattern),
                Err(e) => {
                    failures += 1;
                    if let Some(bar) = &progress {
                        bar.suspend(|| ui.warning(&e.to_string()));
                    } else {
                        ui.warning(&e.to_string());
                    }
                }
            }
            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        if !collected.is_empty() {
            let index = fetcher.write_index(&collected)?;
            ui.message(&format!("Index written to {}", index.display()));
        }

        if collected.is_empty() {
            ui.error("No patterns collected");
            return Ok(CommandResult::failure(1));
        }

        if failures > 0 {
            ui.warning(&format!(
                "Collected {} pattern(s), {failures} failed",
                collected.len()
            ));
        } else {
            ui.success(&format!("Collected {} pattern(s)", collected.len()));
        }

        Ok(CommandResult::success())
    }
}
