//! The `.etch-project.json` project record.
//!
//! `etchkit init` writes this file at the project root; the validator walks
//! up from the working directory to find it and uses the recorded class
//! prefix when checking selectors.

use crate::error::{EtchError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name of the project record, always at the project root.
pub const PROJECT_CONFIG_FILE: &str = ".etch-project.json";

static PREFIX_SHAPE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z]{2,4}$").unwrap());

/// The persisted project record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    /// Class prefix, 2-4 lowercase letters.
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acss_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleGuide>,
}

/// Free-text design notes captured by the init questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGuide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aesthetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_colors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_sites: Option<String>,
}

impl ProjectConfig {
    /// Locate the nearest project record at or above `start_dir`.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load and parse a project record from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| EtchError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Serialize and write the record to `path`, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EtchError::Other(anyhow::anyhow!("failed to serialize config: {e}")))?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// The ACSS stylesheet URL derived from the recorded dev URL, unless an
    /// explicit override was stored.
    pub fn effective_acss_url(&self) -> Option<String> {
        if let Some(url) = &self.acss_url {
            return Some(url.clone());
        }
        self.dev_url
            .as_ref()
            .map(|base| derive_acss_url(base))
    }
}

/// Whether `prefix` is 2-4 lowercase ASCII letters.
pub fn validate_prefix(prefix: &str) -> bool {
    PREFIX_SHAPE.is_match(prefix)
}

/// Standard ACSS stylesheet location under a WordPress install.
pub fn derive_acss_url(dev_url: &str) -> String {
    format!(
        "{}/wp-content/uploads/automatic-css/automatic.css",
        dev_url.trim_end_matches('/')
    )
}

/// Resolve the project class prefix for a validation run: an explicit
/// override wins, otherwise the nearest project record supplies it.
///
/// An unreadable or unparsable record is reported through the returned
/// warning instead of failing the run.
pub fn resolve_prefix(
    override_prefix: Option<&str>,
    start_dir: &Path,
) -> (Option<String>, Option<String>) {
    if let Some(prefix) = override_prefix {
        return (Some(prefix.to_string()), None);
    }

    let Some(path) = ProjectConfig::find(start_dir) else {
        return (None, None);
    };

    match ProjectConfig::load(&path) {
        Ok(config) => (Some(config.prefix), None),
        Err(e) => (None, Some(e.to_string())),
    }
}
