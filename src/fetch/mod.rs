//! Pattern library fetcher.
//!
//! Downloads pattern pages from the Etch pattern library, extracts the
//! embedded component JSON from the `data-json` attribute, and saves each
//! pattern under `<output>/<category>/<slug>.json` with a `_metadata` block.
//! Responses are cached on disk keyed by the sha256 of the URL; `--fresh`
//! bypasses the cache.

use anyhow::{anyhow, Context};
use chrono::Utc;
use regex::Regex;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

use crate::error::{EtchError, Result};

/// Default pattern library host.
pub const DEFAULT_BASE_URL: &str = "https://patterns.etchwp.com";

/// Pattern categories the library publishes.
pub const CATEGORIES: &[&str] = &[
    "hero",
    "headers",
    "footer",
    "features",
    "testimonials",
    "content",
    "blog",
    "interactive",
    "introductions",
    "avatars",
];

/// Known pattern slugs per category.
pub const PATTERNS: &[(&str, &[&str])] = &[(
    "hero",
    &[
        "hero-alpha",
        "hero-bravo",
        "hero-charlie",
        "hero-delta",
        "hero-echo",
        "hero-foxtrot",
        "hero-golf",
        "hero-hotel",
        "hero-india",
        "hero-juliet",
    ],
)];

static DATA_JSON_RAW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)data-json=["'](\{.*?\})["']"#).unwrap());

static DATA_JSON_ENCODED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-json=["']([^"']+)["']"#).unwrap());

static PAGE_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<title>([^<]+)</title>").unwrap());

static META_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<meta name="description" content="([^"]+)""#).unwrap());

/// Title and description scraped from a pattern page.
#[derive(Debug, Clone)]
pub struct PatternMetadata {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// A successfully collected pattern.
#[derive(Debug)]
pub struct CollectedPattern {
    pub slug: String,
    pub path: PathBuf,
    pub metadata: PatternMetadata,
}

/// Fetches pattern pages with an on-disk response cache.
pub struct PatternFetcher {
    base_url: String,
    output_dir: PathBuf,
    cache_dir: PathBuf,
    fresh: bool,
    client: reqwest::blocking::Client,
}

impl PatternFetcher {
    /// Create a fetcher writing patterns under `output_dir`.
    pub fn new(base_url: impl Into<String>, output_dir: PathBuf, fresh: bool) -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("etchkit")
            .join("patterns");

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EtchError::Other(anyhow!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            output_dir,
            cache_dir,
            fresh,
            client,
        })
    }

    /// The page URL for a pattern slug.
    pub fn pattern_url(&self, slug: &str) -> String {
        format!("{}/layouts/{slug}/", self.base_url)
    }

    /// Known slugs for one category.
    pub fn slugs_for(category: &str) -> &'static [&'static str] {
        PATTERNS
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, slugs)| *slugs)
            .unwrap_or(&[])
    }

    /// Fetch, extract, and save one pattern.
    pub fn collect(&self, slug: &str) -> Result<CollectedPattern> {
        let html = self.fetch_page(slug)?;

        let json = extract_json(&html).ok_or_else(|| EtchError::PatternFetchError {
            slug: slug.to_string(),
            message: "no data-json payload found in page".to_string(),
        })?;

        let metadata = extract_metadata(&html, slug);
        let path = self.save(slug, json, &metadata)?;

        Ok(CollectedPattern {
            slug: slug.to_string(),
            path,
            metadata,
        })
    }

    fn fetch_page(&self, slug: &str) -> Result<String> {
        let url = self.pattern_url(slug);

        if !self.fresh {
            if let Some(cached) = self.check_cache(&url)? {
                debug!(url = %url, "cache hit");
                return Ok(cached);
            }
        }

        debug!(url = %url, "fetching");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| EtchError::PatternFetchError {
                slug: slug.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(EtchError::PatternFetchError {
                slug: slug.to_string(),
                message: format!("HTTP {} for {url}", response.status()),
            });
        }

        let body = response.text().map_err(|e| EtchError::PatternFetchError {
            slug: slug.to_string(),
            message: e.to_string(),
        })?;

        self.save_cache(&url, &body)?;
        Ok(body)
    }

    fn check_cache(&self, url: &str) -> Result<Option<String>> {
        let path = self.cache_path(url);
        if path.exists() {
            Ok(Some(std::fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    fn save_cache(&self, url: &str, body: &str) -> Result<()> {
        let path = self.cache_path(url);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, body)?;
        Ok(())
    }

    fn cache_path(&self, url: &str) -> PathBuf {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let hash = hex::encode(hasher.finalize());
        self.cache_dir.join(format!("{hash}.html"))
    }

    fn save(&self, slug: &str, mut json: Value, metadata: &PatternMetadata) -> Result<PathBuf> {
        let category_dir = self.output_dir.join(&metadata.category);
        std::fs::create_dir_all(&category_dir)?;

        if let Some(object) = json.as_object_mut() {
            object.insert(
                "_metadata".to_string(),
                json!({
                    "source": self.base_url.trim_start_matches("https://").trim_start_matches("http://"),
                    "slug": slug,
                    "name": metadata.name,
                    "category": metadata.category,
                    "description": metadata.description,
                    "collected": Utc::now().to_rfc3339(),
                }),
            );
        }

        let path = category_dir.join(format!("{slug}.json"));
        let rendered = serde_json::to_string_pretty(&json)
            .context("failed to serialize pattern")
            .map_err(EtchError::Other)?;
        std::fs::write(&path, rendered + "\n")?;
        Ok(path)
    }

    /// Write `INDEX.md` summarizing the collected patterns.
    pub fn write_index(&self, collected: &[CollectedPattern]) -> Result<PathBuf> {
        let mut content = String::from("# Etch Pattern Templates\n\n");
        content.push_str(&format!("Collected from {}/\n", self.base_url));
        content.push_str(&format!("Last updated: {}\n\n", Utc::now().to_rfc3339()));

        for category in CATEGORIES {
            let in_category: Vec<_> = collected
                .iter()
                .filter(|p| p.metadata.category == *category)
                .collect();
            if in_category.is_empty() {
                continue;
            }

            content.push_str(&format!("## {}\n\n", capitalize(category)));
            for pattern in in_category {
                content.push_str(&format!(
                    "- **{}** `{}/{}.json`\n",
                    pattern.metadata.name, category, pattern.slug
                ));
                if !pattern.metadata.description.is_empty() {
                    content.push_str(&format!("  {}\n", pattern.metadata.description));
                }
            }
            content.push('\n');
        }

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join("INDEX.md");
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Pull the component JSON out of a pattern page.
///
/// The attribute is either raw JSON or HTML-entity encoded; try raw first.
pub fn extract_json(html: &str) -> Option<Value> {
    if let Some(captures) = DATA_JSON_RAW.captures(html) {
        if let Ok(value) = serde_json::from_str(&captures[1]) {
            return Some(value);
        }
    }

    let captures = DATA_JSON_ENCODED.captures(html)?;
    let decoded = decode_entities(&captures[1]);
    serde_json::from_str(&decoded).ok()
}

/// Scrape title and description metadata from a pattern page.
pub fn extract_metadata(html: &str, slug: &str) -> PatternMetadata {
    let default_name = slug
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    let name = PAGE_TITLE
        .captures(html)
        .map(|c| c[1].replace(" - Etch Patterns", "").trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or(default_name);

    let description = META_DESCRIPTION
        .captures(html)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    PatternMetadata {
        slug: slug.to_string(),
        name,
        category: slug.split('-').next().unwrap_or(slug).to_string(),
        description,
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
