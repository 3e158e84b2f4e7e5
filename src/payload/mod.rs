//! Script payload helpers shared by the encoder and the validator.
//!
//! The encoder produces the base64 `script.code` values that the validator
//! later checks, so both sides share one typo dictionary, one delimiter
//! balance check, and one codec. Everything here is pure text analysis; no
//! payload is ever executed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;
use thiserror::Error;

/// A known misspelling that breaks Etch scripts at runtime.
#[derive(Debug)]
pub struct Typo {
    /// The misspelled token, as shown in messages.
    pub name: &'static str,
    /// The corrected token.
    pub fix: &'static str,
    pattern: &'static str,
    replacement: &'static str,
}

/// Misspellings collected from broken payloads in the wild.
pub const KNOWN_TYPOS: &[Typo] = &[
    Typo {
        name: "SCrollTrigger",
        fix: "ScrollTrigger",
        pattern: "SCrollTrigger",
        replacement: "ScrollTrigger",
    },
    Typo {
        name: "vvar",
        fix: "var",
        pattern: r"\bvvar\b",
        replacement: "var",
    },
    Typo {
        name: "ggsap",
        fix: "gsap",
        pattern: r"\bggsap\.",
        replacement: "gsap.",
    },
    Typo {
        name: "doccument",
        fix: "document",
        pattern: "doccument",
        replacement: "document",
    },
    Typo {
        name: "querrySelector",
        fix: "querySelector",
        pattern: "querrySelector",
        replacement: "querySelector",
    },
    Typo {
        name: "addeventListener",
        fix: "addEventListener",
        pattern: "addeventListener",
        replacement: "addEventListener",
    },
    Typo {
        name: "funtion",
        fix: "function",
        pattern: r"\bfuntion\b",
        replacement: "function",
    },
    Typo {
        name: "retunr",
        fix: "return",
        pattern: r"\bretunr\b",
        replacement: "return",
    },
    Typo {
        name: "functoin",
        fix: "function",
        pattern: r"\bfunctoin\b",
        replacement: "function",
    },
];

static TYPO_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KNOWN_TYPOS
        .iter()
        .map(|t| Regex::new(t.pattern).unwrap())
        .collect()
});

static BASE64_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap());

static GENERATED_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]{7}$").unwrap());

// A single & or | flanked by word characters on both sides. The doubled
// forms never match because the inner neighbor is the operator itself.
static SINGLE_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w\s*[&|]\s*\w").unwrap());

/// Curly quote characters that break the host's line-oriented format.
pub const SMART_QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Find every known typo present in `code`.
pub fn find_typos(code: &str) -> Vec<&'static Typo> {
    KNOWN_TYPOS
        .iter()
        .zip(TYPO_REGEXES.iter())
        .filter(|(_, re)| re.is_match(code))
        .map(|(typo, _)| typo)
        .collect()
}

/// Replace every known typo, returning the fixed text and the typos found.
pub fn fix_typos(code: &str) -> (String, Vec<&'static Typo>) {
    let mut fixed = code.to_string();
    let mut found = Vec::new();

    for (typo, re) in KNOWN_TYPOS.iter().zip(TYPO_REGEXES.iter()) {
        if re.is_match(&fixed) {
            fixed = re.replace_all(&fixed, typo.replacement).into_owned();
            found.push(typo);
        }
    }

    (fixed, found)
}

/// Open/close counts for one delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterBalance {
    pub open: char,
    pub close: char,
    pub opens: usize,
    pub closes: usize,
}

impl DelimiterBalance {
    /// Whether the open and close counts agree.
    pub fn is_balanced(&self) -> bool {
        self.opens == self.closes
    }
}

/// Count each delimiter pair in `code`.
///
/// This is a coarse balance check, not a parser: delimiters inside string
/// literals and comments are counted too, deliberately trading false
/// negatives for zero dependencies on a real JavaScript parser.
pub fn delimiter_balance(code: &str) -> [DelimiterBalance; 3] {
    let mut pairs = [
        DelimiterBalance {
            open: '{',
            close: '}',
            opens: 0,
            closes: 0,
        },
        DelimiterBalance {
            open: '(',
            close: ')',
            opens: 0,
            closes: 0,
        },
        DelimiterBalance {
            open: '[',
            close: ']',
            opens: 0,
            closes: 0,
        },
    ];

    for ch in code.chars() {
        for pair in pairs.iter_mut() {
            if ch == pair.open {
                pair.opens += 1;
            } else if ch == pair.close {
                pair.closes += 1;
            }
        }
    }

    pairs
}

/// The delimiter pairs whose counts disagree.
pub fn unbalanced_delimiters(code: &str) -> Vec<DelimiterBalance> {
    delimiter_balance(code)
        .into_iter()
        .filter(|p| !p.is_balanced())
        .collect()
}

/// Whether `code` contains non-ASCII smart-quote characters.
pub fn has_smart_quotes(code: &str) -> bool {
    code.chars().any(|c| SMART_QUOTES.contains(&c))
}

/// A snippet around a single `&` or `|` that was likely meant doubled.
pub fn single_operator_match(code: &str) -> Option<&str> {
    SINGLE_OPERATOR.find(code).map(|m| m.as_str())
}

/// Whether the animation plugin is referenced without being registered.
pub fn missing_plugin_registration(code: &str) -> bool {
    code.contains("ScrollTrigger") && !code.contains("registerPlugin")
}

/// Whether a console logging call is left in the payload.
pub fn has_console_logging(code: &str) -> bool {
    code.contains("console.")
}

/// Whether `code` uses only the base64 alphabet with trailing padding.
pub fn is_base64_alphabet(code: &str) -> bool {
    BASE64_LINE.is_match(code)
}

/// Whether `id` matches the 7-character lowercase-alphanumeric shape of
/// generated script and style ids.
pub fn is_generated_id(id: &str) -> bool {
    GENERATED_ID.is_match(id)
}

/// Encode a script body, trimmed, as a single base64 line.
pub fn encode(code: &str) -> String {
    STANDARD.encode(code.trim())
}

/// Failure to recover the script text from a payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode a base64 payload back to script text.
pub fn decode(code: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(code)?;
    Ok(String::from_utf8(bytes)?)
}

/// Generate a fresh 7-character lowercase-alphanumeric script id.
pub fn generate_script_id() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let digest = hex::encode(hasher.finalize());

    digest[..7].to_string()
}
