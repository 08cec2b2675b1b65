use regex::Regex;
use std::sync::LazyLock;

/// Result of scanning documentation-comment text for since-tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinceExtraction {
    /// Input text with every tag occurrence removed, or the unchanged input
    /// when no tag was found.
    pub text: String,
    /// Version captured from the first tag occurrence, trimmed.
    pub since: Option<String>,
}

// A tag must start its own line: a newline, optional indentation, the
// marker, one literal space, then the version text up to the end of line.
// A tag on the very first line of the text is not recognized.
static SINCE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*@since ([^\n]+)").unwrap());

/// Scan `text` for `@since` tags.
///
/// The first occurrence provides the captured version, but all occurrences
/// are stripped from the returned text. Later tags never override the first
/// capture; they are only removed.
pub fn extract_since(text: &str) -> SinceExtraction {
    match SINCE_TAG_REGEX.captures(text) {
        Some(captures) => SinceExtraction {
            text: SINCE_TAG_REGEX.replace_all(text, "").into_owned(),
            since: captures.get(1).map(|m| m.as_str().trim().to_string()),
        },
        None => SinceExtraction {
            text: text.to_string(),
            since: None,
        },
    }
}
