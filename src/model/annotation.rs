//! Structured documentation annotation attached to field declarations.

/// Documentation metadata read from a field's structured annotation.
///
/// Every text attribute is optional, and "provided but blank" is normalized
/// to "not provided" at resolution time, so hosts may pass raw attribute
/// values through without cleaning them up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocAnnotation {
    /// Explicit description. Wins over any documentation comment.
    pub description: Option<String>,
    /// Default value of the configuration key. There is no comment-derived
    /// fallback for this attribute.
    pub default_value: Option<String>,
    /// Version the key was introduced in. Wins over a comment-derived tag.
    pub since: Option<String>,
    /// Excludes the field from documentation entirely.
    pub exclude: bool,
}

impl DocAnnotation {
    /// An annotation that only excludes its field.
    pub fn excluded() -> Self {
        Self {
            exclude: true,
            ..Self::default()
        }
    }
}
