//! Metadata resolution for eligible fields.
//!
//! Merges the two descriptive sources with a fixed precedence: structured
//! annotation attributes win, and the free-text documentation comment fills
//! the gaps. A non-blank annotation description suppresses comment
//! processing entirely, tags included.

use tracing::trace;

use crate::entry::DocEntry;
use crate::error::TraverseError;
use crate::model::{FieldDecl, TypeDecl};
use crate::parsers::since_tag::extract_since;

/// Resolve the documentation record for `field`, declared in `enclosing`.
///
/// Callers must pre-filter with [`is_eligible`]; the constant text value is
/// required here.
///
/// Resolution order:
/// 1. `key` is the constant text value, byte-for-byte.
/// 2. `source` is the enclosing declaration's resolved name. A blank name
///    is a host fault and fails the walk.
/// 3. Annotation attributes are read with blank normalized to absent.
/// 4. A present annotation description is adopted verbatim and ends comment
///    processing.
/// 5. Otherwise the documentation comment is scanned for since-tags: the
///    first capture fills a still-absent `since`, all occurrences are
///    stripped, and the trimmed remainder becomes the description.
/// 6. `default_value` only ever comes from the annotation.
///
/// [`is_eligible`]: crate::collect::filter::is_eligible
pub fn resolve_field(field: &FieldDecl, enclosing: &TypeDecl) -> Result<DocEntry, TraverseError> {
    let key = field
        .constant_text()
        .expect("resolve_field() requires a field accepted by is_eligible()")
        .to_string();

    let source = enclosing
        .resolved_name()
        .ok_or_else(|| TraverseError::UnresolvedEnclosingType {
            field: field.name.clone(),
        })?
        .to_string();

    let annotation = field.annotation.as_ref();
    let default_value = annotation
        .and_then(|a| non_blank(a.default_value.as_deref()))
        .map(str::to_string);
    let since = annotation
        .and_then(|a| non_blank(a.since.as_deref()))
        .map(str::to_string);

    if let Some(description) = annotation.and_then(|a| non_blank(a.description.as_deref())) {
        return Ok(DocEntry {
            key,
            source,
            description: description.to_string(),
            default_value,
            since,
        });
    }

    trace!(
        "field '{}' has no annotation description, falling back to its doc comment",
        field.name
    );

    let extraction = extract_since(field.doc_comment.as_deref().unwrap_or_default());

    Ok(DocEntry {
        key,
        source,
        description: extraction.text.trim().to_string(),
        default_value,
        since: since.or(extraction.since),
    })
}

/// Blank-to-absent normalization for annotation attributes.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
