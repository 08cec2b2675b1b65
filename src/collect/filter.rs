//! Eligibility rules for configuration-key candidates.

use crate::model::FieldDecl;

/// Decide whether a field declaration documents a configuration key.
///
/// Rules, applied in order:
/// 1. an attached annotation with `exclude` set rejects the field;
/// 2. the field must carry a compile-time constant of text type.
///
/// An annotation alone never qualifies a field. Only a text constant does,
/// because the constant's value is the key under which the record is
/// published.
pub fn is_eligible(field: &FieldDecl) -> bool {
    if field.annotation.as_ref().is_some_and(|a| a.exclude) {
        return false;
    }
    field.constant_text().is_some()
}
