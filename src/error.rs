//! Fatal traversal failures.
//!
//! Ineligible fields, missing descriptions, and absent since-tags are normal
//! outcomes and never error; only a host-model read that cannot be satisfied
//! stops a walk. Entries appended before the failure stay valid.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    /// The enclosing declaration of `field` has no resolvable name, so the
    /// record's `source` attribute cannot be populated.
    #[error("cannot resolve enclosing declaration name for field '{field}'")]
    UnresolvedEnclosingType { field: String },
}

pub type Result<T> = std::result::Result<T, TraverseError>;
