//! The documentation pass: walk element trees, filter candidate fields,
//! resolve their metadata, and collect one record per configuration key.
//!
//! Data flows one way. The walker feeds member declarations to the filter,
//! survivors to the resolver, and resolved entries into the output sequence
//! in visitation order. No stage mutates the input tree.

pub mod filter;
pub mod resolve;
pub mod walker;

pub use filter::is_eligible;
pub use resolve::resolve_field;
pub use walker::visit_type;

use rayon::prelude::*;
use tracing::debug;

use crate::entry::DocEntry;
use crate::error::Result;
use crate::model::TypeDecl;

/// Collect documentation entries from `roots`, walking each root in input
/// order.
pub fn collect(roots: &[TypeDecl]) -> Result<Vec<DocEntry>> {
    let mut entries = Vec::new();
    for ty in roots {
        walker::visit_type(ty, &mut entries)?;
    }
    debug!(
        "collected {} entries from {} root declarations",
        entries.len(),
        roots.len()
    );
    Ok(entries)
}

/// Collect documentation entries from `roots`, walking independent roots in
/// parallel.
///
/// Per-root sequences are concatenated in input order, not completion order,
/// so the output is identical to [`collect`]. When several roots fault, the
/// first one in input order supplies the error.
pub fn collect_parallel(roots: &[TypeDecl]) -> Result<Vec<DocEntry>> {
    let partials: Vec<Result<Vec<DocEntry>>> = roots
        .par_iter()
        .map(|ty| {
            let mut entries = Vec::new();
            walker::visit_type(ty, &mut entries)?;
            Ok(entries)
        })
        .collect();

    let mut entries = Vec::new();
    for partial in partials {
        entries.extend(partial?);
    }
    debug!(
        "collected {} entries from {} root declarations",
        entries.len(),
        roots.len()
    );
    Ok(entries)
}
