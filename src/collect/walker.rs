//! Recursive element-tree walk.

use tracing::trace;

use crate::collect::{filter, resolve};
use crate::entry::DocEntry;
use crate::error::Result;
use crate::model::{Member, TypeDecl};

/// Walk `ty` depth-first and append one entry per documentable field.
///
/// Members are processed in declaration order and nested type declarations
/// are expanded in place, so a nested type's entries land between those of
/// the fields surrounding it. Filtering is per-field: an ineligible member
/// never stops the sibling scan.
///
/// On a fatal host fault the walk stops immediately. `entries` keeps
/// everything appended up to that point; nothing is rolled back.
pub fn visit_type(ty: &TypeDecl, entries: &mut Vec<DocEntry>) -> Result<()> {
    for member in &ty.members {
        match member {
            Member::Type(nested) => visit_type(nested, entries)?,
            Member::Field(field) => {
                if filter::is_eligible(field) {
                    entries.push(resolve::resolve_field(field, ty)?);
                } else {
                    trace!(
                        "field '{}' in '{}' is not a configuration key, skipping",
                        field.name,
                        ty.qualified_name
                    );
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstValue, FieldDecl};

    fn keyed_field(name: &str, key: &str) -> FieldDecl {
        let mut field = FieldDecl::new(name);
        field.constant = Some(ConstValue::Str(key.to_string()));
        field
    }

    fn keys(entries: &[DocEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_empty_type_appends_nothing() {
        let mut entries = Vec::new();
        visit_type(&TypeDecl::new("com.example.Empty"), &mut entries).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_nested_types_expand_in_place() {
        let mut nested = TypeDecl::new("com.example.Outer.Inner");
        nested.members.push(Member::Field(keyed_field("B", "b")));

        let mut outer = TypeDecl::new("com.example.Outer");
        outer.members.push(Member::Field(keyed_field("A", "a")));
        outer.members.push(Member::Type(nested));
        outer.members.push(Member::Field(keyed_field("C", "c")));

        let mut entries = Vec::new();
        visit_type(&outer, &mut entries).unwrap();
        assert_eq!(keys(&entries), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_source_follows_the_declaring_type() {
        let mut nested = TypeDecl::new("com.example.Outer.Inner");
        nested.members.push(Member::Field(keyed_field("B", "b")));

        let mut outer = TypeDecl::new("com.example.Outer");
        outer.members.push(Member::Field(keyed_field("A", "a")));
        outer.members.push(Member::Type(nested));

        let mut entries = Vec::new();
        visit_type(&outer, &mut entries).unwrap();
        assert_eq!(entries[0].source, "com.example.Outer");
        assert_eq!(entries[1].source, "com.example.Outer.Inner");
    }

    #[test]
    fn test_ineligible_field_does_not_stop_the_scan() {
        let mut ty = TypeDecl::new("com.example.Mixed");
        ty.members.push(Member::Field(keyed_field("A", "a")));
        ty.members.push(Member::Field(FieldDecl::new("NOT_A_KEY")));
        ty.members.push(Member::Field(keyed_field("C", "c")));

        let mut entries = Vec::new();
        visit_type(&ty, &mut entries).unwrap();
        assert_eq!(keys(&entries), vec!["a", "c"]);
    }

    #[test]
    fn test_fatal_fault_preserves_prior_entries() {
        let mut unresolved = TypeDecl::new("   ");
        unresolved.members.push(Member::Field(keyed_field("B", "b")));

        let mut outer = TypeDecl::new("com.example.Outer");
        outer.members.push(Member::Field(keyed_field("A", "a")));
        outer.members.push(Member::Type(unresolved));
        outer.members.push(Member::Field(keyed_field("C", "c")));

        let mut entries = Vec::new();
        let err = visit_type(&outer, &mut entries).unwrap_err();
        assert!(err.to_string().contains("'B'"));
        // The walk stopped at the fault but kept what it had.
        assert_eq!(keys(&entries), vec!["a"]);
    }
}
