//! Element tree supplied by the host analysis environment.
//!
//! The host builds this tree from whatever source model it has (a compiler
//! frontend, an annotation index, a test fixture); the pass only ever reads
//! it. Members keep declaration order, and type nesting is acyclic by
//! construction.

use crate::model::annotation::DocAnnotation;

// ============================================================
// Constant values
// ============================================================

/// A compile-time constant attached to a field declaration.
///
/// Only text constants can become configuration keys; the other kinds exist
/// so hosts can hand over the whole constant pool without pre-filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl ConstValue {
    /// The text form of the constant, if it is text-typed.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConstValue::Str(text) => Some(text),
            _ => None,
        }
    }
}

// ============================================================
// Declarations
// ============================================================

/// A field-like declaration, the unit the filter and resolver operate on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDecl {
    /// Declared field name. Diagnostic use only, never part of a record.
    pub name: String,
    /// Compile-time constant value, if the declaration carries one.
    pub constant: Option<ConstValue>,
    /// Structured documentation annotation, if one is attached.
    pub annotation: Option<DocAnnotation>,
    /// Raw documentation-comment text, exactly as the host read it.
    pub doc_comment: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The field's constant as text, if it has a text-typed constant.
    pub fn constant_text(&self) -> Option<&str> {
        self.constant.as_ref().and_then(ConstValue::as_text)
    }
}

/// A type declaration and its directly enclosed members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDecl {
    /// Stable, human-readable identifier of the declaration, usually the
    /// fully qualified type name. Blank means the host could not resolve it.
    pub qualified_name: String,
    /// Direct members in declaration order.
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            members: Vec::new(),
        }
    }

    /// The declaration's identifier, or `None` when the host left it blank.
    pub fn resolved_name(&self) -> Option<&str> {
        if self.qualified_name.trim().is_empty() {
            None
        } else {
            Some(&self.qualified_name)
        }
    }
}

/// The member kinds the walk distinguishes.
///
/// Hosts omit members that are neither nested types nor fields (methods and
/// the like); leaving them out is equivalent to the walk ignoring them.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Type(TypeDecl),
    Field(FieldDecl),
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text_on_text_constant() {
        assert_eq!(
            ConstValue::Str("app.timeout".to_string()).as_text(),
            Some("app.timeout")
        );
    }

    #[test]
    fn test_as_text_on_non_text_constants() {
        assert_eq!(ConstValue::Int(42).as_text(), None);
        assert_eq!(ConstValue::Float(0.5).as_text(), None);
        assert_eq!(ConstValue::Bool(true).as_text(), None);
        assert_eq!(ConstValue::Char('x').as_text(), None);
    }

    #[test]
    fn test_field_constant_text() {
        let mut field = FieldDecl::new("TIMEOUT_KEY");
        assert_eq!(field.constant_text(), None);

        field.constant = Some(ConstValue::Str("app.timeout".to_string()));
        assert_eq!(field.constant_text(), Some("app.timeout"));

        field.constant = Some(ConstValue::Int(3));
        assert_eq!(field.constant_text(), None);
    }

    #[test]
    fn test_new_field_has_no_metadata() {
        let field = FieldDecl::new("RETRIES_KEY");
        assert_eq!(field.name, "RETRIES_KEY");
        assert_eq!(field.constant, None);
        assert_eq!(field.annotation, None);
        assert_eq!(field.doc_comment, None);
    }

    #[test]
    fn test_resolved_name() {
        let ty = TypeDecl::new("com.example.AppConfig");
        assert_eq!(ty.resolved_name(), Some("com.example.AppConfig"));
    }

    #[test]
    fn test_resolved_name_blank_is_none() {
        assert_eq!(TypeDecl::new("").resolved_name(), None);
        assert_eq!(TypeDecl::new("   ").resolved_name(), None);
        assert_eq!(TypeDecl::new("\t\n").resolved_name(), None);
    }

    #[test]
    fn test_resolved_name_is_verbatim() {
        // Blankness is judged on the trimmed name, but the returned
        // identifier is never altered.
        let ty = TypeDecl::new(" com.example.Padded ");
        assert_eq!(ty.resolved_name(), Some(" com.example.Padded "));
    }
}
