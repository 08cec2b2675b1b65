//! Configdoc - configuration-key documentation collector
//!
//! Configdoc is a build-time analysis pass. It inspects a host-supplied
//! element tree (type declarations, their nested types, and constant-valued
//! fields), decides which fields declare configuration keys, reconciles each
//! key's structured annotation with its free-text documentation comment, and
//! emits one immutable [`DocEntry`] per key in visitation order.
//!
//! ## Module Structure
//!
//! - `model`: the element tree hosts construct (types, fields, constants,
//!   annotations)
//! - `collect`: the pass itself (walker, candidate filter, metadata resolver)
//! - `parsers`: since-tag extraction from documentation-comment text
//! - `entry`: the documentation record and its JSON interchange form
//! - `error`: fatal traversal failures
//!
//! ## Usage
//!
//! ```
//! use configdoc::{ConstValue, FieldDecl, Member, TypeDecl, collect};
//!
//! let mut field = FieldDecl::new("TIMEOUT_KEY");
//! field.constant = Some(ConstValue::Str("app.timeout".into()));
//! field.doc_comment = Some("Request timeout in ms.\n@since 2.0".into());
//!
//! let mut root = TypeDecl::new("com.example.AppConfig");
//! root.members.push(Member::Field(field));
//!
//! let entries = collect(&[root]).unwrap();
//! assert_eq!(entries[0].key, "app.timeout");
//! assert_eq!(entries[0].description, "Request timeout in ms.");
//! assert_eq!(entries[0].since.as_deref(), Some("2.0"));
//! ```

pub mod collect;
pub mod entry;
pub mod error;
pub mod model;
pub mod parsers;

pub use collect::{collect, collect_parallel, is_eligible, resolve_field, visit_type};
pub use entry::{DocEntry, entries_to_json};
pub use error::{Result, TraverseError};
pub use model::{ConstValue, DocAnnotation, FieldDecl, Member, TypeDecl};
pub use parsers::since_tag::{SinceExtraction, extract_since};
