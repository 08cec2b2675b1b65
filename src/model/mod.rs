//! Input model: the element tree and its attached documentation annotations.

pub mod annotation;
pub mod element;

pub use annotation::DocAnnotation;
pub use element::{ConstValue, FieldDecl, Member, TypeDecl};
