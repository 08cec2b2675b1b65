//! Text-pattern parsers used by metadata resolution.

pub mod since_tag;

pub use since_tag::{SinceExtraction, extract_since};
