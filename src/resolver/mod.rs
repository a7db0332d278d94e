//! Call-site resolution against a captured stack.
//!
//! This module handles:
//! - Fixed-depth and predicate-based frame selection
//! - Root-relative path extraction and separator normalization
//! - Sentinel degradation for trace helpers that must never fail

pub mod callsite;
pub mod path;

// Re-export main types
pub use callsite::StackResolver;
pub use path::{normalize_separators, strip_root};
