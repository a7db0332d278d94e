//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types. The
//! sentinel-returning operations recover from all of these locally;
//! only the `try_*` operations surface them.

use thiserror::Error;

/// Errors that can occur while resolving a call site
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("call stack has {available} frames, frame {requested} does not exist")]
    InsufficientStackDepth { requested: usize, available: usize },

    #[error("no source file recorded for frame {0}")]
    MissingSourceInfo(usize),

    #[error("no function name recorded for frame {0}")]
    MissingFunctionName(usize),

    #[error("source path '{path}' is outside the project root '{root}'")]
    PathOutsideRoot { path: String, root: String },

    #[error("no frame matched the selection predicate")]
    NoMatchingFrame,
}
