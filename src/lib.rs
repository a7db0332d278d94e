//! Caller Trace
//!
//! Call-site file path and function name resolution for trace output.
//!
//! Captures the calling thread's stack, selects the frame a configured
//! distance from the capture point, and reports:
//! - the source file at that frame, relative to a configured project
//!   root, with forward-slash separators regardless of host OS
//! - the function name recorded for that frame, verbatim
//!
//! Built for logging helpers that must never break the code they trace:
//! the sentinel-returning operations degrade to `"unknown"` instead of
//! surfacing an error, while the `try_` operations expose typed failures
//! for callers that need to tell "no data" apart from broken tracing.
//!
//! ```no_run
//! use caller_trace::StackResolver;
//!
//! let resolver = StackResolver::new("/home/dev/game");
//! let module = resolver.caller_module_path();
//! let function = resolver.caller_function_name();
//! log::info!("[{module}::{function}] scene loaded");
//! ```

pub mod resolver;
pub mod snapshot;
pub mod utils;

// Re-export main types
pub use resolver::StackResolver;
pub use snapshot::{Frame, StackSnapshot};
pub use utils::error::ResolveError;
