//! Configuration and constants for call-site resolution.

/// Sentinel returned when resolution degrades instead of failing
pub const UNKNOWN: &str = "unknown";

/// Frame distance between the `caller_*` entry points and the call site
/// they report.
///
/// Index 6 matches one specific call topology: an object method invoked
/// through five levels of indirection from the public entry point. Use
/// `with_depth`, the `_at` operations, or predicate selection when the
/// topology differs.
pub const DEFAULT_CALLER_DEPTH: usize = 6;

/// Canonical separator for reported paths, regardless of host OS
pub const PATH_SEPARATOR: &str = "/";
