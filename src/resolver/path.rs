//! Root-relative path extraction.
//!
//! Source paths recorded by debug info are absolute and use the host OS
//! separator. Trace output wants them relative to the project root and
//! forward-slashed on every platform, so the comparison here is textual
//! rather than `Path`-based: a Windows frame path must still resolve
//! when the trace is inspected on another host.

use crate::utils::config::PATH_SEPARATOR;
use crate::utils::error::ResolveError;

/// Convert Windows-style backslashes to forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', PATH_SEPARATOR)
}

/// Strip the project root prefix from an absolute source path.
///
/// Both sides are separator-normalized before comparison, and the root
/// may be supplied with or without a trailing slash. The result is
/// always relative: it never starts with a slash.
///
/// A path that does not live under the root is rejected instead of
/// being truncated at the root's length. Truncation would silently
/// report a garbage module path for out-of-tree code.
pub fn strip_root(path: &str, root: &str) -> Result<String, ResolveError> {
    let path = normalize_separators(path);
    let root = normalize_separators(root);
    let base = root.trim_end_matches('/');

    // Prefix match must end on a component boundary: "/proj" is not a
    // root of "/project/main.src".
    let rest = match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Err(ResolveError::PathOutsideRoot { path, root }),
    };

    Ok(rest.trim_start_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_root_unix() {
        assert_eq!(
            strip_root("/project/Scenes/Main/Main.src", "/project").unwrap(),
            "Scenes/Main/Main.src"
        );
    }

    #[test]
    fn test_strip_root_trailing_slash() {
        assert_eq!(
            strip_root("/project/Scenes/Main.src", "/project/").unwrap(),
            "Scenes/Main.src"
        );
    }

    #[test]
    fn test_strip_root_windows_separators() {
        assert_eq!(
            strip_root("C:\\Game\\Scenes\\Main.src", "C:\\Game").unwrap(),
            "Scenes/Main.src"
        );
    }

    #[test]
    fn test_strip_root_mixed_separators() {
        assert_eq!(
            strip_root("C:\\Game\\Scenes\\Main.src", "C:/Game").unwrap(),
            "Scenes/Main.src"
        );
    }

    #[test]
    fn test_strip_root_path_equals_root() {
        assert_eq!(strip_root("/project", "/project").unwrap(), "");
    }

    #[test]
    fn test_strip_root_rejects_outside_path() {
        let err = strip_root("/elsewhere/Main.src", "/project").unwrap_err();
        assert!(matches!(err, ResolveError::PathOutsideRoot { .. }));
    }

    #[test]
    fn test_strip_root_rejects_partial_component_match() {
        let err = strip_root("/projectile/Main.src", "/project").unwrap_err();
        assert!(matches!(err, ResolveError::PathOutsideRoot { .. }));
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("a\\b\\c.src"), "a/b/c.src");
        assert_eq!(normalize_separators("a/b/c.src"), "a/b/c.src");
    }
}
