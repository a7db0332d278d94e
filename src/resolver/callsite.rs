//! Frame selection and the sentinel-degrading entry points.

use log::warn;

use super::path::strip_root;
use crate::snapshot::{capture, Frame, StackSnapshot};
use crate::utils::config::{DEFAULT_CALLER_DEPTH, UNKNOWN};
use crate::utils::error::ResolveError;

/// Resolves call-site file paths and function names against captured
/// stacks.
///
/// Holds the one piece of configuration the host supplies: the absolute
/// project root that reported paths are made relative to, resolved once
/// before construction. The resolver is immutable, so one instance can
/// be shared across threads without synchronization; every query reads
/// only the calling thread's stack.
///
/// Two API layers:
/// - `try_*` operations take an explicit snapshot and return typed
///   errors, for callers that need to distinguish "no data" from broken
///   tracing.
/// - `caller_*` operations capture internally and degrade every failure
///   to the `"unknown"` sentinel, for trace output that must never
///   break the traced code.
#[derive(Debug, Clone)]
pub struct StackResolver {
    root: String,
    depth: usize,
}

impl StackResolver {
    /// Create a resolver for the given project root, reporting the
    /// frame at the default caller depth.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            depth: DEFAULT_CALLER_DEPTH,
        }
    }

    /// Override the frame depth used by the `caller_*` operations.
    ///
    /// The default depth assumes one specific call topology; callers
    /// reached through a different number of indirection levels set
    /// their own.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Configured project root, verbatim as supplied
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Frame depth used by the `caller_*` operations
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Root-relative source path of the frame at `depth`.
    pub fn try_module_path(
        &self,
        snapshot: &StackSnapshot,
        depth: usize,
    ) -> Result<String, ResolveError> {
        let frame = frame_at(snapshot, depth)?;
        self.module_path_of(frame, depth)
    }

    /// Function name of the frame at `depth`, verbatim.
    pub fn try_function_name(
        &self,
        snapshot: &StackSnapshot,
        depth: usize,
    ) -> Result<String, ResolveError> {
        let frame = frame_at(snapshot, depth)?;
        function_name_of(frame, depth)
    }

    /// Root-relative source path of the first frame matching `pred`.
    ///
    /// Predicate selection removes the fixed-offset coupling: a logging
    /// helper can skip frames belonging to its own module instead of
    /// counting indirection levels through it.
    pub fn try_module_path_where<F>(
        &self,
        snapshot: &StackSnapshot,
        pred: F,
    ) -> Result<String, ResolveError>
    where
        F: FnMut(&Frame) -> bool,
    {
        let (depth, frame) = find_where(snapshot, pred)?;
        self.module_path_of(frame, depth)
    }

    /// Function name of the first frame matching `pred`, verbatim.
    pub fn try_function_name_where<F>(
        &self,
        snapshot: &StackSnapshot,
        pred: F,
    ) -> Result<String, ResolveError>
    where
        F: FnMut(&Frame) -> bool,
    {
        let (depth, frame) = find_where(snapshot, pred)?;
        function_name_of(frame, depth)
    }

    /// Like `try_module_path`, degraded to the sentinel on failure.
    pub fn module_path(&self, snapshot: &StackSnapshot, depth: usize) -> String {
        self.sentinel(self.try_module_path(snapshot, depth))
    }

    /// Like `try_function_name`, degraded to the sentinel on failure.
    pub fn function_name(&self, snapshot: &StackSnapshot, depth: usize) -> String {
        self.sentinel(self.try_function_name(snapshot, depth))
    }

    /// Capture the current stack and report the caller's root-relative
    /// source path, or `"unknown"` when the stack is too shallow or the
    /// frame carries no usable path.
    pub fn caller_module_path(&self) -> String {
        self.caller_module_path_at(self.depth)
    }

    /// `caller_module_path` with an explicit frame depth.
    pub fn caller_module_path_at(&self, depth: usize) -> String {
        self.module_path(&capture(), depth)
    }

    /// Capture the current stack and report the caller's function name,
    /// or `"unknown"` under the same conditions.
    pub fn caller_function_name(&self) -> String {
        self.caller_function_name_at(self.depth)
    }

    /// `caller_function_name` with an explicit frame depth.
    pub fn caller_function_name_at(&self, depth: usize) -> String {
        self.function_name(&capture(), depth)
    }

    fn module_path_of(&self, frame: &Frame, depth: usize) -> Result<String, ResolveError> {
        let file = frame
            .file
            .as_deref()
            .ok_or(ResolveError::MissingSourceInfo(depth))?;
        strip_root(file, &self.root)
    }

    /// Trace output must never break the traced code, so every error
    /// stops here. Out-of-root paths are logged before degrading; they
    /// mean the configured root is wrong or the frame belongs to a
    /// dependency, and silence would hide both.
    fn sentinel(&self, result: Result<String, ResolveError>) -> String {
        match result {
            Ok(value) => value,
            Err(err @ ResolveError::PathOutsideRoot { .. }) => {
                warn!("call-site resolution degraded: {err}");
                UNKNOWN.to_string()
            }
            Err(_) => UNKNOWN.to_string(),
        }
    }
}

fn frame_at(snapshot: &StackSnapshot, depth: usize) -> Result<&Frame, ResolveError> {
    snapshot
        .frame(depth)
        .ok_or(ResolveError::InsufficientStackDepth {
            requested: depth,
            available: snapshot.frame_count(),
        })
}

fn find_where<F>(snapshot: &StackSnapshot, mut pred: F) -> Result<(usize, &Frame), ResolveError>
where
    F: FnMut(&Frame) -> bool,
{
    snapshot
        .frames()
        .iter()
        .enumerate()
        .find(|(_, frame)| pred(frame))
        .ok_or(ResolveError::NoMatchingFrame)
}

fn function_name_of(frame: &Frame, depth: usize) -> Result<String, ResolveError> {
    frame
        .function
        .clone()
        .ok_or(ResolveError::MissingFunctionName(depth))
}
