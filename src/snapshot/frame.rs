//! Frame and snapshot records for one captured call stack.

/// One entry in a captured call stack.
///
/// Every field is optional: frames without debug info carry no file or
/// line, and frames outside symbolized code carry no function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Absolute source file path, as recorded by debug info
    pub file: Option<String>,

    /// Source line within `file`
    pub line: Option<u32>,

    /// Function or method name, as the symbolizer reports it
    pub function: Option<String>,
}

impl Frame {
    /// Create a frame from prepared fields
    ///
    /// **Public** - constructor, also the test seam for resolution logic
    pub fn new(file: Option<String>, line: Option<u32>, function: Option<String>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// The ordered frames captured at one point in time, innermost first.
///
/// Frame indices are only stable for the lifetime of one snapshot: stack
/// depth changes between captures, so a snapshot is captured, consumed
/// within a single call, and discarded. Nothing here is shared or
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct StackSnapshot {
    frames: Vec<Frame>,
}

impl StackSnapshot {
    /// Build a snapshot from prepared frames
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Frame at `idx` (zero-based, innermost first), if the stack is
    /// deep enough
    pub fn frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// All captured frames, innermost first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
