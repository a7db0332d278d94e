//! Stack capture and frame model.
//!
//! This module handles:
//! - Capturing the calling thread's stack with file/line resolution
//! - The `Frame` record (source file, line, function name)
//! - Indexed access into one captured snapshot

pub mod capture;
pub mod frame;

// Re-export main types
pub use capture::capture;
pub use frame::{Frame, StackSnapshot};
