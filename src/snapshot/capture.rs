//! Live capture of the calling thread's stack.

use backtrace::Backtrace;
use log::debug;

use super::frame::{Frame, StackSnapshot};

/// Capture the calling thread's stack with file/line resolution.
///
/// **Public** - entry point for live captures
///
/// Each captured frame keeps the first symbol the symbolizer reports for
/// it. Frames the symbolizer cannot resolve stay in the snapshot with
/// empty fields, so indices still count every physical frame.
///
/// Only the calling thread's stack is read, so concurrent captures from
/// different threads need no synchronization.
pub fn capture() -> StackSnapshot {
    let trace = Backtrace::new();

    let frames: Vec<Frame> = trace
        .frames()
        .iter()
        .map(|frame| {
            let symbol = frame.symbols().first();
            Frame::new(
                symbol
                    .and_then(|s| s.filename())
                    .map(|path| path.to_string_lossy().into_owned()),
                symbol.and_then(|s| s.lineno()),
                symbol.and_then(|s| s.name()).map(|name| name.to_string()),
            )
        })
        .collect();

    debug!("captured {} stack frames", frames.len());

    StackSnapshot::from_frames(frames)
}
