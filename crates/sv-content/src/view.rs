//! Plain-text narration of frames

use sv_core::StepPosition;

/// Text view of a frame
///
/// Implementations must be pure functions of the frame: the same frame
/// always renders the same text.
pub trait FrameView {
    /// Narrative text for the step
    fn caption(&self) -> &str;

    /// Snapshot of the illustrated state, one line per row
    fn lines(&self) -> Vec<String>;
}

/// Render a frame with its step header
pub fn render_text<F: FrameView + ?Sized>(frame: &F, position: StepPosition) -> String {
    let mut out = format!("{}: {}", position, frame.caption());
    for line in frame.lines() {
        out.push_str("\n  ");
        out.push_str(&line);
    }
    out
}
