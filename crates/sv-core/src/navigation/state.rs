//! Pure navigator state and its transitions
//!
//! Every transition takes the current state by reference and returns a new
//! value. Frames are never touched; only the cursor and the playing flag
//! change, and the cursor is clamped to the sequence on every path.

use super::{PlaybackPhase, Sequence, StepPosition};
use crate::error::NavigatorError;

/// Cursor, sequence and playback flag of one navigator
#[derive(Debug, PartialEq)]
pub struct NavigatorState<T> {
    sequence: Sequence<T>,
    cursor: usize,
    playing: bool,
}

impl<T> Clone for NavigatorState<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            cursor: self.cursor,
            playing: self.playing,
        }
    }
}

impl<T> NavigatorState<T> {
    /// Start at the first frame of an already validated sequence
    pub fn new(sequence: Sequence<T>) -> Self {
        Self {
            sequence,
            cursor: 0,
            playing: false,
        }
    }

    /// Start at the first frame of `frames`
    ///
    /// Fails with [`NavigatorError::InvalidSequence`] when `frames` is empty.
    pub fn create(frames: Vec<T>) -> Result<Self, NavigatorError> {
        Sequence::new(frames).map(Self::new)
    }

    pub fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.playing {
            PlaybackPhase::Playing
        } else {
            PlaybackPhase::Idle
        }
    }

    /// The frame under the cursor
    pub fn current(&self) -> &T {
        &self.sequence[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor == self.sequence.last_index()
    }

    pub fn position(&self) -> StepPosition {
        StepPosition {
            index: self.cursor,
            total: self.sequence.len(),
        }
    }

    pub fn progress(&self) -> f32 {
        self.position().progress()
    }

    /// Move one frame forward; a no-op on the last frame
    #[must_use]
    pub fn advance(&self) -> Self {
        if self.is_last() {
            return self.clone();
        }
        self.with_cursor(self.cursor + 1)
    }

    /// Move one frame back; a no-op on the first frame
    #[must_use]
    pub fn retreat(&self) -> Self {
        if self.is_first() {
            return self.clone();
        }
        self.with_cursor(self.cursor - 1)
    }

    /// Back to the first frame with playback stopped
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.sequence.clone())
    }

    /// Jump to `index`, clamped to the last frame
    #[must_use]
    pub fn seek(&self, index: usize) -> Self {
        self.with_cursor(index.min(self.sequence.last_index()))
    }

    #[must_use]
    pub fn skip_to_end(&self) -> Self {
        self.with_cursor(self.sequence.last_index())
    }

    /// Swap in new content; the cursor always returns to the first frame
    ///
    /// Fails with [`NavigatorError::InvalidSequence`] when `frames` is empty,
    /// in which case `self` is left as it was.
    pub fn set_sequence(&self, frames: Vec<T>) -> Result<Self, NavigatorError> {
        Sequence::new(frames).map(Self::new)
    }

    /// Swap in an already validated sequence
    #[must_use]
    pub fn with_sequence(&self, sequence: Sequence<T>) -> Self {
        Self::new(sequence)
    }

    /// Flip playback
    ///
    /// Starting playback on the last frame settles straight back to idle,
    /// since there is nothing left to play.
    #[must_use]
    pub fn toggle_playing(&self) -> Self {
        let playing = !self.playing && !self.is_last();
        Self {
            playing,
            ..self.clone()
        }
    }

    /// One autoplay step
    ///
    /// Advances while playing and stops playback once the last frame is
    /// reached. Ticks on an idle state change nothing.
    #[must_use]
    pub fn tick(&self) -> Self {
        if !self.playing {
            return self.clone();
        }
        let next = self.advance();
        let playing = !next.is_last();
        Self { playing, ..next }
    }

    /// Same state with playback forced off
    #[must_use]
    pub fn stopped(&self) -> Self {
        Self {
            playing: false,
            ..self.clone()
        }
    }

    /// Cheap identity check: same frame storage, cursor and flag
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        self.cursor == other.cursor
            && self.playing == other.playing
            && self.sequence.ptr_eq(&other.sequence)
    }

    fn with_cursor(&self, cursor: usize) -> Self {
        Self {
            sequence: self.sequence.clone(),
            cursor,
            playing: self.playing,
        }
    }
}
