use std::fmt;

use serde::{Deserialize, Serialize};

/// A cursor position within a sequence of known length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepPosition {
    /// Zero-based frame index
    pub index: usize,
    /// Total number of frames
    pub total: usize,
}

impl StepPosition {
    /// One-based step number as shown to readers
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    /// Fraction of the sequence already shown, 0.0 at the first frame
    pub fn progress(&self) -> f32 {
        if self.total <= 1 {
            return 1.0;
        }
        self.index as f32 / (self.total - 1) as f32
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.step_number(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let position = StepPosition { index: 2, total: 8 };
        assert_eq!(position.to_string(), "Step 3 of 8");
    }

    #[test]
    fn test_position_progress() {
        assert_eq!(StepPosition { index: 0, total: 5 }.progress(), 0.0);
        assert_eq!(StepPosition { index: 4, total: 5 }.progress(), 1.0);
        assert_eq!(StepPosition { index: 0, total: 1 }.progress(), 1.0);
    }

    #[test]
    fn test_position_bounds() {
        let single = StepPosition { index: 0, total: 1 };
        assert!(single.is_first());
        assert!(single.is_last());

        let middle = StepPosition { index: 1, total: 3 };
        assert!(!middle.is_first());
        assert!(!middle.is_last());
    }
}
