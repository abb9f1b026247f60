//! Immutable, non-empty frame sequences

use std::ops::Index;
use std::sync::Arc;

use crate::error::NavigatorError;

/// An ordered, non-empty list of authored frames
///
/// Frames are shared behind an `Arc`, so cloning a sequence (and every
/// navigator snapshot holding one) never copies frame data.
#[derive(Debug, PartialEq)]
pub struct Sequence<T> {
    frames: Arc<[T]>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            frames: Arc::clone(&self.frames),
        }
    }
}

impl<T> Sequence<T> {
    /// Build a sequence from authored frames
    pub fn new(frames: Vec<T>) -> Result<Self, NavigatorError> {
        if frames.is_empty() {
            return Err(NavigatorError::InvalidSequence);
        }
        Ok(Self {
            frames: frames.into(),
        })
    }

    /// Number of frames, always at least one
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the final frame
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.frames.get(index)
    }

    pub fn first(&self) -> &T {
        &self.frames[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.frames
    }

    /// Whether both sequences share the same frame storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.frames, &other.frames)
    }
}

impl<T> TryFrom<Vec<T>> for Sequence<T> {
    type Error = NavigatorError;

    fn try_from(frames: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(frames)
    }
}

impl<T: Clone> TryFrom<&[T]> for Sequence<T> {
    type Error = NavigatorError;

    fn try_from(frames: &[T]) -> Result<Self, Self::Error> {
        Self::new(frames.to_vec())
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.frames[index]
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        let result = Sequence::<u8>::new(Vec::new());
        assert_eq!(result, Err(NavigatorError::InvalidSequence));
    }

    #[test]
    fn test_sequence_queries() {
        let sequence = Sequence::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.last_index(), 2);
        assert_eq!(sequence.first(), &'a');
        assert_eq!(sequence[1], 'b');
        assert_eq!(sequence.get(3), None);
        assert!(!sequence.is_empty());
    }

    #[test]
    fn test_clone_shares_frames() {
        let sequence = Sequence::try_from(&[1, 2, 3][..]).unwrap();
        let copy = sequence.clone();
        assert!(sequence.ptr_eq(&copy));
        assert_eq!(copy.iter().sum::<i32>(), 6);
    }
}
