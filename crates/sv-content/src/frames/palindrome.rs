//! Expand-around-center palindrome search

use serde::Serialize;

use crate::view::FrameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalindromeFrame {
    pub input: &'static str,
    /// Palindrome found in this step
    pub current: &'static str,
    /// Every palindrome found so far, in discovery order
    pub found: &'static [&'static str],
    pub narration: &'static str,
}

impl PalindromeFrame {
    /// Longest palindrome found so far
    pub fn longest(&self) -> Option<&'static str> {
        self.found.iter().copied().max_by_key(|p| p.len())
    }
}

impl FrameView for PalindromeFrame {
    fn caption(&self) -> &str {
        self.narration
    }

    fn lines(&self) -> Vec<String> {
        let letters: Vec<String> = self.input.chars().map(|c| c.to_string()).collect();
        vec![
            format!("Input: {}", letters.join(" ")),
            format!("Current Palindrome: {}", self.current),
            format!("All Palindromes: {}", self.found.join(", ")),
        ]
    }
}
