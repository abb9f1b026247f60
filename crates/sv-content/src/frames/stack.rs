//! Recursive stack manipulation

use serde::Serialize;

use crate::view::FrameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackRole {
    Top,
    Bottom,
    Middle,
}

/// Stack contents, bottom first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackFrame {
    pub stack: &'static [i32],
    pub action: &'static str,
    /// Element held by the current recursive call
    pub top: Option<i32>,
}

impl StackFrame {
    /// Top takes precedence, so a single element is the top
    pub fn element_role(&self, index: usize) -> StackRole {
        if index + 1 == self.stack.len() {
            StackRole::Top
        } else if index == 0 {
            StackRole::Bottom
        } else {
            StackRole::Middle
        }
    }
}

impl FrameView for StackFrame {
    fn caption(&self) -> &str {
        self.action
    }

    fn lines(&self) -> Vec<String> {
        if self.stack.is_empty() {
            return vec!["(empty stack)".to_string()];
        }
        self.stack
            .iter()
            .enumerate()
            .rev()
            .map(|(index, value)| match self.element_role(index) {
                StackRole::Top => format!("| {:>3} |  <- top", value),
                StackRole::Bottom => format!("| {:>3} |  <- bottom", value),
                StackRole::Middle => format!("| {:>3} |", value),
            })
            .collect()
    }
}
