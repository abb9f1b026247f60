//! In-place linked-list manipulation

use serde::Serialize;

use crate::view::FrameView;

/// Which way the links point in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDirection {
    Forward,
    Backward,
}

impl LinkDirection {
    fn arrow(self) -> &'static str {
        match self {
            LinkDirection::Forward => "->",
            LinkDirection::Backward => "<-",
        }
    }
}

/// Highlight of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Current,
    Previous,
    Next,
    Plain,
}

/// Node values (`None` is a detached link) with the three walking pointers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkedListFrame {
    pub nodes: &'static [Option<i32>],
    pub current: Option<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    /// Code executed to reach this frame
    pub code: &'static str,
    pub direction: LinkDirection,
}

impl LinkedListFrame {
    /// Role of node `index`; current wins over previous, previous over next
    pub fn node_role(&self, index: usize) -> NodeRole {
        if self.current == Some(index) {
            NodeRole::Current
        } else if self.previous == Some(index) {
            NodeRole::Previous
        } else if self.next == Some(index) {
            NodeRole::Next
        } else {
            NodeRole::Plain
        }
    }
}

impl FrameView for LinkedListFrame {
    fn caption(&self) -> &str {
        self.code.lines().next().unwrap_or_default()
    }

    fn lines(&self) -> Vec<String> {
        let nodes: Vec<String> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let value = node.map_or_else(|| "null".to_string(), |v| v.to_string());
                match self.node_role(index) {
                    NodeRole::Current => format!("<{}>", value),
                    NodeRole::Previous => format!("{{{}}}", value),
                    NodeRole::Next => format!("({})", value),
                    NodeRole::Plain => value,
                }
            })
            .collect();

        let mut lines = vec![
            nodes.join(&format!(" {} ", self.direction.arrow())),
            "<current> {previous} (next)".to_string(),
        ];
        lines.extend(self.code.lines().map(|line| format!("| {}", line)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: LinkedListFrame = LinkedListFrame {
        nodes: &[Some(2), Some(1), None, Some(4), Some(5)],
        current: Some(1),
        previous: Some(0),
        next: Some(2),
        code: "Node nextNode = currNode.next;\ncurrNode.next = prevNode;",
        direction: LinkDirection::Backward,
    };

    #[test]
    fn test_node_roles() {
        assert_eq!(FRAME.node_role(0), NodeRole::Previous);
        assert_eq!(FRAME.node_role(1), NodeRole::Current);
        assert_eq!(FRAME.node_role(2), NodeRole::Next);
        assert_eq!(FRAME.node_role(4), NodeRole::Plain);
    }

    #[test]
    fn test_current_wins_over_other_markers() {
        let overlapping = LinkedListFrame {
            previous: Some(1),
            next: Some(1),
            ..FRAME
        };
        assert_eq!(overlapping.node_role(1), NodeRole::Current);
    }

    #[test]
    fn test_lines() {
        let lines = FRAME.lines();
        assert_eq!(lines[0], "{2} <- <1> <- (null) <- 4 <- 5");
        assert_eq!(lines[2], "| Node nextNode = currNode.next;");
        assert_eq!(FRAME.caption(), "Node nextNode = currNode.next;");
    }
}
