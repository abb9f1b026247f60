//! Classic algorithm traces

use crate::frames::{ArrayScanFrame, LinkDirection, LinkedListFrame, PalindromeFrame, StackFrame};

/// Remove duplicates from a sorted array in place
pub static REMOVE_DUPLICATES: [ArrayScanFrame; 8] = [
    ArrayScanFrame {
        values: &[1, 1, 2, 3, 3, 4, 5, 5],
        write_index: 1,
        read_index: 1,
        description: "Initial state",
    },
    ArrayScanFrame {
        values: &[1, 1, 2, 3, 3, 4, 5, 5],
        write_index: 1,
        read_index: 2,
        description: "readIndex = 2, found new unique value",
    },
    ArrayScanFrame {
        values: &[1, 2, 2, 3, 3, 4, 5, 5],
        write_index: 2,
        read_index: 3,
        description: "Wrote 2, incremented writeIndex",
    },
    ArrayScanFrame {
        values: &[1, 2, 3, 3, 3, 4, 5, 5],
        write_index: 3,
        read_index: 4,
        description: "Wrote 3, incremented writeIndex",
    },
    ArrayScanFrame {
        values: &[1, 2, 3, 3, 3, 4, 5, 5],
        write_index: 3,
        read_index: 5,
        description: "Found new unique value 4",
    },
    ArrayScanFrame {
        values: &[1, 2, 3, 4, 3, 4, 5, 5],
        write_index: 4,
        read_index: 6,
        description: "Wrote 4, incremented writeIndex",
    },
    ArrayScanFrame {
        values: &[1, 2, 3, 4, 5, 4, 5, 5],
        write_index: 5,
        read_index: 7,
        description: "Wrote 5, incremented writeIndex",
    },
    ArrayScanFrame {
        values: &[1, 2, 3, 4, 5, 4, 5, 5],
        write_index: 5,
        read_index: 8,
        description: "Final state, duplicates removed",
    },
];

const WALK: &str = "prevNode = currNode;\ncurrNode = nextNode;";
const RELINK: &str = "Node nextNode = currNode.next;\ncurrNode.next = prevNode;";

/// Iterative reversal of `1 -> 2 -> 3 -> 4 -> 5`
pub static REVERSE_LINKED_LIST: [LinkedListFrame; 10] = [
    LinkedListFrame {
        nodes: &[Some(1), Some(2), Some(3), Some(4), Some(5)],
        current: Some(0),
        previous: None,
        next: Some(1),
        code: "Node currNode = head;\nNode prevNode = null;",
        direction: LinkDirection::Forward,
    },
    LinkedListFrame {
        nodes: &[Some(1), None, Some(3), Some(4), Some(5)],
        current: Some(0),
        previous: None,
        next: Some(1),
        code: RELINK,
        direction: LinkDirection::Backward,
    },
    LinkedListFrame {
        nodes: &[Some(1), None, Some(3), Some(4), Some(5)],
        current: Some(1),
        previous: Some(0),
        next: Some(2),
        code: WALK,
        direction: LinkDirection::Forward,
    },
    LinkedListFrame {
        nodes: &[Some(2), Some(1), None, Some(4), Some(5)],
        current: Some(1),
        previous: Some(0),
        next: Some(2),
        code: RELINK,
        direction: LinkDirection::Backward,
    },
    LinkedListFrame {
        nodes: &[Some(2), Some(1), None, Some(4), Some(5)],
        current: Some(2),
        previous: Some(1),
        next: Some(3),
        code: WALK,
        direction: LinkDirection::Forward,
    },
    LinkedListFrame {
        nodes: &[Some(3), Some(2), Some(1), None, Some(5)],
        current: Some(2),
        previous: Some(1),
        next: Some(3),
        code: RELINK,
        direction: LinkDirection::Backward,
    },
    LinkedListFrame {
        nodes: &[Some(3), Some(2), Some(1), None, Some(5)],
        current: Some(3),
        previous: Some(2),
        next: Some(4),
        code: WALK,
        direction: LinkDirection::Forward,
    },
    LinkedListFrame {
        nodes: &[Some(4), Some(3), Some(2), Some(1), None],
        current: Some(3),
        previous: Some(2),
        next: Some(4),
        code: RELINK,
        direction: LinkDirection::Backward,
    },
    LinkedListFrame {
        nodes: &[Some(4), Some(3), Some(2), Some(1), None],
        current: Some(4),
        previous: Some(3),
        next: None,
        code: WALK,
        direction: LinkDirection::Forward,
    },
    LinkedListFrame {
        nodes: &[Some(5), Some(4), Some(3), Some(2), Some(1)],
        current: None,
        previous: Some(4),
        next: None,
        code: "currNode.next = prevNode;\nhead = prevNode;",
        direction: LinkDirection::Backward,
    },
];

pub static PALINDROMES: [PalindromeFrame; 5] = [
    PalindromeFrame {
        input: "abccba",
        current: "a",
        found: &["a"],
        narration: "Expand around center at index 0 to find palindrome: 'a'.",
    },
    PalindromeFrame {
        input: "abccba",
        current: "b",
        found: &["a", "b"],
        narration: "Expand around center at index 1 to find palindrome: 'b'.",
    },
    PalindromeFrame {
        input: "abccba",
        current: "bccb",
        found: &["a", "b", "bccb"],
        narration: "Expand around center at indices 2,3 to find palindrome: 'bccb'.",
    },
    PalindromeFrame {
        input: "abccba",
        current: "abccba",
        found: &["a", "b", "bccb", "abccba"],
        narration: "Expand around center at indices 2,3 to find palindrome: 'abccba'.",
    },
    PalindromeFrame {
        input: "abccba",
        current: "c",
        found: &["a", "b", "bccb", "abccba", "c"],
        narration: "Expand around center at index 2 to find palindrome: 'c'.",
    },
];

/// Recursive push of 4 underneath `[1, 2, 3]`
pub static PUSH_AT_BOTTOM: [StackFrame; 8] = [
    StackFrame {
        stack: &[1, 2, 3],
        action: "Pop the top element (3) and call pushAtBottom recursively.",
        top: Some(3),
    },
    StackFrame {
        stack: &[1, 2],
        action: "Pop the top element (2) and call pushAtBottom recursively.",
        top: Some(2),
    },
    StackFrame {
        stack: &[1],
        action: "Pop the top element (1) and call pushAtBottom recursively.",
        top: Some(1),
    },
    StackFrame {
        stack: &[],
        action: "Stack is empty, push 4 at the bottom.",
        top: None,
    },
    StackFrame {
        stack: &[4],
        action: "Push back the previously popped element (1).",
        top: Some(1),
    },
    StackFrame {
        stack: &[4, 1],
        action: "Push back the previously popped element (2).",
        top: Some(2),
    },
    StackFrame {
        stack: &[4, 1, 2],
        action: "Push back the previously popped element (3).",
        top: Some(3),
    },
    StackFrame {
        stack: &[4, 1, 2, 3],
        action: "Element at Top (3).",
        top: Some(3),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicates_ends_with_unique_prefix() {
        let last = REMOVE_DUPLICATES[REMOVE_DUPLICATES.len() - 1];
        assert_eq!(last.kept(), &[1, 2, 3, 4, 5]);
        assert_eq!(last.read_index, last.values.len());
    }

    #[test]
    fn test_reverse_linked_list_ends_reversed() {
        let first = REVERSE_LINKED_LIST[0];
        let last = REVERSE_LINKED_LIST[9];
        let reversed: Vec<_> = first.nodes.iter().rev().copied().collect();
        assert_eq!(last.nodes, reversed.as_slice());
        assert_eq!(last.current, None);
    }

    #[test]
    fn test_palindromes_accumulate() {
        for pair in PALINDROMES.windows(2) {
            assert_eq!(pair[1].found.len(), pair[0].found.len() + 1);
            assert_eq!(pair[1].found.last(), Some(&pair[1].current));
        }
        assert_eq!(PALINDROMES[4].longest(), Some("abccba"));
    }

    #[test]
    fn test_push_at_bottom_ends_with_four_at_bottom() {
        let last = PUSH_AT_BOTTOM[7];
        assert_eq!(last.stack.first(), Some(&4));
        assert_eq!(last.stack.len(), 4);
    }
}
