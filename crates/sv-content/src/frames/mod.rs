//! Frame types, one per kind of illustration

mod array_scan;
mod linked_list;
mod memory;
mod palindrome;
mod stack;
mod stage_flow;
mod transaction;

pub use array_scan::{ArrayScanFrame, CellRole};
pub use linked_list::{LinkDirection, LinkedListFrame, NodeRole};
pub use memory::{memory_walkthrough, MemoryFlowFrame, MemoryLayout, MemorySection, MemoryStage};
pub use palindrome::PalindromeFrame;
pub use stack::{StackFrame, StackRole};
pub use stage_flow::{stage_walkthrough, Stage, StageFlow, StageFlowFrame, StageStatus};
pub use transaction::{
    event_is_failure, Outcome, Scenario, ServiceBox, ServiceStatus, TransactionFrame,
    TransactionPattern,
};
