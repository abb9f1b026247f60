//! Two-pointer array scans (e.g. in-place duplicate removal)

use serde::Serialize;

use crate::view::FrameView;

/// Highlight of a single array cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    /// Already part of the compacted prefix
    Kept,
    /// Under the read pointer
    Reading,
    Plain,
}

/// Array contents with a write pointer and a read pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrayScanFrame {
    pub values: &'static [i32],
    pub write_index: usize,
    /// May point one past the end once the scan is done
    pub read_index: usize,
    pub description: &'static str,
}

impl ArrayScanFrame {
    pub fn cell_role(&self, index: usize) -> CellRole {
        if index < self.write_index {
            CellRole::Kept
        } else if index == self.read_index {
            CellRole::Reading
        } else {
            CellRole::Plain
        }
    }

    /// The compacted prefix written so far
    pub fn kept(&self) -> &'static [i32] {
        let values = self.values;
        &values[..self.write_index.min(values.len())]
    }
}

impl FrameView for ArrayScanFrame {
    fn caption(&self) -> &str {
        self.description
    }

    fn lines(&self) -> Vec<String> {
        let cells: Vec<String> = self
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| match self.cell_role(index) {
                CellRole::Kept => format!("[{}]", value),
                CellRole::Reading => format!("({})", value),
                CellRole::Plain => format!(" {} ", value),
            })
            .collect();

        vec![
            cells.join(" "),
            format!("Write Index: {}", self.write_index),
            format!("Read Index: {}", self.read_index),
        ]
    }
}
