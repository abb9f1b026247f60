//! Linear stage walkthroughs (pipelines, request flows, topic tours)
//!
//! A flow is authored once as a list of stages. Each frame of its
//! walkthrough only records which stage is active; the status of every
//! other stage is derived from that.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::view::FrameView;

/// One stage of a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Stage {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Commands or bullet points shown while the stage is active
    pub commands: &'static [&'static str],
    pub snippet: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StageFlow {
    pub title: &'static str,
    pub stages: &'static [Stage],
}

impl StageFlow {
    /// Position of the stage with `id` within the flow
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.stages.iter().position(|stage| stage.id == id)
    }

    /// Walkthrough frame that shows stage `id` as active.
    ///
    /// Frame 0 of a walkthrough has no active stage, so this is
    /// `index_of(id) + 1`. Use it as a seek target when a stage is picked
    /// directly.
    pub fn frame_index_of(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|index| index + 1)
    }
}

/// Builds the frames `[none active, stage 0 active, .., last stage active]`
pub fn stage_walkthrough(flow: &'static StageFlow) -> Vec<StageFlowFrame> {
    std::iter::once(None)
        .chain((0..flow.stages.len()).map(Some))
        .map(|active| StageFlowFrame { flow, active })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Idle,
    Active,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageFlowFrame {
    pub flow: &'static StageFlow,
    pub active: Option<usize>,
}

impl StageFlowFrame {
    pub fn status_of(&self, index: usize) -> StageStatus {
        match self.active {
            Some(active) if index < active => StageStatus::Complete,
            Some(active) if index == active => StageStatus::Active,
            _ => StageStatus::Idle,
        }
    }

    pub fn active_stage(&self) -> Option<&'static Stage> {
        let stages = self.flow.stages;
        self.active.and_then(|index| stages.get(index))
    }

    pub fn statuses(&self) -> Vec<StageStatus> {
        (0..self.flow.stages.len())
            .map(|index| self.status_of(index))
            .collect()
    }
}

// The flow itself is shared by every frame, so only the derived view is written out
impl Serialize for StageFlowFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StageFlowFrame", 3)?;
        state.serialize_field("title", self.flow.title)?;
        state.serialize_field("active", &self.active_stage().map(|stage| stage.id))?;
        state.serialize_field("statuses", &self.statuses())?;
        state.end()
    }
}

impl FrameView for StageFlowFrame {
    fn caption(&self) -> &str {
        match self.active_stage() {
            Some(stage) => stage.description,
            None => "Select a stage to view its commands.",
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.flow.title.to_string()];
        for (index, stage) in self.flow.stages.iter().enumerate() {
            let marker = match self.status_of(index) {
                StageStatus::Complete => "[x]",
                StageStatus::Active => "[>]",
                StageStatus::Idle => "[ ]",
            };
            lines.push(format!("{} {}", marker, stage.name));
        }

        if let Some(stage) = self.active_stage() {
            lines.push(String::new());
            lines.push(format!("{}:", stage.name));
            lines.extend(stage.commands.iter().map(|command| format!("  - {}", command)));
            if let Some(snippet) = stage.snippet {
                lines.push(String::new());
                lines.extend(snippet.lines().map(|line| format!("    {}", line)));
            }
        }
        lines
    }
}
