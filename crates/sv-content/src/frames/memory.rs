//! Memory areas lit up by program stages

use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MemorySection {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

impl MemorySection {
    /// Description followed by one bullet per detail
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}: {}", self.name, self.description)];
        lines.extend(self.details.iter().map(|detail| format!("  - {}", detail)));
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MemoryStage {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub commands: &'static [&'static str],
    /// Ids of the sections this stage touches
    pub active_sections: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MemoryLayout {
    pub title: &'static str,
    pub sections: &'static [MemorySection],
    pub stages: &'static [MemoryStage],
}

impl MemoryLayout {
    pub fn section(&self, id: &str) -> Option<&'static MemorySection> {
        let sections = self.sections;
        sections.iter().find(|section| section.id == id)
    }
}

/// Frames `[no stage, stage 0, .., last stage]` over a layout
pub fn memory_walkthrough(layout: &'static MemoryLayout) -> Vec<MemoryFlowFrame> {
    std::iter::once(None)
        .chain((0..layout.stages.len()).map(Some))
        .map(|stage| MemoryFlowFrame { layout, stage })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryFlowFrame {
    pub layout: &'static MemoryLayout,
    pub stage: Option<usize>,
}

impl MemoryFlowFrame {
    pub fn active_stage(&self) -> Option<&'static MemoryStage> {
        let stages = self.layout.stages;
        self.stage.and_then(|index| stages.get(index))
    }

    pub fn is_section_active(&self, id: &str) -> bool {
        self.active_stage()
            .is_some_and(|stage| stage.active_sections.iter().any(|section| *section == id))
    }
}

impl Serialize for MemoryFlowFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let active: Vec<&str> = self
            .layout
            .sections
            .iter()
            .filter(|section| self.is_section_active(section.id))
            .map(|section| section.id)
            .collect();

        let mut state = serializer.serialize_struct("MemoryFlowFrame", 3)?;
        state.serialize_field("title", self.layout.title)?;
        state.serialize_field("stage", &self.active_stage().map(|stage| stage.id))?;
        state.serialize_field("active_sections", &active)?;
        state.end()
    }
}

impl crate::FrameView for MemoryFlowFrame {
    fn caption(&self) -> &str {
        match self.active_stage() {
            Some(stage) => stage.description,
            None => "Select a stage to see which memory areas it uses.",
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .layout
            .sections
            .iter()
            .map(|section| {
                let marker = if self.is_section_active(section.id) { "*" } else { " " };
                format!("[{}] {}", marker, section.name)
            })
            .collect();

        if let Some(stage) = self.active_stage() {
            lines.push(String::new());
            lines.push(format!("{}:", stage.name));
            lines.extend(stage.commands.iter().map(|command| format!("  > {}", command)));
        }
        lines
    }
}
