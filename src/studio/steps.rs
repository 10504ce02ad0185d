// VideoGen Generation Steps
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// The ordered stages of the simulated pipeline. A step's status only
// moves forward inside a run: Pending -> Processing -> Completed/Failed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StudioError;

/// Tri-state status of a step, plus a terminal failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Processing,
    Completed,
    Failed(String),
}

impl StepStatus {
    fn rank(&self) -> u8 {
        match self {
            StepStatus::Pending => 0,
            StepStatus::Processing => 1,
            StepStatus::Completed | StepStatus::Failed(_) => 2,
        }
    }

    /// Completed and Failed are terminal for the current run.
    pub fn is_terminal(&self) -> bool {
        self.rank() == 2
    }

    /// Forward-only transition rule. Skipping `Processing` is allowed
    /// (a pending step may complete or fail directly).
    pub fn can_advance_to(&self, next: &StepStatus) -> bool {
        !self.is_terminal() && next.rank() > self.rank()
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Processing => "processing",
            StepStatus::Completed => "completed",
            StepStatus::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Failed(reason) => write!(f, "failed ({})", reason),
            other => f.write_str(other.label()),
        }
    }
}

/// Presentation token for the step's idle icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIcon {
    Wand,
    Mic,
    Image,
    Film,
}

impl StepIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::Wand => "🪄",
            StepIcon::Mic => "🎤",
            StepIcon::Image => "🖼",
            StepIcon::Film => "🎞",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStep {
    pub id: String,
    pub title: String,
    pub status: StepStatus,
    pub icon: StepIcon,
}

impl GenerationStep {
    pub fn new(id: &str, title: &str, icon: StepIcon) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            status: StepStatus::Pending,
            icon,
        }
    }

    /// Move to `next`, refusing any regression or re-entry of a terminal state.
    pub fn advance(&mut self, next: StepStatus) -> Result<(), StudioError> {
        if !self.status.can_advance_to(&next) {
            return Err(StudioError::InvalidTransition {
                step_id: self.id.clone(),
                from: self.status.label(),
                to: next.label(),
            });
        }
        self.status = next;
        Ok(())
    }
}

/// The four stages shown in the progress panel, in order.
pub fn default_pipeline() -> Vec<GenerationStep> {
    vec![
        GenerationStep::new("script", "Generating Script", StepIcon::Wand),
        GenerationStep::new("voice", "Creating Voiceover", StepIcon::Mic),
        GenerationStep::new("visuals", "Generating Visuals", StepIcon::Image),
        GenerationStep::new("video", "Composing Video", StepIcon::Film),
    ]
}
