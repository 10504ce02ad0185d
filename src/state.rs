// VideoGen Studio State
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// The single owner of all mutable UI state. The GUI and the run driver
// both go through `SharedState`; every mutation is a named operation.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::error::{StudioError, StudioResult};
use crate::studio::dropzone::{AcceptedFile, DropReport, DropZone, DroppedFile};
use crate::studio::input::{InputPanel, InputTab};
use crate::studio::metadata::VideoMetadata;
use crate::studio::selection::{VisualStyle, VoiceStyle};
use crate::studio::steps::GenerationStep;
use crate::studio::tracker::{ProgressTracker, RunId, RunOutcome, StartMode};

pub type SharedState = Arc<Mutex<StudioState>>;

/// Lock the shared state, recovering the data if a holder panicked.
pub fn lock_state(state: &SharedState) -> MutexGuard<'_, StudioState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, Default)]
pub struct StudioState {
    pub tracker: ProgressTracker,
    pub input: InputPanel,
    pub drop_zone: DropZone,
    pub metadata: VideoMetadata,
}

impl StudioState {
    pub fn new(tracker: ProgressTracker) -> Self {
        Self {
            tracker,
            ..Default::default()
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    /// Input controls are disabled for the duration of a run.
    pub fn input_locked(&self) -> bool {
        self.tracker.is_running()
    }

    fn ensure_unlocked(&self) -> StudioResult<()> {
        if self.input_locked() {
            return Err(StudioError::InputLocked);
        }
        Ok(())
    }

    pub fn set_script(&mut self, text: &str) -> StudioResult<()> {
        self.ensure_unlocked()?;
        self.input.script_text = text.to_string();
        Ok(())
    }

    /// Tabs only change what is shown, so they stay usable during a run.
    pub fn set_tab(&mut self, tab: InputTab) {
        self.input.active_tab = tab;
    }

    pub fn select_voice(&mut self, style: VoiceStyle) -> StudioResult<bool> {
        self.ensure_unlocked()?;
        let changed = self.input.voice.select(style);
        if changed {
            debug!("[STUDIO] Voice style -> {:?}", style);
        }
        Ok(changed)
    }

    pub fn select_visual(&mut self, style: VisualStyle) -> StudioResult<bool> {
        self.ensure_unlocked()?;
        let changed = self.input.visual.select(style);
        if changed {
            debug!("[STUDIO] Visual style -> {:?}", style);
        }
        Ok(changed)
    }

    pub fn drop_files(&mut self, files: Vec<DroppedFile>) -> StudioResult<DropReport> {
        self.ensure_unlocked()?;
        Ok(self.drop_zone.on_drop(files))
    }

    /// One-line status for the generate button and status bar.
    pub fn status_line(&self) -> String {
        if self.tracker.is_running() {
            return "Generating...".to_string();
        }
        match self.tracker.outcome() {
            None => "Ready".to_string(),
            Some(RunOutcome::Completed) => "✅ Generation complete".to_string(),
            Some(RunOutcome::Cancelled) => "⏹ Generation cancelled".to_string(),
            Some(RunOutcome::Failed { step_id, reason }) => {
                format!("❌ Step '{}' failed: {}", step_id, reason)
            }
        }
    }

    pub fn snapshot(&self) -> StudioSnapshot {
        StudioSnapshot {
            run_id: self.tracker.run_id(),
            running: self.tracker.is_running(),
            mode: self.tracker.mode(),
            steps: self.tracker.steps().to_vec(),
            outcome: self.tracker.outcome().cloned(),
            voice: self.input.voice.selected(),
            visual: self.input.visual.selected(),
            script_chars: self.input.script_text.chars().count(),
            accepted_files: self.drop_zone.accepted().to_vec(),
        }
    }
}

/// Read-only copy of the state, printed by `simulate --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioSnapshot {
    pub run_id: RunId,
    pub running: bool,
    pub mode: StartMode,
    pub steps: Vec<GenerationStep>,
    pub outcome: Option<RunOutcome>,
    pub voice: VoiceStyle,
    pub visual: VisualStyle,
    pub script_chars: usize,
    pub accepted_files: Vec<AcceptedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_locked_during_run() {
        let mut state = StudioState::default();
        state.set_script("How volcanoes work").unwrap();
        state.tracker.start().unwrap();

        assert!(state.input_locked());
        assert_eq!(state.set_script("changed"), Err(StudioError::InputLocked));
        assert_eq!(state.select_voice(VoiceStyle::Dramatic), Err(StudioError::InputLocked));
        assert!(state.drop_files(vec![DroppedFile::named("a.mp4")]).is_err());
        assert_eq!(state.input.script_text, "How volcanoes work");

        state.set_tab(InputTab::Style);
        assert_eq!(state.input.active_tab, InputTab::Style);
    }

    #[test]
    fn test_unlocked_after_run() {
        let mut state = StudioState::default();
        let run = state.tracker.start().unwrap();
        for i in 0..state.tracker.steps().len() {
            state.tracker.complete(run, i).unwrap();
        }
        assert!(!state.input_locked());
        assert_eq!(state.select_visual(VisualStyle::Minimal), Ok(true));
        assert_eq!(state.status_line(), "✅ Generation complete");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = StudioState::default();
        state.drop_files(vec![DroppedFile::named("clip.mp4")]).unwrap();
        let json = serde_json::to_value(state.snapshot()).unwrap();

        assert_eq!(json["voice"], "natural");
        assert_eq!(json["visual"], "modern");
        assert_eq!(json["steps"][0]["status"]["state"], "pending");
        assert_eq!(json["accepted_files"][0]["kind"], "video");
    }
}
