// VideoGen Studio Controller — Generation Trigger
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Owns the shared state and the active run. `generate()` is the only way
// to start a run; `cancel()` and `Drop` stop pending completions.

use tracing::{info, warn};

use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::state::{lock_state, SharedState, StudioSnapshot, StudioState};
use crate::studio::dropzone::{DropReport, DroppedFile};
use crate::studio::input::InputTab;
use crate::studio::schedule::{spawn_run, RunHandle, Schedule};
use crate::studio::selection::{VisualStyle, VoiceStyle};
use crate::studio::steps::default_pipeline;
use crate::studio::tracker::{ProgressTracker, RunId};

pub struct StudioController {
    state: SharedState,
    schedule: Schedule,
    runtime: tokio::runtime::Handle,
    active: Option<RunHandle>,
}

impl StudioController {
    /// Build a controller for the default pipeline. The schedule must
    /// carry exactly one offset per step.
    pub fn new(config: &StudioConfig, runtime: tokio::runtime::Handle) -> StudioResult<Self> {
        let tracker = ProgressTracker::new(default_pipeline(), config.start_mode)?;
        if tracker.steps().len() != config.schedule.len() {
            return Err(StudioError::InvalidSchedule(format!(
                "{} offsets for {} steps",
                config.schedule.len(),
                tracker.steps().len()
            )));
        }

        Ok(Self {
            state: StudioState::new(tracker).into_shared(),
            schedule: config.schedule.clone(),
            runtime,
            active: None,
        })
    }

    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    pub fn snapshot(&self) -> StudioSnapshot {
        lock_state(&self.state).snapshot()
    }

    pub fn is_running(&self) -> bool {
        lock_state(&self.state).tracker.is_running()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Start a run and arm its completion timers.
    pub fn generate(&mut self) -> StudioResult<RunId> {
        let run_id = lock_state(&self.state).tracker.start()?;

        if let Some(previous) = self.active.take() {
            // Previous run already ended in the tracker; make sure its driver is gone.
            previous.cancel();
        }

        info!(
            "[STUDIO] 🎬 Generation run #{} scheduled over {:?}",
            run_id,
            self.schedule.total()
        );
        self.active = Some(spawn_run(
            &self.runtime,
            self.state.clone(),
            run_id,
            self.schedule.clone(),
        ));
        Ok(run_id)
    }

    /// Stop the active run. Returns `false` when nothing was running.
    pub fn cancel(&mut self) -> bool {
        let Some(handle) = self.active.take() else {
            return false;
        };
        let stopped = match lock_state(&self.state).tracker.cancel(handle.run_id()) {
            Ok(stopped) => stopped,
            Err(StudioError::NotRunning) => false,
            Err(e) => {
                warn!("[STUDIO] Cancel failed: {}", e);
                false
            }
        };
        handle.cancel();
        stopped
    }

    /// Report that an external collaborator failed on `step_id`. The run
    /// ends and every remaining completion is cancelled.
    pub fn fail_step(&mut self, step_id: &str, reason: &str) -> StudioResult<()> {
        {
            let mut state = lock_state(&self.state);
            let index = state
                .tracker
                .step_index(step_id)
                .ok_or_else(|| StudioError::UnknownStep(step_id.to_string()))?;
            let run_id = state.tracker.run_id();
            state.tracker.fail(run_id, index, reason)?;
        }
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
        Ok(())
    }

    /// Wait for the active run's driver to exit (completion or cancellation).
    pub async fn wait(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.join().await;
        }
    }

    pub fn set_script(&self, text: &str) -> StudioResult<()> {
        lock_state(&self.state).set_script(text)
    }

    pub fn set_tab(&self, tab: InputTab) {
        lock_state(&self.state).set_tab(tab);
    }

    pub fn select_voice(&self, style: VoiceStyle) -> StudioResult<bool> {
        lock_state(&self.state).select_voice(style)
    }

    pub fn select_visual(&self, style: VisualStyle) -> StudioResult<bool> {
        lock_state(&self.state).select_visual(style)
    }

    pub fn drop_files(&self, files: Vec<DroppedFile>) -> StudioResult<DropReport> {
        lock_state(&self.state).drop_files(files)
    }
}

impl Drop for StudioController {
    fn drop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
    }
}
