// VideoGen Progress Tracker
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Pure state machine behind the "Generation Progress" panel. Holds the
// fixed, ordered step list and applies run transitions. Timing lives in
// `schedule`; this type never sleeps.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StudioError, StudioResult};
use crate::studio::steps::{default_pipeline, GenerationStep, StepStatus};

/// Identifies one run. Events tagged with an older id are ignored.
pub type RunId = u64;

/// How `start()` seeds step statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartMode {
    /// Every step is marked processing at once.
    #[default]
    AllProcessing,
    /// Only the first step is processing; each completion hands off to the next.
    Cascade,
}

impl std::str::FromStr for StartMode {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all_processing" | "all-processing" => Ok(StartMode::AllProcessing),
            "cascade" => Ok(StartMode::Cascade),
            other => Err(StudioError::Config(format!(
                "unknown start mode '{}' (expected 'all' or 'cascade')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Failed { step_id: String, reason: String },
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    steps: Vec<GenerationStep>,
    mode: StartMode,
    running: bool,
    run_id: RunId,
    outcome: Option<RunOutcome>,
}

impl ProgressTracker {
    pub fn new(steps: Vec<GenerationStep>, mode: StartMode) -> StudioResult<Self> {
        if steps.is_empty() {
            return Err(StudioError::InvalidSchedule(
                "a tracker needs at least one step".to_string(),
            ));
        }
        for (i, step) in steps.iter().enumerate() {
            if steps[..i].iter().any(|s| s.id == step.id) {
                return Err(StudioError::InvalidSchedule(format!(
                    "duplicate step id '{}'",
                    step.id
                )));
            }
        }
        Ok(Self {
            steps,
            mode,
            running: false,
            run_id: 0,
            outcome: None,
        })
    }

    pub fn with_default_pipeline(mode: StartMode) -> Self {
        Self {
            steps: default_pipeline(),
            mode,
            running: false,
            run_id: 0,
            outcome: None,
        }
    }

    pub fn steps(&self) -> &[GenerationStep] {
        &self.steps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn mode(&self) -> StartMode {
        self.mode
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Begin a new run. The previous run's statuses are discarded here and
    /// nowhere else, so monotonicity holds per run.
    pub fn start(&mut self) -> StudioResult<RunId> {
        if self.running {
            warn!("[TRACKER] Start ignored: run #{} still active", self.run_id);
            return Err(StudioError::AlreadyRunning);
        }

        self.run_id += 1;
        self.outcome = None;
        self.running = true;

        for (i, step) in self.steps.iter_mut().enumerate() {
            step.status = match self.mode {
                StartMode::AllProcessing => StepStatus::Processing,
                StartMode::Cascade if i == 0 => StepStatus::Processing,
                StartMode::Cascade => StepStatus::Pending,
            };
        }

        info!(
            "[TRACKER] ▶ Run #{} started ({} steps, {:?})",
            self.run_id,
            self.steps.len(),
            self.mode
        );
        Ok(self.run_id)
    }

    /// Apply the completion event for step `index` of run `run`.
    ///
    /// Returns `Ok(false)` when the event belongs to an older run.
    pub fn complete(&mut self, run: RunId, index: usize) -> StudioResult<bool> {
        if !self.accepts(run)? {
            return Ok(false);
        }
        let last = self.steps.len() - 1;
        let step = self
            .steps
            .get_mut(index)
            .ok_or_else(|| StudioError::UnknownStep(index.to_string()))?;
        step.advance(StepStatus::Completed)?;
        info!("[TRACKER] ✅ {} completed (run #{})", step.title, run);

        if self.mode == StartMode::Cascade {
            if let Some(next) = self.steps.get_mut(index + 1) {
                if next.status == StepStatus::Pending {
                    next.advance(StepStatus::Processing)?;
                    debug!("[TRACKER] {} now processing", next.title);
                }
            }
        }

        if index == last {
            self.running = false;
            self.outcome = Some(RunOutcome::Completed);
            info!("[TRACKER] 🏁 Run #{} finished", run);
        }
        Ok(true)
    }

    /// Mark step `index` failed and end the run.
    pub fn fail(&mut self, run: RunId, index: usize, reason: &str) -> StudioResult<bool> {
        if !self.accepts(run)? {
            return Ok(false);
        }
        let step = self
            .steps
            .get_mut(index)
            .ok_or_else(|| StudioError::UnknownStep(index.to_string()))?;
        step.advance(StepStatus::Failed(reason.to_string()))?;

        warn!("[TRACKER] ❌ {} failed (run #{}): {}", step.title, run, reason);
        self.running = false;
        self.outcome = Some(RunOutcome::Failed {
            step_id: step.id.clone(),
            reason: reason.to_string(),
        });
        Ok(true)
    }

    /// End the current run without touching step statuses.
    pub fn cancel(&mut self, run: RunId) -> StudioResult<bool> {
        if !self.accepts(run)? {
            return Ok(false);
        }
        self.running = false;
        self.outcome = Some(RunOutcome::Cancelled);
        info!("[TRACKER] ⏹ Run #{} cancelled", run);
        Ok(true)
    }

    fn accepts(&self, run: RunId) -> StudioResult<bool> {
        if run != self.run_id {
            debug!(
                "[TRACKER] Dropping stale event for run #{} (current #{})",
                run, self.run_id
            );
            return Ok(false);
        }
        if !self.running {
            return Err(StudioError::NotRunning);
        }
        Ok(true)
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::with_default_pipeline(StartMode::default())
    }
}
