// VideoGen Run Schedule — Deferred Step Completion
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// One driver task per run. It sleeps until each step's offset, in step
// order, and applies the completion through the shared state. Equal
// offsets therefore still complete in step order.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{StudioError, StudioResult};
use crate::state::{lock_state, SharedState};
use crate::studio::tracker::RunId;

/// Default completion offsets for the four pipeline steps.
pub const DEFAULT_OFFSETS_MS: [u64; 4] = [2000, 4000, 6000, 8000];

/// Completion offsets measured from `start()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    offsets: Vec<Duration>,
}

impl Schedule {
    pub fn new(offsets: Vec<Duration>) -> StudioResult<Self> {
        if offsets.is_empty() {
            return Err(StudioError::InvalidSchedule("no offsets given".to_string()));
        }
        if let Some(w) = offsets.windows(2).find(|w| w[1] < w[0]) {
            return Err(StudioError::InvalidSchedule(format!(
                "offsets must be nondecreasing ({:?} after {:?})",
                w[1], w[0]
            )));
        }
        Ok(Self { offsets })
    }

    pub fn from_millis(offsets: &[u64]) -> StudioResult<Self> {
        Self::new(offsets.iter().copied().map(Duration::from_millis).collect())
    }

    /// Parse a comma-separated list of milliseconds, e.g. `2000,4000`.
    pub fn parse(raw: &str) -> StudioResult<Self> {
        let offsets = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u64>().map_err(|e| {
                    StudioError::InvalidSchedule(format!("bad offset '{}': {}", s, e))
                })
            })
            .collect::<StudioResult<Vec<_>>>()?;
        Self::from_millis(&offsets)
    }

    pub fn offsets(&self) -> &[Duration] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn total(&self) -> Duration {
        self.offsets.last().copied().unwrap_or_default()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            offsets: DEFAULT_OFFSETS_MS
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
        }
    }
}

/// Handle to a spawned run. Dropping it does not stop the run; call
/// `cancel()` (or let the controller's teardown do it).
#[derive(Debug)]
pub struct RunHandle {
    run_id: RunId,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl RunHandle {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the driver task to exit.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            warn!("[SCHEDULE] Driver for run #{} ended abnormally: {}", self.run_id, e);
        }
    }
}

/// Spawn the driver for `run_id` on `runtime`.
pub fn spawn_run(
    runtime: &tokio::runtime::Handle,
    state: SharedState,
    run_id: RunId,
    schedule: Schedule,
) -> RunHandle {
    let token = CancellationToken::new();
    let started = Instant::now();
    let task = runtime.spawn(drive(state, run_id, schedule, started, token.clone()));
    RunHandle {
        run_id,
        token,
        task,
    }
}

async fn drive(
    state: SharedState,
    run_id: RunId,
    schedule: Schedule,
    started: Instant,
    token: CancellationToken,
) {
    debug!("[SCHEDULE] Run #{} driver armed ({:?} total)", run_id, schedule.total());

    for (index, offset) in schedule.offsets.iter().enumerate() {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("[SCHEDULE] Run #{} cancelled before step {}", run_id, index);
                return;
            }
            _ = sleep_until(started + *offset) => {}
        }

        let applied = lock_state(&state).tracker.complete(run_id, index);
        match applied {
            Ok(true) => {}
            Ok(false) | Err(StudioError::NotRunning) => {
                debug!("[SCHEDULE] Run #{} no longer current; driver exiting", run_id);
                return;
            }
            Err(e) => {
                warn!("[SCHEDULE] Run #{} step {} rejected: {}", run_id, index, e);
                return;
            }
        }
    }
}
