use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};
use videogen_core::config::StudioConfig;
use videogen_core::error::StudioError;
use videogen_core::state::lock_state;
use videogen_core::studio::schedule::Schedule;
use videogen_core::studio::steps::StepStatus;
use videogen_core::studio::tracker::{RunOutcome, StartMode};
use videogen_core::studio::StudioController;

fn controller(mode: StartMode, offsets: &[u64]) -> StudioController {
    let config = StudioConfig {
        schedule: Schedule::from_millis(offsets).unwrap(),
        start_mode: mode,
    };
    StudioController::new(&config, Handle::current()).unwrap()
}

fn statuses(controller: &StudioController) -> Vec<StepStatus> {
    controller
        .snapshot()
        .steps
        .into_iter()
        .map(|s| s.status)
        .collect()
}

fn rank(status: &StepStatus) -> u8 {
    match status {
        StepStatus::Pending => 0,
        StepStatus::Processing => 1,
        StepStatus::Completed | StepStatus::Failed(_) => 2,
    }
}

async fn at(t0: Instant, ms: u64) {
    sleep_until(t0 + Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_reference_schedule() {
    let mut studio = controller(StartMode::AllProcessing, &[2000, 4000, 6000, 8000]);
    let t0 = Instant::now();
    studio.generate().unwrap();
    assert!(studio.is_running());

    at(t0, 2001).await;
    assert_eq!(
        statuses(&studio),
        vec![
            StepStatus::Completed,
            StepStatus::Processing,
            StepStatus::Processing,
            StepStatus::Processing
        ]
    );
    assert!(studio.is_running());

    at(t0, 8001).await;
    assert!(statuses(&studio).iter().all(|s| *s == StepStatus::Completed));
    assert!(!studio.is_running());
    assert_eq!(studio.snapshot().outcome, Some(RunOutcome::Completed));

    studio.wait().await;
}

#[tokio::test(start_paused = true)]
async fn test_running_flag_flips_with_last_step() {
    let mut studio = controller(StartMode::AllProcessing, &[2000, 4000, 6000, 8000]);
    let t0 = Instant::now();
    studio.generate().unwrap();

    at(t0, 7999).await;
    assert!(studio.is_running());
    assert_eq!(statuses(&studio)[3], StepStatus::Processing);

    at(t0, 8001).await;
    assert!(!studio.is_running());
    assert_eq!(statuses(&studio)[3], StepStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_statuses_are_monotonic() {
    let mut studio = controller(StartMode::Cascade, &[2000, 4000, 6000, 8000]);
    let t0 = Instant::now();
    studio.generate().unwrap();

    let mut previous: Vec<u8> = statuses(&studio).iter().map(rank).collect();
    let mut running_flips = 0;
    let mut was_running = true;
    for ms in (250..=9000).step_by(250) {
        at(t0, ms).await;
        let current: Vec<u8> = statuses(&studio).iter().map(rank).collect();
        for (before, after) in previous.iter().zip(&current) {
            assert!(after >= before, "status regressed at {}ms", ms);
        }
        // step i never finishes after step i+1
        for pair in current.windows(2) {
            assert!(pair[0] >= pair[1], "out-of-order completion at {}ms", ms);
        }
        let running = studio.is_running();
        if was_running && !running {
            running_flips += 1;
        }
        was_running = running;
        previous = current;
    }
    assert_eq!(running_flips, 1);
}

#[tokio::test(start_paused = true)]
async fn test_cascade_mode() {
    let mut studio = controller(StartMode::Cascade, &[2000, 4000, 6000, 8000]);
    let t0 = Instant::now();
    studio.generate().unwrap();
    assert_eq!(
        statuses(&studio),
        vec![
            StepStatus::Processing,
            StepStatus::Pending,
            StepStatus::Pending,
            StepStatus::Pending
        ]
    );

    at(t0, 4001).await;
    assert_eq!(
        statuses(&studio),
        vec![
            StepStatus::Completed,
            StepStatus::Completed,
            StepStatus::Processing,
            StepStatus::Pending
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_equal_offsets_complete_in_order() {
    let mut studio = controller(StartMode::Cascade, &[500, 500, 500, 500]);
    let t0 = Instant::now();
    studio.generate().unwrap();

    at(t0, 501).await;
    assert!(statuses(&studio).iter().all(|s| *s == StepStatus::Completed));
    assert!(!studio.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_generate_while_running_is_refused() {
    let mut studio = controller(StartMode::AllProcessing, &[100, 200, 300, 400]);
    let first = studio.generate().unwrap();
    assert_eq!(studio.generate(), Err(StudioError::AlreadyRunning));
    assert_eq!(studio.snapshot().run_id, first);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_pending_completions() {
    let mut studio = controller(StartMode::AllProcessing, &[2000, 4000, 6000, 8000]);
    let t0 = Instant::now();
    studio.generate().unwrap();

    at(t0, 3000).await;
    assert!(studio.cancel());
    assert!(!studio.is_running());
    assert_eq!(studio.snapshot().outcome, Some(RunOutcome::Cancelled));

    at(t0, 10_000).await;
    assert_eq!(
        statuses(&studio),
        vec![
            StepStatus::Completed,
            StepStatus::Processing,
            StepStatus::Processing,
            StepStatus::Processing
        ]
    );
    assert!(!studio.cancel());
}

#[tokio::test(start_paused = true)]
async fn test_new_run_after_cancel() {
    let mut studio = controller(StartMode::AllProcessing, &[100, 200, 300, 400]);
    let t0 = Instant::now();
    studio.generate().unwrap();
    at(t0, 150).await;
    studio.cancel();

    let t1 = Instant::now();
    let second = studio.generate().unwrap();
    assert_eq!(second, 2);
    assert!(statuses(&studio).iter().all(|s| *s == StepStatus::Processing));

    at(t1, 401).await;
    assert_eq!(studio.snapshot().outcome, Some(RunOutcome::Completed));
}

#[tokio::test(start_paused = true)]
async fn test_failure_cancels_remaining_steps() {
    let mut studio = controller(StartMode::AllProcessing, &[2000, 4000, 6000, 8000]);
    let t0 = Instant::now();
    studio.generate().unwrap();

    at(t0, 2500).await;
    studio.fail_step("voice", "tts backend offline").unwrap();
    assert!(!studio.is_running());

    at(t0, 10_000).await;
    let snapshot = studio.snapshot();
    assert_eq!(
        snapshot.outcome,
        Some(RunOutcome::Failed {
            step_id: "voice".to_string(),
            reason: "tts backend offline".to_string(),
        })
    );
    assert_eq!(snapshot.steps[0].status, StepStatus::Completed);
    assert_eq!(
        snapshot.steps[1].status,
        StepStatus::Failed("tts backend offline".to_string())
    );
    assert_eq!(snapshot.steps[2].status, StepStatus::Processing);
    assert_eq!(snapshot.steps[3].status, StepStatus::Processing);
}

#[tokio::test(start_paused = true)]
async fn test_fail_unknown_step() {
    let mut studio = controller(StartMode::AllProcessing, &[100, 200, 300, 400]);
    studio.generate().unwrap();
    assert_eq!(
        studio.fail_step("music", "nope"),
        Err(StudioError::UnknownStep("music".to_string()))
    );
    assert!(studio.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_controller_stops_timers() {
    let mut studio = controller(StartMode::AllProcessing, &[2000, 4000, 6000, 8000]);
    let state = studio.state();
    let t0 = Instant::now();
    studio.generate().unwrap();

    at(t0, 2500).await;
    drop(studio);

    at(t0, 10_000).await;
    let guard = lock_state(&state);
    assert_eq!(guard.tracker.steps()[0].status, StepStatus::Completed);
    assert_eq!(guard.tracker.steps()[3].status, StepStatus::Processing);
}

#[tokio::test]
async fn test_schedule_must_match_steps() {
    let config = StudioConfig {
        schedule: Schedule::from_millis(&[100, 200]).unwrap(),
        start_mode: StartMode::AllProcessing,
    };
    assert!(matches!(
        StudioController::new(&config, Handle::current()),
        Err(StudioError::InvalidSchedule(_))
    ));
}
