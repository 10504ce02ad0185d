use tokio::runtime::Handle;
use videogen_core::config::StudioConfig;
use videogen_core::error::StudioError;
use videogen_core::studio::dropzone::{DroppedFile, MediaKind};
use videogen_core::studio::input::InputTab;
use videogen_core::studio::selection::{StyleOption, VisualStyle, VoiceStyle};
use videogen_core::studio::StudioController;

fn studio() -> StudioController {
    StudioController::new(&StudioConfig::default(), Handle::current()).unwrap()
}

#[tokio::test]
async fn test_voice_selection_is_exclusive() {
    let studio = studio();
    for style in VoiceStyle::ALL {
        studio.select_voice(*style).unwrap();
        assert_eq!(studio.snapshot().voice, *style);
    }
}

#[tokio::test]
async fn test_visual_reselect_is_idempotent() {
    let studio = studio();
    assert_eq!(studio.select_visual(VisualStyle::Creative), Ok(true));
    let before = studio.snapshot();

    assert_eq!(studio.select_visual(VisualStyle::Creative), Ok(false));
    assert_eq!(studio.snapshot(), before);
}

#[tokio::test]
async fn test_drop_filter_scenario() {
    let studio = studio();
    let report = studio
        .drop_files(vec![
            DroppedFile::named("clip.mp4"),
            DroppedFile::named("clip.txt"),
        ])
        .unwrap();
    assert_eq!(report.rejected, vec!["clip.txt"]);

    let accepted = studio.snapshot().accepted_files;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].file.name, "clip.mp4");
    assert_eq!(accepted[0].kind, MediaKind::Video);
}

#[tokio::test(start_paused = true)]
async fn test_inputs_locked_while_generating() {
    let mut studio = studio();
    studio.set_script("Top 5 facts about octopuses").unwrap();
    studio.generate().unwrap();

    assert_eq!(studio.set_script("other"), Err(StudioError::InputLocked));
    assert_eq!(
        studio.select_voice(VoiceStyle::Friendly),
        Err(StudioError::InputLocked)
    );
    assert_eq!(studio.snapshot().voice, VoiceStyle::Natural);

    // switching tabs only changes the view
    studio.set_tab(InputTab::Voice);

    studio.wait().await;
    assert!(!studio.is_running());
    assert_eq!(studio.select_voice(VoiceStyle::Friendly), Ok(true));
    assert_eq!(studio.snapshot().script_chars, "Top 5 facts about octopuses".len());
}
