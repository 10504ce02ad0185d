// VideoGen Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI

use videogen_core::config::StudioConfig;
use videogen_core::studio::dropzone::{DropZone, DroppedFile};
use videogen_core::studio::selection::{VisualStyle, VoiceStyle};
use videogen_core::studio::tracker::StartMode;
use videogen_core::studio::StudioController;
use videogen_core::window;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "videogen")]
#[command(about = "VideoGen AI Studio", long_about = None)]
struct Cli {
    /// Step completion offsets in ms, comma-separated (overrides VIDEOGEN_STEP_OFFSETS_MS)
    #[arg(long, global = true)]
    offsets: Option<String>,

    /// How a run seeds step statuses: all | cascade (overrides VIDEOGEN_START_MODE)
    #[arg(long, global = true)]
    mode: Option<StartMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the studio window (default)
    Gui,

    /// Run one generation headless and log every transition
    Simulate {
        /// Script text to attach to the run
        #[arg(short, long, default_value = "")]
        script: String,

        /// Voice style: natural, professional, friendly, dramatic
        #[arg(long, default_value = "natural")]
        voice: VoiceStyle,

        /// Visual style: modern, minimal, bold, creative
        #[arg(long, default_value = "modern")]
        visual: VisualStyle,

        /// Print a JSON snapshot on every change
        #[arg(long)]
        json: bool,

        /// Inject a failure into this step id
        #[arg(long)]
        fail_step: Option<String>,

        /// Delay before the injected failure fires
        #[arg(long, default_value_t = 3000)]
        fail_after_ms: u64,
    },

    /// Run the media drop filter over files
    CheckDrop {
        /// Files to screen
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Keep the windowing stack quiet unless the user asks for it.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,wgpu_core=error,wgpu_hal=error,naga=error,winit=error,eframe=warn");
    }
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("🚨 [VIDEOGEN PANIC] at {}: {}", location, message);
    }));

    let args = Cli::parse();
    let config = StudioConfig::from_env()
        .and_then(|c| c.with_overrides(args.offsets.as_deref(), args.mode))
        .context("loading studio configuration")?;

    info!(
        "--- VIDEOGEN AI STUDIO v{} ({:?}, {:?}) ---",
        env!("CARGO_PKG_VERSION"),
        config.start_mode,
        config.schedule.offsets()
    );

    match args.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            let controller = StudioController::new(&config, tokio::runtime::Handle::current())?;
            let res = tokio::task::block_in_place(|| window::run_gui(controller));
            if let Err(e) = res {
                error!("GUI Error: {}", e);
            }
            info!("🛑 Window closed.");
        }
        Commands::Simulate {
            script,
            voice,
            visual,
            json,
            fail_step,
            fail_after_ms,
        } => {
            simulate(&config, &script, voice, visual, json, fail_step, fail_after_ms).await?;
        }
        Commands::CheckDrop { files } => {
            let mut zone = DropZone::default();
            let report = zone.on_drop(files.iter().map(|p| DroppedFile::from_path(p)));
            for name in &report.accepted {
                println!("✅ accepted  {}", name);
            }
            for name in &report.rejected {
                println!("❌ rejected  {}", name);
            }
        }
    }

    Ok(())
}

async fn simulate(
    config: &StudioConfig,
    script: &str,
    voice: VoiceStyle,
    visual: VisualStyle,
    json: bool,
    fail_step: Option<String>,
    fail_after_ms: u64,
) -> anyhow::Result<()> {
    let mut controller = StudioController::new(config, tokio::runtime::Handle::current())?;
    controller.set_script(script)?;
    controller.select_voice(voice)?;
    controller.select_visual(visual)?;

    let started = tokio::time::Instant::now();
    controller.generate()?;

    let mut fail_step = fail_step;
    let mut last = None;
    let mut ticker = tokio::time::interval(Duration::from_millis(50));
    loop {
        ticker.tick().await;

        if let Some(step) = fail_step.as_deref() {
            if controller.is_running() && started.elapsed() >= Duration::from_millis(fail_after_ms) {
                controller.fail_step(step, "injected failure")?;
                fail_step = None;
            }
        }

        let snapshot = controller.snapshot();
        if last.as_ref() != Some(&snapshot) {
            if json {
                println!("{}", serde_json::to_string(&snapshot)?);
            } else {
                let line: Vec<String> = snapshot
                    .steps
                    .iter()
                    .map(|s| format!("{}={}", s.id, s.status))
                    .collect();
                info!("[SIMULATE] {:>6}ms  {}", started.elapsed().as_millis(), line.join("  "));
            }
            last = Some(snapshot);
        }

        if !controller.is_running() {
            break;
        }
    }

    controller.wait().await;
    if let Some(outcome) = last.and_then(|s| s.outcome) {
        info!("[SIMULATE] Outcome: {:?}", outcome);
    }
    Ok(())
}
