// VideoGen Studio GUI
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Single-window layout: input tabs, generate button and progress on the
// left; preview and YouTube metadata on the right; feature cards below.

use eframe::egui;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::state::{lock_state, StudioState};
use crate::studio::dropzone::DroppedFile;
use crate::studio::input::{InputTab, SCRIPT_PLACEHOLDER};
use crate::studio::metadata::{DESCRIPTION_PLACEHOLDER, TAGS_PLACEHOLDER, TITLE_PLACEHOLDER};
use crate::studio::selection::{StyleOption, VisualStyle, VoiceStyle};
use crate::studio::showcase::{FEATURES, HERO_SUBTITLE, HERO_TITLE};
use crate::studio::steps::StepStatus;
use crate::studio::StudioController;

// --- Color Palette ---
const COLOR_BG: egui::Color32 = egui::Color32::from_rgb(245, 243, 255);
const COLOR_CARD: egui::Color32 = egui::Color32::WHITE;
const COLOR_INDIGO: egui::Color32 = egui::Color32::from_rgb(79, 70, 229);
const COLOR_INDIGO_SOFT: egui::Color32 = egui::Color32::from_rgb(224, 231, 255);
const COLOR_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const COLOR_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const COLOR_TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
const COLOR_TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

/// User intents collected while the state lock is held, applied after.
enum UiAction {
    Generate,
    Cancel,
    PickFiles,
    Drop(Vec<DroppedFile>),
}

pub struct VideoGenApp {
    controller: StudioController,
}

impl VideoGenApp {
    pub fn new(controller: StudioController) -> Self {
        Self { controller }
    }

    fn configure_style(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = COLOR_BG;
        visuals.window_fill = COLOR_CARD;
        visuals.selection.bg_fill = COLOR_INDIGO;
        visuals.widgets.active.bg_fill = COLOR_INDIGO;
        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        ctx.set_style(style);
    }

    fn apply(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Generate => {
                    if let Err(e) = self.controller.generate() {
                        warn!("[GUI] Generate refused: {}", e);
                    }
                }
                UiAction::Cancel => {
                    self.controller.cancel();
                }
                UiAction::PickFiles => {
                    let exts = lock_state(&self.controller.state()).drop_zone.filter().extensions();
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("Audio / Video", exts.as_slice())
                        .pick_files()
                    {
                        self.drop_paths(paths);
                    }
                }
                UiAction::Drop(files) => {
                    if let Err(e) = self.controller.drop_files(files) {
                        warn!("[GUI] Drop ignored: {}", e);
                    }
                }
            }
        }
    }

    fn drop_paths(&self, paths: Vec<PathBuf>) {
        let files = paths.iter().map(|p| DroppedFile::from_path(p)).collect();
        if let Err(e) = self.controller.drop_files(files) {
            warn!("[GUI] Drop ignored: {}", e);
        }
    }
}

fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(COLOR_CARD)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(18.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn render_input_tabs(ui: &mut egui::Ui, state: &mut StudioState, actions: &mut Vec<UiAction>) {
    let locked = state.input_locked();
    card(ui, |ui| {
        ui.horizontal(|ui| {
            for tab in InputTab::ALL {
                let selected = state.input.active_tab == tab;
                let color = if selected { COLOR_INDIGO } else { COLOR_TEXT_SECONDARY };
                let text = egui::RichText::new(tab.label()).strong().color(color);
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    state.set_tab(tab);
                }
            }
        });
        ui.separator();

        ui.add_enabled_ui(!locked, |ui| match state.input.active_tab {
            InputTab::Script => {
                ui.add(
                    egui::TextEdit::multiline(&mut state.input.script_text)
                        .hint_text(SCRIPT_PLACEHOLDER)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );

                let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
                let prompt = if hovering {
                    "Drop your files here"
                } else {
                    "⬆ Drag & drop files or click to upload"
                };
                let zone = ui.add(
                    egui::Button::new(egui::RichText::new(prompt).color(COLOR_TEXT_SECONDARY))
                        .min_size(egui::vec2(ui.available_width(), 70.0)),
                );
                if zone.clicked() {
                    actions.push(UiAction::PickFiles);
                }

                let accepted = state.drop_zone.accepted();
                if !accepted.is_empty() {
                    ui.label(egui::RichText::new(format!("{} file(s) attached", accepted.len())).weak());
                    for file in accepted {
                        ui.label(egui::RichText::new(format!("• {} ({:?})", file.file.name, file.kind)).small());
                    }
                }
            }
            InputTab::Voice => {
                let mut choice = None;
                style_grid(ui, "voice_grid", |opt: VoiceStyle| state.input.voice.is_selected(opt), |opt| {
                    choice = Some(opt)
                });
                if let Some(opt) = choice {
                    let _ = state.select_voice(opt);
                }
            }
            InputTab::Style => {
                let mut choice = None;
                style_grid(ui, "visual_grid", |opt: VisualStyle| state.input.visual.is_selected(opt), |opt| {
                    choice = Some(opt)
                });
                if let Some(opt) = choice {
                    let _ = state.select_visual(opt);
                }
            }
        });
    });
}

/// Two-column grid of selectable options.
fn style_grid<T: StyleOption>(
    ui: &mut egui::Ui,
    id: &str,
    is_selected: impl Fn(T) -> bool,
    mut on_pick: impl FnMut(T),
) {
    egui::Grid::new(id).num_columns(2).spacing([12.0, 12.0]).show(ui, |ui| {
        for (i, opt) in T::ALL.iter().copied().enumerate() {
            let selected = is_selected(opt);
            let text = egui::RichText::new(opt.label()).strong();
            let button = egui::Button::new(text)
                .min_size(egui::vec2(160.0, 48.0))
                .fill(if selected { COLOR_INDIGO_SOFT } else { COLOR_CARD })
                .stroke(egui::Stroke::new(
                    1.0,
                    if selected { COLOR_INDIGO } else { egui::Color32::LIGHT_GRAY },
                ));
            if ui.add(button).clicked() {
                on_pick(opt);
            }
            if i % 2 == 1 {
                ui.end_row();
            }
        }
    });
}

fn render_progress(ui: &mut egui::Ui, state: &StudioState) {
    card(ui, |ui| {
        ui.label(egui::RichText::new("Generation Progress").size(18.0).strong());
        ui.add_space(6.0);
        for step in state.tracker.steps() {
            ui.horizontal(|ui| {
                let color = match &step.status {
                    StepStatus::Pending => {
                        ui.label(step.icon.glyph());
                        COLOR_TEXT_SECONDARY
                    }
                    StepStatus::Processing => {
                        ui.add(egui::Spinner::new().color(COLOR_INDIGO));
                        COLOR_INDIGO
                    }
                    StepStatus::Completed => {
                        ui.label(egui::RichText::new("✔").color(COLOR_GREEN));
                        COLOR_GREEN
                    }
                    StepStatus::Failed(_) => {
                        ui.label(egui::RichText::new("✖").color(COLOR_RED));
                        COLOR_RED
                    }
                };
                ui.label(egui::RichText::new(&step.title).strong().color(color));
                if let StepStatus::Failed(reason) = &step.status {
                    ui.label(egui::RichText::new(reason).small().color(COLOR_RED));
                }
            });
        }
    });
}

fn render_preview(ui: &mut egui::Ui, state: &mut StudioState) {
    card(ui, |ui| {
        ui.label(egui::RichText::new("▶ Preview").size(20.0).strong().color(COLOR_TEXT_PRIMARY));
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 8.0, egui::Color32::from_rgb(243, 244, 246));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Video preview will appear here",
            egui::FontId::proportional(14.0),
            COLOR_TEXT_SECONDARY,
        );
    });

    ui.add_space(12.0);
    card(ui, |ui| {
        ui.label(egui::RichText::new("YouTube Optimization").size(18.0).strong());
        ui.label("Title");
        ui.add(
            egui::TextEdit::singleline(&mut state.metadata.title)
                .hint_text(TITLE_PLACEHOLDER)
                .desired_width(f32::INFINITY),
        );
        ui.label("Description");
        ui.add(
            egui::TextEdit::multiline(&mut state.metadata.description)
                .hint_text(DESCRIPTION_PLACEHOLDER)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.label("Tags");
        ui.add(
            egui::TextEdit::singleline(&mut state.metadata.tags)
                .hint_text(TAGS_PLACEHOLDER)
                .desired_width(f32::INFINITY),
        );
    });
}

fn render_features(ui: &mut egui::Ui) {
    ui.add_space(30.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Powerful Features").size(26.0).strong());
    });
    ui.add_space(10.0);
    ui.columns(3, |columns| {
        for (i, feature) in FEATURES.iter().enumerate() {
            let col = &mut columns[i % 3];
            card(col, |ui| {
                ui.label(egui::RichText::new(feature.icon).size(26.0).color(COLOR_INDIGO));
                ui.label(egui::RichText::new(feature.title).size(17.0).strong());
                ui.label(egui::RichText::new(feature.description).color(COLOR_TEXT_SECONDARY));
            });
            col.add_space(12.0);
        }
    });
}

impl eframe::App for VideoGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.configure_style(ctx);
        let mut actions = Vec::new();

        let dropped: Vec<DroppedFile> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .map(|f| {
                    let mut file = match &f.path {
                        Some(path) => DroppedFile::from_path(path),
                        None => DroppedFile::named(&f.name),
                    };
                    if !f.mime.is_empty() {
                        file.mime = Some(f.mime.clone());
                    }
                    file
                })
                .collect()
        });
        if !dropped.is_empty() {
            actions.push(UiAction::Drop(dropped));
        }

        let shared = self.controller.state();
        let running = {
            let mut state = lock_state(&shared);
            let running = state.tracker.is_running();

            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🎥 VideoGen AI").size(24.0).strong().color(COLOR_INDIGO));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(state.status_line()).color(COLOR_TEXT_SECONDARY));
                    });
                });
                ui.add_space(6.0);
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(16.0);
                        ui.label(egui::RichText::new(HERO_TITLE).size(34.0).strong().color(COLOR_TEXT_PRIMARY));
                        ui.label(egui::RichText::new(HERO_SUBTITLE).size(17.0).color(COLOR_TEXT_SECONDARY));
                        ui.add_space(16.0);
                    });

                    ui.columns(2, |columns| {
                        render_input_tabs(&mut columns[0], &mut state, &mut actions);
                        columns[0].add_space(12.0);

                        let label = if running { "Generating..." } else { "Generate Video ›" };
                        let button = egui::Button::new(
                            egui::RichText::new(label).size(18.0).color(egui::Color32::WHITE),
                        )
                        .fill(COLOR_INDIGO)
                        .min_size(egui::vec2(columns[0].available_width(), 48.0));
                        if columns[0].add_enabled(!running, button).clicked() {
                            actions.push(UiAction::Generate);
                        }
                        if running && columns[0].button("⏹ Cancel").clicked() {
                            actions.push(UiAction::Cancel);
                        }
                        columns[0].add_space(12.0);
                        render_progress(&mut columns[0], &state);

                        render_preview(&mut columns[1], &mut state);
                    });

                    render_features(ui);
                });
            });
            running
        };

        self.apply(actions);

        if running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

pub fn run_gui(controller: StudioController) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("VideoGen AI")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    info!("[GUI] 🖥️ Opening VideoGen Studio window");
    let result = eframe::run_native(
        "VideoGen AI",
        options,
        Box::new(|_cc| Ok(Box::new(VideoGenApp::new(controller)))),
    );
    if let Err(e) = &result {
        error!("[GUI] Window error: {}", e);
    }
    result
}
