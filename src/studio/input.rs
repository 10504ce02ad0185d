// VideoGen Input Panel
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI

use serde::{Deserialize, Serialize};

use crate::studio::selection::{StyleSelection, VisualStyle, VoiceStyle};

pub const SCRIPT_PLACEHOLDER: &str = "Enter your topic or script idea...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputTab {
    #[default]
    Script,
    Voice,
    Style,
}

impl InputTab {
    pub const ALL: [InputTab; 3] = [InputTab::Script, InputTab::Voice, InputTab::Style];

    pub fn label(self) -> &'static str {
        match self {
            InputTab::Script => "Script",
            InputTab::Voice => "Voice",
            InputTab::Style => "Style",
        }
    }
}

/// Everything the user types or picks before pressing Generate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPanel {
    pub script_text: String,
    pub active_tab: InputTab,
    pub voice: StyleSelection<VoiceStyle>,
    pub visual: StyleSelection<VisualStyle>,
}
