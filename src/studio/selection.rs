// VideoGen Style Selection
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Single-choice pickers for voice and visual style. Exactly one option is
// selected at any time; picking a new one replaces the old.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;

use crate::error::StudioError;

/// A closed set of options shown as a picker grid.
pub trait StyleOption: Copy + Eq + Debug + Default + 'static {
    /// Name used in error messages ("voice", "visual").
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn parse_key(value: &str) -> Result<Self, StudioError> {
        let needle = value.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|opt| opt.key() == needle)
            .ok_or_else(|| StudioError::UnknownStyle {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStyle {
    #[default]
    Natural,
    Professional,
    Friendly,
    Dramatic,
}

impl StyleOption for VoiceStyle {
    const KIND: &'static str = "voice";
    const ALL: &'static [Self] = &[
        VoiceStyle::Natural,
        VoiceStyle::Professional,
        VoiceStyle::Friendly,
        VoiceStyle::Dramatic,
    ];

    fn key(self) -> &'static str {
        match self {
            VoiceStyle::Natural => "natural",
            VoiceStyle::Professional => "professional",
            VoiceStyle::Friendly => "friendly",
            VoiceStyle::Dramatic => "dramatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Modern,
    Minimal,
    Bold,
    Creative,
}

impl StyleOption for VisualStyle {
    const KIND: &'static str = "visual";
    const ALL: &'static [Self] = &[
        VisualStyle::Modern,
        VisualStyle::Minimal,
        VisualStyle::Bold,
        VisualStyle::Creative,
    ];

    fn key(self) -> &'static str {
        match self {
            VisualStyle::Modern => "modern",
            VisualStyle::Minimal => "minimal",
            VisualStyle::Bold => "bold",
            VisualStyle::Creative => "creative",
        }
    }
}

impl FromStr for VoiceStyle {
    type Err = StudioError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}

impl FromStr for VisualStyle {
    type Err = StudioError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}

/// Holds the current choice for one picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSelection<T: StyleOption> {
    selected: T,
}

impl<T: StyleOption> StyleSelection<T> {
    pub fn new(initial: T) -> Self {
        Self { selected: initial }
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn is_selected(&self, option: T) -> bool {
        self.selected == option
    }

    /// Returns `true` only when the selection actually changed.
    pub fn select(&mut self, option: T) -> bool {
        if self.selected == option {
            return false;
        }
        self.selected = option;
        true
    }
}
