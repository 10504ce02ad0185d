// VideoGen Feature Showcase
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI

pub const HERO_TITLE: &str = "Transform Text into Engaging Videos";
pub const HERO_SUBTITLE: &str =
    "Harness the power of AI to create professional videos from your text in minutes";

pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: "✨",
        title: "AI Script Generation",
        description: "Transform your ideas into professional video scripts with our advanced AI",
    },
    FeatureCard {
        icon: "🎵",
        title: "Auto Voice & Music",
        description: "Add professional voiceovers and background music automatically",
    },
    FeatureCard {
        icon: "▶",
        title: "YouTube Ready",
        description: "Optimize your videos for YouTube with AI-generated metadata",
    },
    FeatureCard {
        icon: "⬆",
        title: "Easy Upload",
        description: "Upload your own assets or use our AI-generated visuals",
    },
    FeatureCard {
        icon: "☁",
        title: "Cloud Processing",
        description: "Process your videos in the cloud for maximum performance",
    },
    FeatureCard {
        icon: "🎬",
        title: "Smart Editing",
        description: "Automatic transitions, captions, and visual effects",
    },
];
