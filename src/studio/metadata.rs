// VideoGen YouTube Metadata Slots
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Free-text fields that an external text generator would fill in.
// Nothing here validates or produces content.

use serde::{Deserialize, Serialize};

pub const TITLE_PLACEHOLDER: &str = "AI-generated title will appear here";
pub const DESCRIPTION_PLACEHOLDER: &str = "AI-generated description will appear here";
pub const TAGS_PLACEHOLDER: &str = "AI-generated tags will appear here";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub tags: String,
}

impl VideoMetadata {
    /// Comma-separated tags, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_splits_and_trims() {
        let meta = VideoMetadata {
            tags: " ai, video ,, tutorial ,".to_string(),
            ..Default::default()
        };
        assert_eq!(meta.tag_list(), vec!["ai", "video", "tutorial"]);
        assert!(!meta.is_empty());
        assert!(VideoMetadata::default().tag_list().is_empty());
    }
}
