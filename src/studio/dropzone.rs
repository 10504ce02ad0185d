// VideoGen Drop Zone — Media File Acceptor
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Screens dropped or picked files against the accepted media kinds.
// Accepted files are only recorded and logged; nothing is read or uploaded.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// One `mime/*` family and the extensions it admits.
#[derive(Debug, Clone)]
pub struct AcceptRule {
    pub kind: MediaKind,
    pub mime_prefix: &'static str,
    pub extensions: &'static [&'static str],
}

const DEFAULT_RULES: &[AcceptRule] = &[
    AcceptRule {
        kind: MediaKind::Audio,
        mime_prefix: "audio/",
        extensions: &["mp3", "wav"],
    },
    AcceptRule {
        kind: MediaKind::Video,
        mime_prefix: "video/",
        extensions: &["mp4", "mov"],
    },
];

/// A file handed to the drop zone. The MIME type is optional because
/// desktop drops usually only carry a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedFile {
    pub name: String,
    pub path: Option<PathBuf>,
    pub mime: Option<String>,
}

impl DroppedFile {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            mime: None,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self {
            name,
            path: Some(path.to_path_buf()),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: &str) -> Self {
        self.mime = Some(mime.to_string());
        self
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedFile {
    pub file: DroppedFile,
    pub kind: MediaKind,
}

#[derive(Debug, Clone)]
pub struct MediaFilter {
    rules: Vec<AcceptRule>,
}

impl Default for MediaFilter {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl MediaFilter {
    pub fn new(rules: Vec<AcceptRule>) -> Self {
        Self { rules }
    }

    /// Extensions across all rules, without the dot, for file dialogs.
    pub fn extensions(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.extensions.iter().copied())
            .collect()
    }

    /// Returns the media kind when the file passes the filter.
    pub fn classify(&self, file: &DroppedFile) -> Option<MediaKind> {
        let ext = file.extension()?;
        let rule = self
            .rules
            .iter()
            .find(|r| r.extensions.contains(&ext.as_str()))?;

        // A known MIME type must agree with the extension's family.
        match file.mime.as_deref() {
            Some(mime) if !mime.to_lowercase().starts_with(rule.mime_prefix) => None,
            _ => Some(rule.kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropReport {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

/// Filter plus the collection of everything accepted so far.
#[derive(Debug, Clone, Default)]
pub struct DropZone {
    filter: MediaFilter,
    accepted: Vec<AcceptedFile>,
}

impl DropZone {
    pub fn new(filter: MediaFilter) -> Self {
        Self {
            filter,
            accepted: Vec::new(),
        }
    }

    pub fn filter(&self) -> &MediaFilter {
        &self.filter
    }

    pub fn accepted(&self) -> &[AcceptedFile] {
        &self.accepted
    }

    pub fn on_drop<I>(&mut self, files: I) -> DropReport
    where
        I: IntoIterator<Item = DroppedFile>,
    {
        let mut report = DropReport::default();
        for file in files {
            match self.filter.classify(&file) {
                Some(kind) => {
                    report.accepted.push(file.name.clone());
                    self.accepted.push(AcceptedFile { file, kind });
                }
                None => report.rejected.push(file.name),
            }
        }

        if !report.accepted.is_empty() {
            info!("[DROP] 📥 Files dropped: {:?}", report.accepted);
        }
        if !report.rejected.is_empty() {
            warn!("[DROP] 🛡️ Rejected unsupported files: {:?}", report.rejected);
        }
        report
    }
}
