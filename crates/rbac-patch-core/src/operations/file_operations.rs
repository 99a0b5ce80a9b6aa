use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }
}

/// Search literals are LF-only, so content is matched in LF form. Returns the
/// ending to restore on write.
pub fn normalize_line_endings(content: &str) -> (String, LineEnding) {
    match LineEnding::detect(content) {
        LineEnding::Lf => (content.to_string(), LineEnding::Lf),
        LineEnding::Crlf => (content.replace("\r\n", "\n"), LineEnding::Crlf),
    }
}

/// Expects LF-normalized input. Mixed files come back uniformly CRLF.
pub fn restore_line_endings(content: &str, ending: LineEnding) -> String {
    match ending {
        LineEnding::Lf => content.to_string(),
        LineEnding::Crlf => content.replace('\n', "\r\n"),
    }
}

pub fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Overwrites the whole file. Targets are expected to exist already, so no
/// parent directories are created.
pub fn write_file_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}
