use std::path::{Path, PathBuf};

/// A single literal substitution. Every non-overlapping occurrence of
/// `search` is replaced with `replace`.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub label: &'static str,
    pub search: &'static str,
    pub replace: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchSet {
    pub name: &'static str,
    pub relative_path: &'static str,
    pub replacements: Vec<Replacement>,
}

impl PatchSet {
    pub fn target(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.relative_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCount {
    Missing,
    Unique,
    Ambiguous(usize),
}

impl MatchCount {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => MatchCount::Missing,
            1 => MatchCount::Unique,
            n => MatchCount::Ambiguous(n),
        }
    }

    pub fn applied(&self) -> bool {
        !matches!(self, MatchCount::Missing)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub label: &'static str,
    pub matches: MatchCount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub name: &'static str,
    pub path: PathBuf,
    pub steps: Vec<StepReport>,
    pub changed: bool,
}

impl PatchReport {
    pub fn missing_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|s| s.matches == MatchCount::Missing)
    }
}
