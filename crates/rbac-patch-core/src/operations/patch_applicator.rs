use crate::matcher::classify;
use crate::operations::file_operations::{
    normalize_line_endings, read_file_content, restore_line_endings, write_file_content,
};
use crate::types::{MatchCount, PatchReport, PatchSet, Replacement, StepReport};
use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

/// Runs every replacement in order against `content`. A replacement whose
/// search literal is absent leaves the content untouched and is recorded as
/// `Missing`; later replacements still run.
pub fn apply_replacements(content: &str, replacements: &[Replacement]) -> (String, Vec<StepReport>) {
    let mut current = content.to_string();
    let mut steps = Vec::with_capacity(replacements.len());

    for r in replacements {
        let matches = classify(&current, r.search);
        if matches.applied() {
            current = current.replace(r.search, r.replace);
        }
        steps.push(StepReport {
            label: r.label,
            matches,
        });
    }

    (current, steps)
}

pub fn apply_patch_set(base_dir: &Path, set: &PatchSet, dry_run: bool) -> Result<PatchReport> {
    let path = set.target(base_dir);
    info!("{}: reading {:?}", set.name, path);

    let raw = read_file_content(&path)?;
    let (content, ending) = normalize_line_endings(&raw);
    let (patched, steps) = apply_replacements(&content, &set.replacements);

    for step in &steps {
        match step.matches {
            MatchCount::Unique => debug!("{}: step '{}' applied", set.name, step.label),
            MatchCount::Missing => warn!(
                "{}: step '{}' skipped (search block not found)",
                set.name, step.label
            ),
            MatchCount::Ambiguous(n) => warn!(
                "{}: step '{}' replaced {} occurrences",
                set.name, step.label, n
            ),
        }
    }

    let changed = patched != content;
    if dry_run {
        info!("{}: dry run, {:?} left untouched", set.name, path);
    } else {
        write_file_content(&path, &restore_line_endings(&patched, ending))?;
        info!("{}: wrote {:?}", set.name, path);
    }

    Ok(PatchReport {
        name: set.name,
        path,
        steps,
        changed,
    })
}
