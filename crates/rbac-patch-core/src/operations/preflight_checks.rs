use crate::operations::file_operations::normalize_line_endings;
use crate::operations::patch_applicator::apply_replacements;
use crate::types::{MatchCount, PatchSet};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreflightFailure {
    #[error("{name} ({path:?}): could not read file: {source}")]
    Unreadable {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name} ({path:?}): file is read-only")]
    ReadOnly { name: &'static str, path: PathBuf },
    #[error("{name}: step '{label}' FAILED (search block not found)")]
    NotFound {
        name: &'static str,
        label: &'static str,
    },
    #[error("{name}: step '{label}' FAILED (search block is ambiguous, found {count} times)")]
    Ambiguous {
        name: &'static str,
        label: &'static str,
        count: usize,
    },
}

/// Simulates every patch set in memory and collects each step that would not
/// match exactly once. Nothing is written.
pub fn run_preflight_checks(base_dir: &Path, sets: &[PatchSet]) -> Result<(), Vec<PreflightFailure>> {
    info!("running preflight checks on {} patch sets", sets.len());
    let mut failures = Vec::new();

    for set in sets {
        let path = set.target(base_dir);

        let content = match fs::read_to_string(&path) {
            Ok(c) => normalize_line_endings(&c).0,
            Err(source) => {
                failures.push(PreflightFailure::Unreadable {
                    name: set.name,
                    path,
                    source,
                });
                continue;
            }
        };

        if let Ok(metadata) = fs::metadata(&path) {
            if metadata.permissions().readonly() {
                failures.push(PreflightFailure::ReadOnly {
                    name: set.name,
                    path: path.clone(),
                });
            }
        }

        let (_, steps) = apply_replacements(&content, &set.replacements);
        for step in steps {
            match step.matches {
                MatchCount::Unique => info!("{}: step '{}' OK", set.name, step.label),
                MatchCount::Missing => failures.push(PreflightFailure::NotFound {
                    name: set.name,
                    label: step.label,
                }),
                MatchCount::Ambiguous(count) => failures.push(PreflightFailure::Ambiguous {
                    name: set.name,
                    label: step.label,
                    count,
                }),
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Replacement;
    use tempfile::tempdir;

    fn set() -> PatchSet {
        PatchSet {
            name: "Settings",
            relative_path: "View.tsx",
            replacements: vec![
                Replacement {
                    label: "imports",
                    search: "import A;",
                    replace: "import A;\nimport B;",
                },
                Replacement {
                    label: "close",
                    search: "</div>",
                    replace: ")}</div>",
                },
            ],
        }
    }

    #[test]
    fn test_preflight_ok() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("View.tsx"), "import A;\n<div></div>\n").unwrap();

        assert!(run_preflight_checks(dir.path(), &[set()]).is_ok());
    }

    #[test]
    fn test_preflight_reports_missing_and_ambiguous() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("View.tsx"), "<div></div>\n<div></div>\n").unwrap();

        let failures = run_preflight_checks(dir.path(), &[set()]).unwrap_err();
        assert_eq!(failures.len(), 2);
        assert!(matches!(
            failures[0],
            PreflightFailure::NotFound { label: "imports", .. }
        ));
        assert!(matches!(
            failures[1],
            PreflightFailure::Ambiguous {
                label: "close",
                count: 2,
                ..
            }
        ));
        assert!(failures[1].to_string().contains("found 2 times"));
    }

    #[test]
    fn test_preflight_unreadable_target() {
        let dir = tempdir().unwrap();

        let failures = run_preflight_checks(dir.path(), &[set()]).unwrap_err();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], PreflightFailure::Unreadable { .. }));
    }

    #[test]
    fn test_preflight_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("View.tsx");
        fs::write(&path, "import A;\n<div></div>\n").unwrap();

        run_preflight_checks(dir.path(), &[set()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "import A;\n<div></div>\n");
    }

    #[test]
    fn test_preflight_flags_read_only_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("View.tsx");
        fs::write(&path, "import A;\n<div></div>\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        let failures = run_preflight_checks(dir.path(), &[set()]).unwrap_err();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], PreflightFailure::ReadOnly { .. }));
        assert!(failures[0].to_string().contains("file is read-only"));
    }

    #[test]
    fn test_preflight_matches_crlf_content() {
        let dir = tempdir().unwrap();
        let replacements = vec![Replacement {
            label: "block",
            search: "<div>\n</div>",
            replace: "<span />",
        }];
        let crlf_set = PatchSet {
            name: "Settings",
            relative_path: "View.tsx",
            replacements,
        };
        fs::write(dir.path().join("View.tsx"), "<div>\r\n</div>\r\n").unwrap();

        assert!(run_preflight_checks(dir.path(), &[crlf_set]).is_ok());
    }
}
