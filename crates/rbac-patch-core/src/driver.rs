//! Straight-line runner: every patch set in order, one failure scope, no
//! rollback of sets that already completed.

use crate::operations::{apply_patch_set, run_preflight_checks};
use crate::patches;
use crate::types::{PatchReport, PatchSet};
use anyhow::Result;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

pub const NEXT_STEPS: &[&str] = &[
    "1. Test the system with each role (admin, manager, user, viewer)",
    "2. Check that buttons appear and disappear as expected",
    "3. Try actions without the required permission",
];

pub const ROLE_SQL: &str = "UPDATE profiles SET role = 'viewer' WHERE email = 'seu@email.com';";

#[derive(Debug, Clone, PartialEq)]
pub struct DriverOptions {
    pub base_dir: PathBuf,
    pub dry_run: bool,
    pub strict: bool,
}

/// Runs the built-in patch sets. See [`run_with`].
pub fn run<W: Write>(opts: &DriverOptions, out: &mut W) -> io::Result<bool> {
    run_with(opts, &patches::all(), out)
}

/// Applies `sets` in order and prints progress to `out`. Returns `Ok(false)`
/// when a patch set failed or strict preflight rejected the run; the error
/// itself has already been printed.
pub fn run_with<W: Write>(opts: &DriverOptions, sets: &[PatchSet], out: &mut W) -> io::Result<bool> {
    writeln!(out, "--- Applying RBAC patches ---")?;

    if opts.strict {
        if let Err(failures) = run_preflight_checks(&opts.base_dir, sets) {
            writeln!(out, "\n--- Preflight Checks Failed ---")?;
            for failure in &failures {
                writeln!(out, "  - {}", failure)?;
            }
            writeln!(out, "\nAborting. No files were modified.")?;
            return Ok(false);
        }
        writeln!(out, "--- Preflight Checks Passed. Proceeding with patching. ---")?;
    }

    match apply_all(opts, sets, out) {
        Ok(reports) => {
            print_summary(&reports, opts.dry_run, out)?;
            Ok(true)
        }
        Err(e) => {
            debug!("patching aborted: {:#}", e);
            writeln!(out, "\n[ERROR] Failed to apply changes: {}", e)?;
            writeln!(out, "{:?}", e)?;
            Ok(false)
        }
    }
}

fn apply_all<W: Write>(opts: &DriverOptions, sets: &[PatchSet], out: &mut W) -> Result<Vec<PatchReport>> {
    let mut reports = Vec::with_capacity(sets.len());

    for set in sets {
        writeln!(out, "--- Applying RBAC to: {:?}", set.target(&opts.base_dir))?;
        let report = apply_patch_set(&opts.base_dir, set, opts.dry_run)?;

        let tag = if opts.dry_run { "[DRY RUN]" } else { "[SUCCESS]" };
        let verb = match (opts.dry_run, report.changed) {
            (true, true) => "would be updated",
            (true, false) => "would be left unchanged",
            (false, true) => "updated with RBAC",
            (false, false) => "left unchanged",
        };
        writeln!(out, "    {} {} {}", tag, report.name, verb)?;
        reports.push(report);
    }

    Ok(reports)
}

fn print_summary<W: Write>(reports: &[PatchReport], dry_run: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Summary ---")?;
    for report in reports {
        let applied = report.steps.iter().filter(|s| s.matches.applied()).count();
        writeln!(
            out,
            "{:<28}{}/{} steps matched",
            report.name,
            applied,
            report.steps.len()
        )?;
    }

    if dry_run {
        writeln!(out, "\nDry run complete. No files were modified.")?;
        return Ok(());
    }

    writeln!(out, "\nAll RBAC changes were applied.")?;
    writeln!(out, "\nNext steps:")?;
    for step in NEXT_STEPS {
        writeln!(out, "{}", step)?;
    }
    writeln!(out, "\nTip: use this SQL to try out roles:")?;
    writeln!(out, "   {}", ROLE_SQL)?;
    Ok(())
}
