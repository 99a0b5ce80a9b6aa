pub mod driver;
pub mod matcher;
pub mod operations;
pub mod patches;
pub mod types;

pub use driver::{run, run_with, DriverOptions};
pub use operations::{apply_patch_set, apply_replacements, run_preflight_checks, PreflightFailure};
pub use types::{MatchCount, PatchReport, PatchSet, Replacement, StepReport};
