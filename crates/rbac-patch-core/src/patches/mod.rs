pub mod settings;
pub mod user_manager;

use crate::types::PatchSet;

/// Root of the Jurify checkout the patch sets were written against.
pub const DEFAULT_BASE_DIR: &str = "E:/Jurify/advo-ai-hub-main (1)/advo-ai-hub-main";

/// Patch sets in the order the driver applies them.
pub fn all() -> Vec<PatchSet> {
    vec![user_manager::patch_set(), settings::patch_set()]
}
