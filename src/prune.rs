//! Denylist pruning of the extracted skeleton.
//!
//! The remote manifest lists relative paths that ship inside the skeleton
//! archive but have no place in a generated project. Each one is deleted
//! best-effort after extraction.

use std::path::Path;

use crate::constants::USER_MODEL_PATH;
use crate::ioutils::remove_file_best_effort;

/// Parses the newline-delimited denylist manifest. Tolerates CRLF line
/// endings and skips blank lines.
pub fn parse_manifest(manifest: &str) -> Vec<&str> {
    manifest
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Deletes every manifest entry found under `target_dir`. Per-entry
/// failures are discarded; a listed path may simply not exist.
pub fn prune_denylisted(target_dir: &Path, manifest: &str) {
    for entry in parse_manifest(manifest) {
        remove_file_best_effort(&target_dir.join(entry));
    }
}

/// Deletes the generated `app/User.php` model if present.
pub fn remove_user_model(target_dir: &Path) {
    let model_file = target_dir.join(USER_MODEL_PATH);
    if model_file.is_file() {
        remove_file_best_effort(&model_file);
    }
}
