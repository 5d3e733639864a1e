use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::constants::ARCHIVE_EXTENSION;

/// Generates a collision-resistant hex token from the wall clock and a
/// random salt. Uniqueness is probabilistic, which is enough to keep
/// concurrent invocations in the same working directory from clashing.
pub fn unique_token() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let salt: u128 = rand::random();

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(salt.to_le_bytes());
    hex::encode(&hasher.finalize()[..16])
}

/// Builds the path of a temporary archive file inside `working_dir`,
/// e.g. `laravel_skeleton_<token>.zip`.
pub fn temp_archive_path(working_dir: &Path, prefix: &str) -> PathBuf {
    working_dir.join(format!("{}{}.{}", prefix, unique_token(), ARCHIVE_EXTENSION))
}

/// Attempts to delete a file, loosening its permissions first.
///
/// Errors are intentionally discarded: the path may legitimately not
/// exist, and pruning or temp-file cleanup must never fail the pipeline.
pub fn remove_file_best_effort(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777));
    }
    #[cfg(not(unix))]
    {
        if let Ok(metadata) = std::fs::metadata(path) {
            let mut perms = metadata.permissions();
            perms.set_readonly(false);
            let _ = std::fs::set_permissions(path, perms);
        }
    }
    let _ = std::fs::remove_file(path);
}
