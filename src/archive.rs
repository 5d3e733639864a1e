use std::fs::File;
use std::io;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Abstraction over the archive-extraction backend.
pub trait ArchiveExtractor {
    /// Verifies that the extraction backend is usable. Called once before
    /// the pipeline performs any side effect.
    fn ensure_available(&self) -> Result<()>;

    /// Expands the full contents of `archive` into `dest`, creating the
    /// directory structure as needed.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

/// Extractor over the `zip` crate.
pub struct ZipExtractor;

impl ZipExtractor {
    fn unpack(&self, archive: &Path, dest: &Path) -> std::result::Result<(), ZipError> {
        let file = File::open(archive).map_err(ZipError::Io)?;
        let mut zip = ZipArchive::new(file)?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;

            // Entries escaping the destination (absolute or `..` paths)
            // fail the whole extraction.
            let relative = entry
                .enclosed_name()
                .ok_or(ZipError::InvalidArchive("entry escapes the destination".into()))?;
            let out_path = dest.join(relative);

            if entry.is_dir() {
                std::fs::create_dir_all(&out_path).map_err(ZipError::Io)?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent).map_err(ZipError::Io)?;
            }
            let mut out_file = File::create(&out_path).map_err(ZipError::Io)?;
            io::copy(&mut entry, &mut out_file).map_err(ZipError::Io)?;

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&out_path, std::fs::Permissions::from_mode(mode))
                    .map_err(ZipError::Io)?;
            }
        }

        Ok(())
    }
}

impl ArchiveExtractor for ZipExtractor {
    fn ensure_available(&self) -> Result<()> {
        // The zip backend is linked into the binary, so the original's
        // runtime extension check always succeeds here.
        Ok(())
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        self.unpack(archive, dest).map_err(|source| Error::ExtractFailed {
            archive: archive.display().to_string(),
            source,
        })
    }
}
