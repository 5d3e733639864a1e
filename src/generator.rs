//! The skeleton generation pipeline.
//!
//! Strictly ordered side effects: capability check, optional docker
//! config generation, skeleton download/extract/prune, then the composer
//! update. Any hard failure aborts the remaining steps; no rollback is
//! attempted for partially created state.

use std::path::{Path, PathBuf};

use crate::archive::ArchiveExtractor;
use crate::compose;
use crate::constants::{
    COMPOSE_TEMPLATE_URL, DENYLIST_MANIFEST_URL, DOCKER_ARCHIVE_URL, DOCKER_TEMP_PREFIX,
    SKELETON_ARCHIVE_URL, SKELETON_TEMP_PREFIX,
};
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::ioutils::{remove_file_best_effort, temp_archive_path};
use crate::prune::{prune_denylisted, remove_user_model};
use crate::updater::DependencyUpdater;

/// Options controlling a single generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Subdirectory to create under the working directory; the working
    /// directory itself is used when absent or empty.
    pub name: Option<String>,
    /// Generate the docker-compose config in addition to the skeleton.
    pub with_docker: bool,
    /// Generate only the docker-compose config.
    pub docker_only: bool,
}

/// Orchestrates the skeleton generation workflow over injected
/// collaborators.
pub struct Generator<'a> {
    fetcher: &'a dyn Fetcher,
    extractor: &'a dyn ArchiveExtractor,
    updater: &'a dyn DependencyUpdater,
    working_dir: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        extractor: &'a dyn ArchiveExtractor,
        updater: &'a dyn DependencyUpdater,
        working_dir: PathBuf,
    ) -> Self {
        Self { fetcher, extractor, updater, working_dir }
    }

    /// Resolves the target directory: the working directory, joined with
    /// `name` when one is given and non-empty.
    pub fn target_dir(&self, name: Option<&str>) -> PathBuf {
        match name {
            Some(name) if !name.is_empty() => self.working_dir.join(name),
            _ => self.working_dir.clone(),
        }
    }

    /// Executes the complete generation workflow.
    pub fn generate(&self, options: &GenerateOptions) -> Result<()> {
        // Fail before any side effect when extraction is unavailable.
        self.extractor.ensure_available()?;

        let target_dir = self.target_dir(options.name.as_deref());

        if options.with_docker || options.docker_only {
            println!("Creating docker-compose...");
            self.make_docker(&target_dir, options.name.as_deref())?;
            println!("Done!");
        }

        if !options.docker_only {
            println!("Creating Laravel skeleton...");
            self.make_skeleton(&target_dir)?;
            self.updater.update(&target_dir)?;
            println!("Done! Do something!");
        }

        Ok(())
    }

    /// Downloads and expands the skeleton archive, then strips the files
    /// a generated project must not carry.
    fn make_skeleton(&self, target_dir: &Path) -> Result<()> {
        let zip_file = temp_archive_path(&self.working_dir, SKELETON_TEMP_PREFIX);
        self.fetcher.fetch_to_file(SKELETON_ARCHIVE_URL, &zip_file)?;

        println!("Extracting file...");
        self.extractor.extract(&zip_file, target_dir)?;

        // Pruning runs after extraction; the other way around the archive
        // would recreate every pruned file.
        let manifest = self.fetcher.fetch_text(DENYLIST_MANIFEST_URL)?;
        println!("Removing files...");
        print!("{manifest}");
        prune_denylisted(target_dir, &manifest);

        remove_user_model(target_dir);
        remove_file_best_effort(&zip_file);
        Ok(())
    }

    /// Expands the docker scaffold archive and materializes the
    /// docker-compose.yml with the project name substituted in.
    fn make_docker(&self, target_dir: &Path, name: Option<&str>) -> Result<()> {
        let zip_file = temp_archive_path(&self.working_dir, DOCKER_TEMP_PREFIX);
        self.fetcher.fetch_to_file(DOCKER_ARCHIVE_URL, &zip_file)?;
        self.extractor.extract(&zip_file, target_dir)?;
        remove_file_best_effort(&zip_file);

        let template = self.fetcher.fetch_text(COMPOSE_TEMPLATE_URL)?;
        let project_name = compose::resolve_project_name(name);
        let rendered = compose::render_template(&template, &project_name);
        compose::write_compose_file(target_dir, &rendered)
    }
}
