use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::{COMPOSER_BIN, COMPOSER_PHAR, PHP_BIN};
use crate::error::Result;

/// Abstraction over the dependency-manager invocation.
pub trait DependencyUpdater {
    /// Runs the package manager's `update` subcommand inside `project_dir`,
    /// streaming its output as it arrives.
    fn update(&self, project_dir: &Path) -> Result<()>;
}

/// Updater that shells out to composer.
///
/// A `composer.phar` in the working directory takes precedence and is run
/// through the `php` interpreter; otherwise a bare `composer` is expected
/// on PATH.
pub struct ComposerUpdater {
    working_dir: PathBuf,
}

impl ComposerUpdater {
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Resolves the composer command for the environment. The phar is
    /// addressed by absolute path because the subprocess cwd is pinned to
    /// the project directory, not the invoking one.
    fn find_composer(&self) -> Command {
        let phar = self.working_dir.join(COMPOSER_PHAR);
        if phar.is_file() {
            let mut command = Command::new(PHP_BIN);
            command.arg(phar);
            command
        } else {
            Command::new(COMPOSER_BIN)
        }
    }

    /// Whether a controlling terminal can be attached to the subprocess.
    fn tty_available() -> bool {
        #[cfg(unix)]
        {
            std::fs::File::open("/dev/tty").is_ok()
        }
        #[cfg(not(unix))]
        {
            false
        }
    }
}

impl DependencyUpdater for ComposerUpdater {
    fn update(&self, project_dir: &Path) -> Result<()> {
        let mut command = self.find_composer();
        command.arg("update").current_dir(project_dir);

        let status = if Self::tty_available() {
            // Interactive path: hand composer the terminal directly so its
            // prompts and progress bars work.
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?
        } else {
            let mut child = command
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()?;

            // Forward stderr from a helper thread while the parent drains
            // stdout, so both streams appear as they are produced.
            let stderr_forwarder = child.stderr.take().map(|stderr| {
                std::thread::spawn(move || {
                    for line in BufReader::new(stderr).lines().map_while(|l| l.ok()) {
                        eprintln!("{line}");
                    }
                })
            });

            if let Some(stdout) = child.stdout.take() {
                let mut sink = std::io::stdout();
                for line in BufReader::new(stdout).lines() {
                    let line = line?;
                    writeln!(sink, "{line}")?;
                    sink.flush()?;
                }
            }

            if let Some(forwarder) = stderr_forwarder {
                let _ = forwarder.join();
            }
            child.wait()?
        };

        // Completion is reported regardless of composer's exit status;
        // the warning keeps a failed update from passing unnoticed.
        if !status.success() {
            log::warn!("composer update exited with status: {status}");
        }
        Ok(())
    }
}
