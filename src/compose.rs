//! docker-compose.yml generation.

use std::path::Path;

use crate::constants::{COMPOSE_FILENAME, PROJECT_NAME_PLACEHOLDER};
use crate::error::Result;
use crate::ioutils::unique_token;

/// Resolves the project name used for template substitution: the CLI
/// argument when non-empty, else a generated pseudo-random token.
pub fn resolve_project_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => unique_token(),
    }
}

/// Substitutes every `{project_name}` occurrence in the template.
pub fn render_template(template: &str, project_name: &str) -> String {
    template.replace(PROJECT_NAME_PLACEHOLDER, project_name)
}

/// Writes the rendered compose file into the target directory.
pub fn write_compose_file(target_dir: &Path, rendered: &str) -> Result<()> {
    std::fs::create_dir_all(target_dir)?;
    std::fs::write(target_dir.join(COMPOSE_FILENAME), rendered)?;
    Ok(())
}
