//! Writing the bundled default documents out for customisation.
use std::{
  fs,
  path::{Path, PathBuf},
};

use crate::error::ConfigError;

/// Write every bundled template into `output_dir`.
///
/// Existing files are skipped with a warning unless `force` is set. Returns
/// the paths that were written.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or a template
/// cannot be written.
pub fn export_templates(
  output_dir: &Path,
  force: bool,
) -> Result<Vec<PathBuf>, ConfigError> {
  fs::create_dir_all(output_dir).map_err(|e| {
    ConfigError::Config(format!(
      "Failed to create template directory: {}: {}",
      output_dir.display(),
      e
    ))
  })?;

  let mut templates: Vec<_> =
    mdrender_templates::all_templates().into_iter().collect();
  templates.sort_unstable_by_key(|(name, _)| *name);

  let mut written = Vec::new();
  for (filename, content) in templates {
    let file_path = output_dir.join(filename);

    if file_path.exists() && !force {
      log::warn!(
        "File {} already exists. Use --force to overwrite.",
        file_path.display()
      );
      continue;
    }

    fs::write(&file_path, content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write template file: {}: {}",
        file_path.display(),
        e
      ))
    })?;
    log::info!("Exported template: {}", file_path.display());
    written.push(file_path);
  }

  Ok(written)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use tempfile::TempDir;

  use super::*;
  use crate::{ConfigResolver, config::RenderConfig};

  #[test]
  fn test_export_writes_all_templates() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested/templates");

    let written = export_templates(&out, false).unwrap();
    assert_eq!(written, vec![out.join("config.json"), out.join("page.html")]);

    let exported = RenderConfig::from_file(out.join("config.json")).unwrap();
    assert_eq!(&exported, ConfigResolver::embedded().unwrap().defaults());
    let page = fs::read_to_string(out.join("page.html")).unwrap();
    assert_eq!(page, mdrender_templates::PAGE_TEMPLATE);
  }

  #[test]
  fn test_export_skips_existing_without_force() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("page.html");
    fs::write(&existing, "custom").unwrap();

    let written = export_templates(dir.path(), false).unwrap();
    assert_eq!(written, vec![dir.path().join("config.json")]);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "custom");

    let written = export_templates(dir.path(), true).unwrap();
    assert_eq!(written.len(), 2);
    assert_ne!(fs::read_to_string(&existing).unwrap(), "custom");
  }
}
