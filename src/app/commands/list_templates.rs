//! Enumerate template files visible to the project.

use std::collections::HashSet;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::domain::{AppError, Settings};

/// Template roots in lookup order: project dirs, then `<app>/templates` by app name.
pub fn template_roots(settings: &Settings) -> Vec<PathBuf> {
    settings
        .template_dirs
        .iter()
        .map(|dir| settings.resolve(dir))
        .chain(settings.apps.values().map(|app| settings.resolve(app).join("templates")))
        .collect()
}

/// Every file below the template roots, sorted per root. Missing roots are skipped.
pub fn execute(settings: &Settings) -> Result<Vec<PathBuf>, AppError> {
    let mut seen = HashSet::new();
    let mut templates = Vec::new();

    for root in template_roots(settings) {
        if !root.is_dir() {
            tracing::debug!(root = %root.display(), "skipping missing template directory");
            continue;
        }
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && seen.insert(entry.path().to_path_buf()) {
                templates.push(entry.into_path());
            }
        }
    }

    Ok(templates)
}
