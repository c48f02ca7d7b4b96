//! Core template processing orchestration.
//! Walks a template directory, renders every relative path and file content
//! against the project context, and writes the result under the output root.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// Renders a template directory into `output_root` using the given context.
///
/// The template manifest is consumed for defaults elsewhere and never copied
/// into the output. Entries whose rendered path is empty are skipped. Files
/// already present at a target path are overwritten.
///
/// # Returns
/// * `Result<PathBuf>` - Path to the rendered top-level project directory
///
/// # Errors
/// * `Error::TemplateError` if the walk fails, a path is not valid UTF-8, or
///   the template contains no top-level project directory
/// * `Error::MinijinjaError` if rendering a path or file content fails
/// * `Error::IoError` on any filesystem failure
pub fn render_template<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    template_dir: P,
    output_root: Q,
    context: &serde_json::Value,
) -> Result<PathBuf> {
    let template_dir = template_dir.as_ref();
    let output_root = output_root.as_ref();
    let mut project_dir: Option<PathBuf> = None;

    debug!("Rendering template from: {}", template_dir.display());

    for dir_entry in WalkDir::new(template_dir) {
        let entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(template_dir)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        if relative_path.as_os_str().is_empty() {
            continue;
        }
        let relative_path = relative_path.to_str().ok_or_else(|| {
            Error::TemplateError(format!("invalid path in template: {}", path.display()))
        })?;
        if relative_path == MANIFEST_FILE {
            continue;
        }

        debug!("Processing source entry: {}", relative_path);

        let rendered_path = engine.render(relative_path, context)?;

        // A conditional path that evaluated to nothing produces no output.
        if rendered_path.trim().is_empty() {
            debug!("Skipping entry with empty rendered path");
            continue;
        }

        let target_path = output_root.join(&rendered_path);

        if path.is_dir() {
            fs::create_dir_all(&target_path)?;
            if entry.depth() == 1 && project_dir.is_none() {
                project_dir = Some(target_path);
            }
        } else {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = fs::read_to_string(path)?;
            let rendered_content = engine.render(&content, context)?;
            debug!("Writing file: {}", target_path.display());
            fs::write(&target_path, rendered_content)?;
        }
    }

    project_dir.ok_or_else(|| {
        Error::TemplateError(
            "template does not contain a top-level project directory".to_string(),
        )
    })
}
