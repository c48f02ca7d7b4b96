//! Built-in template definition and template directory preparation.
//! The built-in tree describes a basic Jupyter project; once materialized it
//! can be customized freely and is reused unmodified on later runs.

use indexmap::IndexMap;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::tree::{materialize, TemplateNode};

const MANIFEST: &str = r#"{
    "project_name": "default_project_name",
    "author_name": "Your Name",
    "description": "A Jupyter notebook-based project."
}
"#;

const NOTEBOOK_SKELETON: &str = r#"{
    "cells": [],
    "metadata": {},
    "nbformat": 4,
    "nbformat_minor": 5
}
"#;

const README_SKELETON: &str = "# {{ project_name }}\n\n\
    {{ description }}\n\n\
    ## Author\n\
    {{ author_name }}\n";

/// Returns the built-in template tree for a basic Jupyter project.
///
/// The tree holds a manifest with the expected substitution variables, empty
/// `data` and `src` directories, a blank notebook skeleton and a README with
/// placeholder tokens.
pub fn builtin_tree() -> IndexMap<String, TemplateNode> {
    let mut tree = IndexMap::new();
    tree.insert(MANIFEST_FILE.to_string(), TemplateNode::file(MANIFEST));
    tree.insert(
        "{{ project_name }}".to_string(),
        TemplateNode::dir([
            ("data", TemplateNode::dir([])),
            ("src", TemplateNode::dir([])),
            ("notebook_01.ipynb", TemplateNode::file(NOTEBOOK_SKELETON)),
            ("README.md", TemplateNode::file(README_SKELETON)),
        ]),
    );
    tree
}

/// Ensures the template directory exists and is populated.
///
/// If `templates_root/template_folder` already exists it is reused as-is so
/// that user customization survives repeated runs; otherwise the built-in
/// tree is materialized there.
///
/// # Errors
/// * `Error::IoError` if materialization fails
pub fn prepare_template_dir<P: AsRef<Path>>(
    templates_root: P,
    template_folder: &str,
) -> Result<PathBuf> {
    let template_dir = templates_root.as_ref().join(template_folder);

    if template_dir.exists() {
        info!("Using existing template from: {}", template_dir.display());
    } else {
        info!("Creating new template at: {}", template_dir.display());
        materialize(&template_dir, &builtin_tree())?;
    }

    Ok(template_dir)
}

/// Loads the template manifest, the JSON object declaring the template's
/// substitution variables and their default values.
///
/// A template without a manifest yields an empty object.
///
/// # Errors
/// * `Error::TemplateError` if the manifest is not a JSON object
pub fn load_manifest<P: AsRef<Path>>(
    template_dir: P,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let manifest_path = template_dir.as_ref().join(MANIFEST_FILE);
    if !manifest_path.exists() {
        debug!("Template has no {}", MANIFEST_FILE);
        return Ok(serde_json::Map::new());
    }

    let content = fs::read_to_string(&manifest_path)?;
    let manifest: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::TemplateError(format!("invalid manifest: {}", e)))?;

    match manifest {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(Error::TemplateError(format!(
            "{} must contain a JSON object",
            MANIFEST_FILE
        ))),
    }
}
