//! In-memory template tree representation and materialization.
//! A template tree describes a directory structure as nested mappings,
//! which `materialize` writes to disk verbatim.

use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// A single node of a template tree: either a file with literal content
/// or a directory holding further nodes.
#[derive(Debug, Clone)]
pub enum TemplateNode {
    /// Literal file content, written as-is in UTF-8
    File(String),
    /// Named children, created as a subdirectory
    Dir(IndexMap<String, TemplateNode>),
}

impl TemplateNode {
    /// Creates a file node from anything convertible to a String.
    pub fn file(content: impl Into<String>) -> Self {
        Self::File(content.into())
    }

    /// Creates a directory node from a list of named children.
    pub fn dir<const N: usize>(entries: [(&str, TemplateNode); N]) -> Self {
        Self::Dir(
            entries.into_iter().map(|(name, node)| (name.to_string(), node)).collect(),
        )
    }
}

/// Recursively writes a template tree to disk under `base_path`.
///
/// For each entry: directory nodes are created (with any missing ancestors)
/// and recursed into; file nodes are written as the full content of the file,
/// replacing whatever was there before. Structurally idempotent, but existing
/// file contents are overwritten without confirmation.
///
/// # Errors
/// * `Error::IoError` on any filesystem failure; no partial-state cleanup
///   is attempted
pub fn materialize<P: AsRef<Path>>(
    base_path: P,
    tree: &IndexMap<String, TemplateNode>,
) -> Result<()> {
    let base_path = base_path.as_ref();
    for (name, node) in tree {
        let current_path = base_path.join(name);
        match node {
            TemplateNode::Dir(children) => {
                fs::create_dir_all(&current_path)?;
                materialize(&current_path, children)?;
            }
            TemplateNode::File(content) => {
                if let Some(parent) = current_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                debug!("Writing file: {}", current_path.display());
                fs::write(&current_path, content)?;
            }
        }
    }
    Ok(())
}
