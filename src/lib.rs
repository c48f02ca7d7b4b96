//! nbgen scaffolds Jupyter notebook projects from templates.
//! It materializes a built-in template directory, renders it with concrete
//! project values, and bootstraps a dependency environment inside the
//! generated project.

/// Project environment bootstrapping via the external environment tool
pub mod bootstrap;

/// Command-line interface module for the nbgen application
pub mod cli;

/// Common constants shared across modules
pub mod constants;

/// Error types and handling for the nbgen application
pub mod error;

/// Core template processing orchestration
/// Walks a template directory and renders it into the output root
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
/// Delegates placeholder substitution to MiniJinja
pub mod renderer;

/// Built-in template definition and template directory preparation
pub mod template;

/// In-memory template tree representation and materialization
pub mod tree;
