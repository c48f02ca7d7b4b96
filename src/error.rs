//! Error handling for the nbgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for nbgen operations.
///
/// This enum represents all possible errors that can occur while scaffolding
/// a project. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors raised by the MiniJinja rendering engine
    #[error("Render error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The environment management tool was not found on the search path
    #[error("'{tool}' is not installed or not found on the system PATH.")]
    ToolNotFoundError { tool: String },

    /// An external command exited with a non-zero status
    #[error("Command '{command}' failed: {stderr}.")]
    CommandError { command: String, stderr: String },

    /// Represents errors that occur during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with nbgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
