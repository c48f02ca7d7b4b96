//! Command-line interface implementation for nbgen.
//! Provides argument parsing using clap and project name resolution.

use clap::Parser;

use crate::constants::DEFAULT_TEMPLATE;
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// Command-line arguments structure for nbgen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "nbgen: create a Jupyter notebook project from a template",
    long_about = None
)]
pub struct Args {
    /// Template folder name to use
    #[arg(short, long, value_name = "FOLDER", default_value = DEFAULT_TEMPLATE)]
    pub template_folder: String,

    /// Name of the new project. Prompted interactively if omitted
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Author name
    #[arg(short, long, default_value = "Your Name")]
    pub author: String,

    /// Project description
    #[arg(short, long, default_value = "A Jupyter notebook-based project.")]
    pub description: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Resolves the project name, prompting interactively when it was not given
/// on the command line.
///
/// # Errors
/// * `Error::ValidationError` if the name is empty or whitespace-only after
///   prompting
pub fn resolve_project_name(
    prompt: &dyn Prompter,
    name: Option<String>,
) -> Result<String> {
    let name = match name {
        Some(name) => name,
        None => prompt.input("Enter the project name")?,
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::ValidationError(
            "a project name is required (-n/--name)".to_string(),
        ));
    }

    Ok(name)
}
