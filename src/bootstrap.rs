//! Project environment bootstrapping.
//! Runs the environment management tool inside a freshly generated project
//! to initialize it and add the notebook kernel package.

use log::info;
use std::path::Path;
use std::process::Command;

use crate::constants::KERNEL_PACKAGE;
use crate::error::{Error, Result};

/// Runs an external command with the given working directory, capturing its
/// output and failing on a non-zero exit status.
///
/// The child's stdout and stderr are fully drained and its exit status is
/// checked before returning, on both success and failure paths.
///
/// # Errors
/// * `Error::IoError` if the command cannot be spawned
/// * `Error::CommandError` with the captured stderr on non-zero exit
pub fn run_command<P: AsRef<Path>>(program: &str, args: &[&str], cwd: P) -> Result<()> {
    let command_line = format!("{} {}", program, args.join(" "));
    info!("Running command: {}", command_line);

    let output = Command::new(program).args(args).current_dir(cwd.as_ref()).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::CommandError { command: command_line, stderr });
    }

    Ok(())
}

/// Initializes the project environment and installs the notebook kernel.
///
/// Verifies the tool is discoverable on the search path before spawning
/// anything, then runs `<tool> init` and `<tool> add ipykernel` strictly in
/// sequence with `project_dir` as the working directory. The second command
/// never starts if the first one failed.
///
/// # Errors
/// * `Error::ToolNotFoundError` if the tool is absent from the search path;
///   no commands are spawned in that case
/// * `Error::CommandError` if either command exits with a non-zero status
pub fn initialize_environment<P: AsRef<Path>>(tool: &str, project_dir: P) -> Result<()> {
    if which::which(tool).is_err() {
        return Err(Error::ToolNotFoundError { tool: tool.to_string() });
    }

    let project_dir = project_dir.as_ref();
    run_command(tool, &["init"], project_dir)?;
    run_command(tool, &["add", KERNEL_PACKAGE], project_dir)?;

    Ok(())
}
