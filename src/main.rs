//! nbgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template preparation, rendering,
//! and environment bootstrapping for the generated project.

use std::fs;
use std::path::PathBuf;

use nbgen::{
    bootstrap::initialize_environment,
    cli::{get_args, resolve_project_name, Args},
    constants::{ENV_TOOL, TEMPLATES_DIR},
    error::{default_error_handler, Result},
    processor::render_template,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    template::{load_manifest, prepare_template_dir},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the project name, prompting if necessary
/// 2. Prepares the template directory (materializing the built-in tree on
///    first use)
/// 3. Assembles the render context from manifest defaults and CLI values
/// 4. Renders the template into the current working directory
/// 5. Bootstraps the project environment inside the rendered output
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new();

    let name = resolve_project_name(&prompt, args.name)?;

    let cwd = std::env::current_dir()?;
    let templates_root = cwd.join(TEMPLATES_DIR);
    fs::create_dir_all(&templates_root)?;

    let template_dir = prepare_template_dir(&templates_root, &args.template_folder)?;

    let mut context = load_manifest(&template_dir)?;
    context.insert("project_name".to_string(), serde_json::Value::String(name));
    context.insert("author_name".to_string(), serde_json::Value::String(args.author));
    context
        .insert("description".to_string(), serde_json::Value::String(args.description));
    let context = serde_json::Value::Object(context);

    let project_dir: PathBuf = render_template(&engine, &template_dir, &cwd, &context)?;
    log::info!("Project created at: {}", project_dir.display());

    initialize_environment(ENV_TOOL, &project_dir)?;

    println!("Project created and initialized in {}.", project_dir.display());
    Ok(())
}
