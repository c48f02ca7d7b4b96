use clap::Parser;
use nbgen::cli::{resolve_project_name, Args};
use nbgen::error::{Error, Result};
use nbgen::prompt::Prompter;

/// Canned prompter returning a fixed answer instead of reading stdin.
struct StubPrompter {
    answer: Option<&'static str>,
}

impl Prompter for StubPrompter {
    fn input(&self, _message: &str) -> Result<String> {
        match self.answer {
            Some(answer) => Ok(answer.to_string()),
            None => panic!("Prompter should not have been consulted"),
        }
    }
}

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["nbgen", "-n", "demo"]).unwrap();

    assert_eq!(args.name.as_deref(), Some("demo"));
    assert_eq!(args.template_folder, "jupyter-basic");
    assert_eq!(args.author, "Your Name");
    assert_eq!(args.description, "A Jupyter notebook-based project.");
    assert!(!args.verbose);
}

#[test]
fn test_args_full() {
    let args = Args::try_parse_from([
        "nbgen",
        "--template-folder",
        "custom",
        "--name",
        "demo",
        "--author",
        "Alice",
        "--description",
        "Test project",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(args.template_folder, "custom");
    assert_eq!(args.author, "Alice");
    assert_eq!(args.description, "Test project");
    assert!(args.verbose);
}

#[test]
fn test_resolve_project_name_from_args() {
    let prompt = StubPrompter { answer: None };

    let name = resolve_project_name(&prompt, Some("demo".to_string())).unwrap();

    assert_eq!(name, "demo");
}

#[test]
fn test_resolve_project_name_prompts_when_omitted() {
    let prompt = StubPrompter { answer: Some("  prompted-demo  ") };

    let name = resolve_project_name(&prompt, None).unwrap();

    assert_eq!(name, "prompted-demo");
}

#[test]
fn test_resolve_project_name_rejects_whitespace() {
    let prompt = StubPrompter { answer: Some("   ") };

    match resolve_project_name(&prompt, None) {
        Err(Error::ValidationError(_)) => {}
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
