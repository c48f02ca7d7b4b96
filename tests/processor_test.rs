use nbgen::processor::render_template;
use nbgen::renderer::MiniJinjaRenderer;
use nbgen::template::prepare_template_dir;
use tempfile::TempDir;

fn demo_context() -> serde_json::Value {
    serde_json::json!({
        "project_name": "demo",
        "author_name": "Alice",
        "description": "Test project"
    })
}

#[test]
fn test_render_template_produces_project() {
    let templates_root = TempDir::new().unwrap();
    let output_root = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();

    let template_dir =
        prepare_template_dir(templates_root.path(), "jupyter-basic").unwrap();

    let project_dir =
        render_template(&engine, &template_dir, output_root.path(), &demo_context())
            .unwrap();

    assert_eq!(project_dir, output_root.path().join("demo"));
    assert!(project_dir.join("data").is_dir());
    assert!(project_dir.join("src").is_dir());
    assert!(project_dir.join("notebook_01.ipynb").is_file());

    // The manifest is consumed for defaults, never copied to the output
    assert!(!output_root.path().join("template.json").exists());
    assert!(!project_dir.join("template.json").exists());
}

#[test]
fn test_rendered_readme_has_no_unresolved_tokens() {
    let templates_root = TempDir::new().unwrap();
    let output_root = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();

    let template_dir =
        prepare_template_dir(templates_root.path(), "jupyter-basic").unwrap();
    let project_dir =
        render_template(&engine, &template_dir, output_root.path(), &demo_context())
            .unwrap();

    let readme = std::fs::read_to_string(project_dir.join("README.md")).unwrap();
    assert!(readme.contains("demo"));
    assert!(readme.contains("Alice"));
    assert!(readme.contains("Test project"));
    assert!(!readme.contains("{{"));
    assert!(!readme.contains("}}"));
}

#[test]
fn test_render_template_without_project_directory_fails() {
    let templates_root = TempDir::new().unwrap();
    let output_root = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();

    // A template holding only loose files has no project directory to return
    std::fs::write(templates_root.path().join("stray.txt"), "stray").unwrap();

    let result = render_template(
        &engine,
        templates_root.path(),
        output_root.path(),
        &demo_context(),
    );

    assert!(result.is_err());
}
