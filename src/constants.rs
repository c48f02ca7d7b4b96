//! Common constants used throughout the nbgen application.

/// Directory under the current working directory where templates are stored
pub const TEMPLATES_DIR: &str = "project-templates";

/// Template folder used when none is given on the command line
pub const DEFAULT_TEMPLATE: &str = "jupyter-basic";

/// Manifest file describing a template's substitution variables
pub const MANIFEST_FILE: &str = "template.json";

/// Environment management tool invoked inside the generated project
pub const ENV_TOOL: &str = "uv";

/// Package that provides the notebook kernel
pub const KERNEL_PACKAGE: &str = "ipykernel";
