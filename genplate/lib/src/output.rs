//! Template rendering and output writing.
//!
//! Rendering is all-or-nothing. The template is rendered into memory first;
//! only a complete result is written, and it is written atomically (temp file
//! + rename), so a failed render never truncates or half-writes the output.

use std::fs;
use std::io::Write;
use std::path::Path;

use handlebars::Handlebars;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::data::TemplateData;
use crate::errors::GenplateError;
use crate::functions::TemplateFunctions;

/// Knobs for a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fail when the template references a field missing from the data.
    pub strict: bool,
    /// Render only; do not write the output file.
    pub dry_run: bool,
}

/// A Handlebars registry with the template functions installed.
///
/// HTML escaping is turned off since the output is source code, not markup.
#[derive(Debug)]
pub struct Renderer<'reg> {
    registry: Handlebars<'reg>,
}

impl Renderer<'_> {
    /// Builds a registry with every function in `functions` installed as a
    /// helper, honouring `options.strict`.
    pub fn new(functions: &TemplateFunctions, options: &RenderOptions) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(options.strict);
        functions.register(&mut registry);

        Self { registry }
    }

    /// Renders a template held in memory.
    ///
    /// ## Errors
    ///
    /// Returns `Render` if parsing or rendering fails. Parse errors surface
    /// as render errors here because the template is compiled on the fly.
    pub fn render_str(&self, source: &str, data: &TemplateData) -> Result<String, GenplateError> {
        Ok(self.registry.render_template(source, data.as_value())?)
    }

    /// Parses the template file at `path` and renders it.
    ///
    /// ## Errors
    ///
    /// Returns `ReadTemplate` if the file cannot be read, `Template` if it
    /// does not parse and `Render` if rendering fails.
    pub fn render_file(&mut self, path: &Path, data: &TemplateData) -> Result<String, GenplateError> {
        let source = fs::read_to_string(path).map_err(|source| GenplateError::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path.display().to_string();
        self.registry.register_template_string(&name, source)?;
        debug!(template = %name, "parsed template");

        Ok(self.registry.render(&name, data.as_value())?)
    }
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed. The temp file gets a unique name
/// in the target's directory so the rename stays on one filesystem and two
/// concurrent writers never share it. It is removed on every failure path.
///
/// ## Errors
///
/// Returns `GenplateError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be created or written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GenplateError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| GenplateError::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| GenplateError::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    temp.write_all(content.as_bytes()).map_err(|e| GenplateError::WriteError {
        path: temp.path().to_path_buf(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| GenplateError::WriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Renders `template` against `data` and writes the result to `out_file`.
///
/// This is the main entry point used by the CLI. With `options.dry_run` set
/// nothing is written.
///
/// ## Returns
///
/// The rendered text.
///
/// ## Errors
///
/// Returns an error if the template cannot be read or parsed, if rendering
/// fails (including any template function failure), or if writing fails. On
/// error `out_file` is left as it was.
pub fn generate(
    template: &Path,
    out_file: &Path,
    data: &TemplateData,
    functions: &TemplateFunctions,
    options: &RenderOptions,
) -> Result<String, GenplateError> {
    let mut renderer = Renderer::new(functions, options);
    let rendered = renderer.render_file(template, data)?;

    if options.dry_run {
        debug!(out = %out_file.display(), "dry run, skipping write");
    } else {
        write_atomic(out_file, &rendered)?;
        info!(
            template = %template.display(),
            out = %out_file.display(),
            bytes = rendered.len(),
            "rendered template"
        );
    }

    Ok(rendered)
}
