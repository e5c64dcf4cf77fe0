use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use keyswitch_catalog::Document;
use log::debug;
use minijinja::Environment;

/// EAGLE 7 library template shipped with the crate.
pub const LIBRARY_TEMPLATE: &str = include_str!("../templates/Keyboard.lbr.jinja");

/// Registered without an `.xml` extension so minijinja does not auto-escape;
/// label values carry their own entities.
const TEMPLATE_NAME: &str = "Keyboard.lbr";

/// Renders a [`Document`] into library file contents.
#[derive(Debug, Clone)]
pub struct LibraryRenderer {
    source: Cow<'static, str>,
}

impl Default for LibraryRenderer {
    fn default() -> Self {
        Self::embedded()
    }
}

impl LibraryRenderer {
    pub fn embedded() -> Self {
        Self {
            source: Cow::Borrowed(LIBRARY_TEMPLATE),
        }
    }

    /// Use a template read from disk instead of the embedded one.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        debug!("Loaded template from {}", path.display());
        Ok(Self {
            source: Cow::Owned(source),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, document: &Document) -> Result<String> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_template(TEMPLATE_NAME, &self.source)
            .context("Failed to parse library template")?;

        let rendered = env
            .get_template(TEMPLATE_NAME)?
            .render(document)
            .context("Failed to render library template")?;
        debug!(
            "Rendered {} packages into {} bytes",
            document.packages.len(),
            rendered.len()
        );
        Ok(rendered)
    }
}

/// Render with the embedded template.
pub fn render_library(document: &Document) -> Result<String> {
    LibraryRenderer::embedded().render(document)
}
