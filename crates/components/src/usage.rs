//! Per-request component usage.
//!
//! Rendering code calls [`ComponentUsage::use_component`] for every
//! component it emits. Once the page body is done, the usage object yields
//! the compiled styles and scripts for exactly those components. It is
//! dropped with the request, so nothing leaks between pages.

use crate::error::{ComponentError, Result};
use crate::registry::ComponentRegistry;
use rio_scss::compile_file;
use std::fs;
use std::path::PathBuf;

/// A script a used component needs on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptAsset {
    /// Handle of the form `component-<name>`.
    pub handle: String,
    pub path: PathBuf,
    pub dependencies: Vec<String>,
}

/// Where a component's CSS came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleOrigin {
    /// A build artifact, used verbatim.
    Precompiled(PathBuf),
    /// The component's own stylesheet.
    Source(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledStyle {
    pub component: String,
    pub css: String,
    pub origin: StyleOrigin,
}

/// Components used while rendering one request, in first-use order.
#[derive(Debug)]
pub struct ComponentUsage<'r> {
    registry: &'r ComponentRegistry,
    used: Vec<String>,
}

impl<'r> ComponentUsage<'r> {
    pub(crate) fn new(registry: &'r ComponentRegistry) -> Self {
        Self {
            registry,
            used: Vec::new(),
        }
    }

    /// Marks `name` as used. Repeated calls keep the first position.
    pub fn use_component(&mut self, name: &str) {
        if !self.used.iter().any(|n| n == name) {
            self.used.push(name.to_string());
        }
    }

    pub fn used(&self) -> &[String] {
        &self.used
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }

    /// Scripts for used components whose script file exists.
    pub fn scripts(&self) -> Vec<ScriptAsset> {
        let config = self.registry.config();
        self.used
            .iter()
            .filter_map(|name| {
                let assets = self.registry.get(name)?;
                let path = config.asset_path(assets.script_path.as_ref()?);
                if !path.is_file() {
                    log::debug!("script for '{}' not found at {}", name, path.display());
                    return None;
                }
                Some(ScriptAsset {
                    handle: format!("component-{}", name),
                    path,
                    dependencies: assets.dependencies.clone(),
                })
            })
            .collect()
    }

    /// CSS for every used component that has a stylesheet.
    ///
    /// A precompiled artifact under the dist directory wins over the
    /// source. Unknown components, missing files and empty output are
    /// skipped.
    pub fn compiled_styles(&self) -> Result<Vec<CompiledStyle>> {
        let config = self.registry.config();
        let mut styles = Vec::new();

        for name in &self.used {
            let Some(assets) = self.registry.get(name) else {
                log::debug!("component '{}' is not registered", name);
                continue;
            };
            let Some(style_path) = &assets.style_path else {
                continue;
            };

            let precompiled = config.precompiled_path(style_path);
            let source = config.asset_path(style_path);

            let (css, origin) = if precompiled.is_file() {
                let css = fs::read_to_string(&precompiled).map_err(|source| ComponentError::Io {
                    path: precompiled.clone(),
                    source,
                })?;
                (css, StyleOrigin::Precompiled(precompiled))
            } else if source.is_file() {
                let css = compile_file(&source, &config.compile).map_err(|err| {
                    ComponentError::Scss {
                        component: name.clone(),
                        source: err,
                    }
                })?;
                (css, StyleOrigin::Source(source))
            } else {
                log::debug!("stylesheet for '{}' not found at {}", name, source.display());
                continue;
            };

            if css.trim().is_empty() {
                continue;
            }
            styles.push(CompiledStyle {
                component: name.clone(),
                css,
                origin,
            });
        }

        Ok(styles)
    }

    /// The inline `<style>` block for this request, or an empty string
    /// when no used component contributes CSS.
    pub fn render_inline_styles(&self) -> Result<String> {
        if self.used.is_empty() {
            return Ok(String::new());
        }

        let styles = self.compiled_styles()?;
        if styles.is_empty() {
            return Ok(String::new());
        }

        let mut out = String::from("<style id='component-styles'>\n");
        for style in &styles {
            out.push_str("/* Component: ");
            out.push_str(&style.component);
            out.push_str(" */\n");
            out.push_str(&style.css);
            out.push_str("\n\n");
        }
        out.push_str("</style>\n");
        Ok(out)
    }
}
