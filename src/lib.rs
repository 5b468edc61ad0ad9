//! Stylesheet pipeline for the EAD Rio theme.
//!
//! Ties together the SCSS subset compiler ([`rio_scss`]) and the
//! component registry ([`rio_components`]), and provides the file logger
//! used by the `rio-css` tool.
//!
//! ```no_run
//! use ead_rio::{LoaderConfig, render_component_styles};
//!
//! let block = render_component_styles(
//!     LoaderConfig::new("/var/www/themes/ead-rio"),
//!     &["rio-button", "rio-course-card"],
//! )?;
//! print!("{}", block);
//! # Ok::<(), ead_rio::EadRioError>(())
//! ```

pub mod error;
mod log_init;

pub use error::{EadRioError, Result};
pub use log_init::init_logger;

// Re-export the log crate so hosts can use ead_rio::log::info!, etc.
pub use log;
pub use rio_components::{
    CompiledStyle, ComponentAssets, ComponentError, ComponentRegistry, ComponentUsage,
    LoaderConfig, ScriptAsset, StyleOrigin,
};
pub use rio_scss::{CompileOptions, ScssError, UnclosedPolicy, compile, compile_file, compile_with};

/// Discovers the theme's components, marks `components` as used and
/// returns the inline `<style>` block for them.
pub fn render_component_styles<S: AsRef<str>>(
    config: LoaderConfig,
    components: &[S],
) -> Result<String> {
    let mut registry = ComponentRegistry::new(config);
    let found = registry.discover()?;
    log::info!("{} components available", found);

    let mut usage = registry.begin_request();
    for name in components {
        usage.use_component(name.as_ref());
    }
    Ok(usage.render_inline_styles()?)
}
