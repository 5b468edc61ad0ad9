//! Component style registry for the EAD Rio theme.
//!
//! Theme components (atoms such as `rio-button`, molecules such as
//! `rio-course-card`) each own a stylesheet and optionally a script. Only
//! the components actually rendered on a page should ship their CSS, so
//! loading is split in two:
//!
//! - [`ComponentRegistry`]: built once, knows every component's assets
//! - [`ComponentUsage`]: created per request, records which components were rendered
//!
//! # Usage
//!
//! ```no_run
//! use rio_components::{ComponentAssets, ComponentRegistry, LoaderConfig};
//!
//! let mut registry = ComponentRegistry::new(LoaderConfig::new("/var/www/themes/ead-rio"));
//! registry.discover()?;
//! registry.register(
//!     "cards-module",
//!     ComponentAssets::style("components/widgets/cards-module/cards-module.scss"),
//! );
//!
//! let mut usage = registry.begin_request();
//! usage.use_component("rio-button");
//! usage.use_component("cards-module");
//! let style_block = usage.render_inline_styles()?;
//! # Ok::<(), rio_components::ComponentError>(())
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod usage;

pub use config::LoaderConfig;
pub use error::{ComponentError, Result};
pub use registry::{ComponentAssets, ComponentRegistry};
pub use usage::{CompiledStyle, ComponentUsage, ScriptAsset, StyleOrigin};
