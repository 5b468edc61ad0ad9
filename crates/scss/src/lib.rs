//! # rio-scss - SCSS subset compiler
//!
//! Compiles the small SCSS dialect used by EAD Rio theme components into
//! flat CSS. The transform is a pure function of its input: no I/O, no
//! shared state, same input always gives the same output.
//!
//! ## Quick Start
//!
//! ```rust
//! use rio_scss::compile;
//!
//! let source = r#"
//! $brand: #0a4d8c;
//!
//! .course-card {
//!     border: 1px solid $brand;
//!     &:hover { color: $brand; }
//! }
//! "#;
//!
//! let css = compile(source).expect("valid stylesheet");
//! assert_eq!(
//!     css,
//!     ".course-card {\n  border: 1px solid #0a4d8c;\n}\n.course-card:hover {\n  color: #0a4d8c;\n}\n"
//! );
//! ```
//!
//! ## Supported Features
//!
//! - Variables: `$name: value;` declarations and `$name` references
//! - Nesting with the descendant combinator: `.a { .b { } }`
//! - Parent references: `&:hover`, `&.active`, `&__element`
//! - Group rules: `@media`, `@supports`, `@container`, top-level `@keyframes`
//! - Comments: `/* block */` and `// line`
//!
//! ## Not Supported
//!
//! - Mixins, functions, `@import`, `@extend`, arithmetic
//! - `@keyframes` nested inside a selector
//! - Custom properties whose value is a `{ ... }` block
//!
//! ## Modules
//!
//! - [`parser`]: The individual passes
//! - [`options`]: Compilation options
//! - [`error`]: Error types

pub mod error;
pub mod options;
pub mod parser;

pub use error::ScssError;
pub use options::{CompileOptions, UnclosedPolicy};

use crate::parser::variables::resolve_variables_keeping_lines;
use crate::parser::{extract_variables, flatten, strip_comments};
use std::fs;
use std::path::Path;

/// Compiles `source` with default options.
pub fn compile(source: &str) -> Result<String, ScssError> {
    compile_with(source, &CompileOptions::default())
}

/// Compiles `source`: strips comments, resolves variables, flattens nesting.
pub fn compile_with(source: &str, options: &CompileOptions) -> Result<String, ScssError> {
    let clean = strip_comments(source);
    let vars = extract_variables(&clean);
    let resolved = resolve_variables_keeping_lines(&clean, &vars);
    flatten(&resolved, options)
}

/// Reads a stylesheet from disk, compiling it when it is `.scss`.
///
/// Any other extension is returned unchanged.
pub fn compile_file(path: &Path, options: &CompileOptions) -> Result<String, ScssError> {
    let source = fs::read_to_string(path).map_err(|source| ScssError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_scss(path) {
        log::debug!("compiling {}", path.display());
        compile_with(&source, options)
    } else {
        Ok(source)
    }
}

fn is_scss(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "scss")
}
