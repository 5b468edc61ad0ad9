//! Error types for SCSS compilation.
//!
//! Compilation is a pure text transform, so almost every failure is
//! structural: a block that never closes or a closing brace with nothing
//! to close. Unresolved variables are not errors (see
//! [`resolve_variables`](crate::parser::variables::resolve_variables)).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling a stylesheet.
///
/// # Examples
///
/// ```rust
/// use rio_scss::{compile, ScssError};
///
/// let err = compile(".card {\n  color: red;\n").unwrap_err();
/// assert!(matches!(err, ScssError::UnclosedBlock { .. }));
/// ```
#[derive(Error, Debug)]
pub enum ScssError {
    /// Input ended while one or more blocks were still open.
    ///
    /// `selectors` lists every open context, outermost first. `line` is
    /// where the innermost one was opened.
    #[error("unclosed block opened at line {line}: {}", .selectors.join(" > "))]
    UnclosedBlock { line: usize, selectors: Vec<String> },

    /// A `}` was found with no open block to close.
    #[error("unexpected '}}' at line {line}")]
    UnexpectedClose { line: usize },

    /// The stylesheet file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
