//! Stylesheet passes.
//!
//! Each pass is a plain `&str -> String` transform, run in this order by
//! [`compile`](crate::compile):
//!
//! - [`comments`]: Strips `/* */` and `//` comments
//! - [`variables`]: Extracts `$name: value;` declarations and substitutes references
//! - [`flatten`]: Flattens nested blocks into top-level rules
//!
//! ## Example
//!
//! ```rust
//! use rio_scss::parser::{extract_variables, flatten, resolve_variables};
//! use rio_scss::CompileOptions;
//!
//! let source = "$gap: 8px;\n.list {\n  li { margin: $gap; }\n}\n";
//! let vars = extract_variables(source);
//! let resolved = resolve_variables(source, &vars);
//! let css = flatten(&resolved, &CompileOptions::default()).unwrap();
//! assert_eq!(css, ".list li {\n  margin: 8px;\n}\n");
//! ```

pub mod comments;
pub mod flatten;
pub mod variables;

pub use crate::parser::comments::strip_comments;
pub use crate::parser::flatten::{flatten, resolve_selector};
pub use crate::parser::variables::{
    StylesheetVariables, extract_variables, parse_declaration_line, resolve_variables,
};
