//! SCSS variable extraction and resolution.
//!
//! This module handles `$variable` declarations and references:
//!
//! - [`extract_variables`]: Scans source for variable declarations
//! - [`resolve_variables`]: Replaces references with values and drops declarations
//!
//! ## Variable Syntax
//!
//! A declaration occupies a whole line:
//!
//! ```scss
//! $brand: #0a4d8c;
//! $gap: 16px;
//!
//! .course-card {
//!     color: $brand;
//!     margin-bottom: $gap;
//! }
//! ```
//!
//! ## Resolution Rules
//!
//! 1. The last declaration of a name wins
//! 2. A declaration may reference variables declared before it
//! 3. At each `$`, the longest declared name that matches is substituted
//! 4. Unknown references stay in the output verbatim
//! 5. Declaration lines are removed from the output, used or not

use nom::{
    IResult,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, multispace0, space0},
    combinator::eof,
    sequence::{preceded, tuple},
};
use std::collections::HashMap;

/// Storage for stylesheet-defined variables.
#[derive(Debug, Clone, Default)]
pub struct StylesheetVariables {
    variables: HashMap<String, String>,
}

impl StylesheetVariables {
    /// Creates an empty variable table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a variable, replacing any previous value.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Resolves a variable name (without the `$`) to its value.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Declared names ordered for longest-match substitution.
    ///
    /// Longer names come first; names of equal length are ordered
    /// lexicographically so the result never depends on hash order.
    fn names_longest_first(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names
    }

    /// Replaces every known `$name` in `text`.
    pub fn substitute(&self, text: &str) -> String {
        let names = self.names_longest_first();
        substitute_with(text, self, &names)
    }
}

fn substitute_with(text: &str, vars: &StylesheetVariables, names: &[&str]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find('$') {
        output.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        let matched = names
            .iter()
            .find(|name| after.starts_with(**name))
            .and_then(|name| vars.resolve(name).map(|value| (*name, value)));

        match matched {
            Some((name, value)) => {
                output.push_str(value);
                rest = &after[name.len()..];
            }
            None => {
                output.push('$');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parses `$name` and returns the name without the sigil.
fn parse_variable_name(input: &str) -> IResult<&str, &str> {
    preceded(char('$'), take_while1(is_name_char))(input)
}

/// Parses a full declaration line: `  $name: value;  `.
fn parse_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = space0(input)?;
    let (input, name) = parse_variable_name(input)?;
    let (input, _) = tuple((space0, char(':')))(input)?;
    let (input, value) = take_until(";")(input)?;
    let (input, _) = tuple((char(';'), multispace0, eof))(input)?;
    Ok((input, (name, value.trim())))
}

/// Returns `(name, value)` when `line` is a variable declaration.
pub fn parse_declaration_line(line: &str) -> Option<(&str, &str)> {
    parse_declaration(line).ok().map(|(_, decl)| decl)
}

/// Collects every variable declaration in `source`.
///
/// Values are resolved against the declarations seen so far, so
/// `$accent: $brand;` stores the value of `$brand`.
pub fn extract_variables(source: &str) -> StylesheetVariables {
    let mut vars = StylesheetVariables::new();
    for line in source.lines() {
        if let Some((name, value)) = parse_declaration_line(line) {
            let value = vars.substitute(value);
            vars.define(name, value);
        }
    }
    log::debug!("extracted {} stylesheet variables", vars.len());
    vars
}

/// Substitutes variable references and removes declaration lines.
pub fn resolve_variables(source: &str, vars: &StylesheetVariables) -> String {
    resolve_lines(source, vars, false)
}

/// Like [`resolve_variables`], but declaration lines become blank lines so
/// later passes still report source line numbers.
pub(crate) fn resolve_variables_keeping_lines(source: &str, vars: &StylesheetVariables) -> String {
    resolve_lines(source, vars, true)
}

fn resolve_lines(source: &str, vars: &StylesheetVariables, keep_lines: bool) -> String {
    let names = vars.names_longest_first();
    let mut output = String::with_capacity(source.len());

    for line in source.lines() {
        if parse_declaration_line(line).is_some() {
            if keep_lines {
                output.push('\n');
            }
            continue;
        }
        output.push_str(&substitute_with(line, vars, &names));
        output.push('\n');
    }

    output
}
