//! Nested rule flattening.
//!
//! Turns nested SCSS-style blocks into flat CSS rules. The flattener is a
//! line-oriented stack machine: every open block is a context on the
//! stack, and each selector context buffers its own properties until a
//! child block opens or the context closes.
//!
//! ## Nesting Syntax
//!
//! ```scss
//! .course-card {
//!     color: white;
//!     &:hover { color: red; }
//!     .course-card__title { font-weight: 700; }
//! }
//! ```
//!
//! flattens to:
//!
//! ```css
//! .course-card {
//!   color: white;
//! }
//! .course-card:hover {
//!   color: red;
//! }
//! .course-card .course-card__title {
//!   font-weight: 700;
//! }
//! ```
//!
//! ## Flattening Rules
//!
//! - `&` is replaced by the nearest enclosing selector
//! - Nested without `&` implies the descendant combinator
//! - Selector lists combine pairwise: `.a, .b { .c {} }` gives `.a .c, .b .c`
//! - `@media`, `@supports`, `@container` and `@keyframes` blocks are emitted
//!   verbatim and wrap the rules inside them; they never contribute to a selector
//! - Rules without properties are not emitted
//!
//! ## Line Classification
//!
//! The source is first split into logical lines: a break follows every `{`
//! and `;`, and every `}` stands on its own line. Braces and semicolons
//! inside quotes or parentheses do not split. A logical line ending in `{`
//! opens a block, `}` closes one, and anything else is a property when
//! inside a selector or passed through verbatim otherwise.

use crate::error::ScssError;
use crate::options::{CompileOptions, UnclosedPolicy};

/// Whether an open block is a selector or a conditional group rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContextKind {
    Selector,
    Media,
}

/// Scanner state, derived from the context stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// No selector block is open; lines pass through verbatim, re-indented
    /// when inside a group rule.
    Outside,
    /// At least one selector block is open; lines are properties.
    InSelector,
}

/// A single open block.
#[derive(Debug)]
struct Context {
    kind: ContextKind,
    /// Fully resolved selector, or the at-rule prelude for media contexts.
    selector: String,
    properties: Vec<String>,
    line: usize,
}

/// A logical line with the source line it came from.
#[derive(Debug, PartialEq)]
struct Line {
    number: usize,
    text: String,
}

/// Flattens nested rules in `source` into plain CSS.
///
/// `source` is expected to be free of comments and variables already; see
/// [`compile`](crate::compile) for the full pipeline.
pub fn flatten(source: &str, options: &CompileOptions) -> Result<String, ScssError> {
    let mut flattener = Flattener::new(options);
    for line in split_logical_lines(source) {
        flattener.feed(&line)?;
    }
    flattener.finish()
}

struct Flattener<'o> {
    options: &'o CompileOptions,
    stack: Vec<Context>,
    output: String,
}

impl<'o> Flattener<'o> {
    fn new(options: &'o CompileOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            output: String::new(),
        }
    }

    fn state(&self) -> State {
        if self.stack.iter().any(|c| c.kind == ContextKind::Selector) {
            State::InSelector
        } else {
            State::Outside
        }
    }

    fn feed(&mut self, line: &Line) -> Result<(), ScssError> {
        let text = line.text.as_str();
        if text == "}" {
            return self.close(line.number);
        }
        if let Some(header) = text.strip_suffix('{') {
            self.open(header.trim(), line.number);
            return Ok(());
        }

        match self.state() {
            State::Outside if self.stack.is_empty() => {
                self.output.push_str(text);
                self.output.push('\n');
            }
            // Inside a group rule with no selector around it.
            State::Outside | State::InSelector => self.push_property(text, line.number),
        }
        Ok(())
    }

    fn open(&mut self, header: &str, number: usize) {
        self.flush_top();

        if is_group_rule(header) {
            self.output.push_str(header);
            self.output.push_str(" {\n");
            self.stack.push(Context {
                kind: ContextKind::Media,
                selector: header.to_string(),
                properties: Vec::new(),
                line: number,
            });
            return;
        }

        let selector = match self.nearest_selector() {
            Some(parent) => resolve_selector(header, parent),
            None => header.to_string(),
        };
        log::trace!("line {}: open {}", number, selector);
        self.stack.push(Context {
            kind: ContextKind::Selector,
            selector,
            properties: Vec::new(),
            line: number,
        });
    }

    fn close(&mut self, number: usize) -> Result<(), ScssError> {
        let context = self
            .stack
            .pop()
            .ok_or(ScssError::UnexpectedClose { line: number })?;
        self.emit(&context);
        if context.kind == ContextKind::Media {
            self.output.push_str("}\n");
        }
        Ok(())
    }

    fn push_property(&mut self, text: &str, number: usize) {
        if !text.contains(':') {
            log::warn!("line {}: expected a declaration, found '{}'", number, text);
        }
        let property = if text.ends_with(';') {
            text.to_string()
        } else {
            format!("{};", text)
        };
        if let Some(top) = self.stack.last_mut() {
            top.properties.push(property);
        }
    }

    /// Emits the innermost context's pending properties, if any.
    fn flush_top(&mut self) {
        if let Some(mut top) = self.stack.pop() {
            self.emit(&top);
            top.properties.clear();
            self.stack.push(top);
        }
    }

    /// Writes `context`'s buffered properties as a rule.
    ///
    /// Media contexts borrow the selector of their nearest enclosing
    /// selector; `context` must already be off the stack or on top of it.
    fn emit(&mut self, context: &Context) {
        if context.properties.is_empty() {
            return;
        }
        let selector = match context.kind {
            ContextKind::Selector => Some(context.selector.clone()),
            ContextKind::Media => self.nearest_selector().map(str::to_string),
        };

        let indent = " ".repeat(self.options.indent);
        match selector {
            Some(selector) => {
                self.output.push_str(&selector);
                self.output.push_str(" {\n");
                for property in &context.properties {
                    self.output.push_str(&indent);
                    self.output.push_str(property);
                    self.output.push('\n');
                }
                self.output.push_str("}\n");
            }
            None => {
                for property in &context.properties {
                    self.output.push_str(&indent);
                    self.output.push_str(property);
                    self.output.push('\n');
                }
            }
        }
    }

    fn nearest_selector(&self) -> Option<&str> {
        self.stack
            .iter()
            .rev()
            .find(|c| c.kind == ContextKind::Selector)
            .map(|c| c.selector.as_str())
    }

    fn finish(mut self) -> Result<String, ScssError> {
        let Some(innermost) = self.stack.last() else {
            return Ok(self.output);
        };

        match self.options.unclosed {
            UnclosedPolicy::Error => Err(ScssError::UnclosedBlock {
                line: innermost.line,
                selectors: self.stack.iter().map(|c| c.selector.clone()).collect(),
            }),
            UnclosedPolicy::AutoClose => {
                log::warn!(
                    "closing {} unclosed block(s), innermost opened at line {}",
                    self.stack.len(),
                    innermost.line
                );
                while !self.stack.is_empty() {
                    self.close(0)?;
                }
                Ok(self.output)
            }
        }
    }
}

fn is_group_rule(header: &str) -> bool {
    [
        "@media",
        "@supports",
        "@container",
        "@keyframes",
        "@-webkit-keyframes",
    ]
    .iter()
    .any(|at_rule| header.starts_with(at_rule))
}

/// Qualifies a nested selector header against its parent selector.
pub fn resolve_selector(header: &str, parent: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(header);
    let mut combined = Vec::with_capacity(parents.len() * children.len());

    for p in &parents {
        for c in &children {
            if c.contains('&') {
                combined.push(c.replace('&', p));
            } else {
                combined.push(format!("{} {}", p, c));
            }
        }
    }

    combined.join(", ")
}

/// Splits a selector list on top-level commas.
///
/// Commas inside `(...)` or `[...]`, as in `:is(.a, .b)`, do not split.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                terms.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    terms.push(selector[start..].trim());
    terms.retain(|t| !t.is_empty());
    terms
}

fn split_logical_lines(source: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut blocks = 0usize;

    for (idx, raw) in source.lines().enumerate() {
        let number = idx + 1;
        let mut current = String::new();
        let mut quote: Option<char> = None;
        let mut depth = 0usize;
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            if let Some(q) = quote {
                current.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
                continue;
            }

            match c {
                '"' | '\'' => {
                    quote = Some(c);
                    current.push(c);
                }
                '(' => {
                    depth += 1;
                    current.push(c);
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    current.push(c);
                }
                '{' | ';' if depth == 0 => {
                    current.push(c);
                    push_line(&mut lines, number, &mut current, blocks > 0);
                    if c == '{' {
                        blocks += 1;
                    }
                }
                '}' if depth == 0 => {
                    push_line(&mut lines, number, &mut current, blocks > 0);
                    blocks = blocks.saturating_sub(1);
                    lines.push(Line {
                        number,
                        text: "}".to_string(),
                    });
                }
                _ => current.push(c),
            }
        }
        push_line(&mut lines, number, &mut current, blocks > 0);
    }

    lines
}

fn push_line(lines: &mut Vec<Line>, number: usize, current: &mut String, in_block: bool) {
    let text = current.trim();
    if text.is_empty() {
        current.clear();
        return;
    }

    // Inside a block, text that has not reached `{`, `;` or `}` continues on
    // the next line. At top level only a selector list broken after a comma,
    // or a brace on its own line, does.
    if let Some(last) = lines.last_mut() {
        let open = !last.text.ends_with(['{', '}', ';']);
        let continues = last.text.ends_with(',') || (open && (in_block || text == "{"));
        if continues {
            last.text.push(' ');
            last.text.push_str(text);
            current.clear();
            return;
        }
    }

    lines.push(Line {
        number,
        text: text.to_string(),
    });
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(source: &str) -> String {
        flatten(source, &CompileOptions::default()).unwrap()
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn splits_single_line_blocks() {
        let lines = split_logical_lines(".a { color: red; .b { x: y } }");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, [".a {", "color: red;", ".b {", "x: y", "}", "}"]);
    }

    #[test]
    fn split_ignores_quoted_and_parenthesised_delimiters() {
        let lines = split_logical_lines(".a {\n  content: \"}\";\n  background: url(a;b.png);\n}");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            [".a {", "content: \"}\";", "background: url(a;b.png);", "}"]
        );
        assert_eq!(lines[3].number, 4);
    }

    #[test]
    fn joins_multiline_selector_headers() {
        let lines = split_logical_lines(".a,\n.b\n{\n  color: red;\n}");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, [".a, .b {", "color: red;", "}"]);
        assert_eq!(lines[0].number, 1);
    }

    #[test]
    fn joins_values_continued_on_the_next_line() {
        let lines = split_logical_lines(".a {\n  font-family:\n    Titillium, sans-serif;\n  margin:\n    0 }");
        assert_eq!(
            texts(&lines),
            [".a {", "font-family: Titillium, sans-serif;", "margin: 0", "}"]
        );
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn top_level_lines_without_terminator_stay_separate() {
        let lines = split_logical_lines("@charset \"UTF-8\"\n.a {\n  b: c;\n}");
        assert_eq!(texts(&lines), ["@charset \"UTF-8\"", ".a {", "b: c;", "}"]);
    }

    #[test]
    fn top_level_group_rule_properties_are_indented() {
        assert_eq!(
            flat("@media print {\n  color: red;\n}\n"),
            "@media print {\n  color: red;\n}\n"
        );
    }

    #[test]
    fn resolves_parent_reference() {
        assert_eq!(resolve_selector("&:hover", ".btn"), ".btn:hover");
        assert_eq!(resolve_selector("&__icon", ".btn"), ".btn__icon");
        assert_eq!(resolve_selector(".icon", ".btn"), ".btn .icon");
    }

    #[test]
    fn resolves_selector_lists_pairwise() {
        assert_eq!(
            resolve_selector(".c, &:focus", ".a, .b"),
            ".a .c, .a:focus, .b .c, .b:focus"
        );
    }

    #[test]
    fn pseudo_class_arguments_are_not_split() {
        assert_eq!(
            split_selector_list(":is(.a, .b) > p, li"),
            [":is(.a, .b) > p", "li"]
        );
    }

    #[test]
    fn missing_semicolon_is_added() {
        assert_eq!(flat(".a { color: red }"), ".a {\n  color: red;\n}\n");
    }

    #[test]
    fn top_level_text_passes_through() {
        assert_eq!(
            flat("@charset \"UTF-8\";\n.a { color: red; }"),
            "@charset \"UTF-8\";\n.a {\n  color: red;\n}\n"
        );
    }

    #[test]
    fn properties_after_child_form_a_second_rule() {
        assert_eq!(
            flat(".a { .b { color: red; } margin: 0; }"),
            ".a .b {\n  color: red;\n}\n.a {\n  margin: 0;\n}\n"
        );
    }

    #[test]
    fn media_inside_selector_wraps_parent_properties() {
        assert_eq!(
            flat(".a { color: blue; @media (min-width: 600px) { color: red; } }"),
            ".a {\n  color: blue;\n}\n@media (min-width: 600px) {\n.a {\n  color: red;\n}\n}\n"
        );
    }

    #[test]
    fn custom_indent() {
        let options = CompileOptions {
            indent: 4,
            ..CompileOptions::default()
        };
        assert_eq!(
            flatten(".a { b: c; }", &options).unwrap(),
            ".a {\n    b: c;\n}\n"
        );
    }
}
