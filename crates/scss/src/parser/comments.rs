//! Comment stripping.
//!
//! Both comment styles are removed before any other pass:
//!
//! - Block comments (`/* ... */`), which may span lines. Newlines inside the
//!   comment are kept so later passes report the right line numbers.
//! - Line comments (`// ...`), up to the end of the line.
//!
//! Comment markers inside quoted strings or parentheses are left alone, so
//! `url(http://example.com/a.png)` and `content: "//"` survive.

/// Removes block and line comments from `source`.
pub fn strip_comments(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;
    let mut paren_depth = 0usize;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            output.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    output.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                output.push(c);
            }
            '(' => {
                paren_depth += 1;
                output.push(c);
            }
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                output.push(c);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    if inner == '\n' {
                        output.push('\n');
                    }
                    prev = inner;
                }
            }
            '/' if paren_depth == 0 && chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '\n' => {
                // Unbalanced parentheses never leak past the end of a line.
                paren_depth = 0;
                output.push(c);
            }
            _ => output.push(c),
        }
    }

    output
}
