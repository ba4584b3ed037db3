//! Minimal source formatter for rendered TypeScript.
//!
//! Re-indents every line by bracket depth (`{`, `(`, `[`), collapses runs of blank
//! lines, drops blank lines right inside a block, and applies the configured line
//! ending. Brackets inside string literals and `//` comments are ignored.

use gqlforge_config::FormatOptions;

use crate::error::FormatError;

/// Bracket balance of one line.
struct LineScan {
    /// Closing brackets before any other code on the line.
    leading_closes: usize,
    opens: usize,
    closes: usize,
}

fn scan_line(line: &str, line_no: usize) -> Result<LineScan, FormatError> {
    let mut scan = LineScan {
        leading_closes: 0,
        opens: 0,
        closes: 0,
    };
    let mut leading = true;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            match ch {
                '\\' => {
                    chars.next();
                }
                c if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => {
                quote = Some(ch);
                leading = false;
            }
            '/' if chars.peek() == Some(&'/') => break,
            '{' | '(' | '[' => {
                scan.opens += 1;
                leading = false;
            }
            '}' | ')' | ']' => {
                scan.closes += 1;
                if leading {
                    scan.leading_closes += 1;
                }
            }
            c if c.is_whitespace() => {}
            _ => leading = false,
        }
    }

    if quote.is_some() {
        return Err(FormatError::UnterminatedString { line: line_no });
    }
    Ok(scan)
}

/// Format rendered source text.
pub fn format_source(source: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let indent_unit = " ".repeat(options.tab_width);
    let mut depth: usize = 0;
    let mut out: Vec<String> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            let after_open = out.last().is_some_and(|l| l.ends_with('{'));
            let after_blank = out.last().is_some_and(String::is_empty);
            if !out.is_empty() && !after_open && !after_blank {
                out.push(String::new());
            }
            continue;
        }

        let scan = scan_line(line, line_no)?;
        let level = depth.checked_sub(scan.leading_closes).ok_or_else(|| {
            FormatError::UnexpectedClose {
                line: line_no,
                found: line.chars().next().unwrap_or('}'),
            }
        })?;
        depth = (depth + scan.opens)
            .checked_sub(scan.closes)
            .ok_or_else(|| FormatError::UnexpectedClose {
                line: line_no,
                found: line
                    .chars()
                    .rev()
                    .find(|c| matches!(c, '}' | ')' | ']'))
                    .unwrap_or('}'),
            })?;

        if scan.leading_closes > 0 && out.last().is_some_and(String::is_empty) {
            out.pop();
        }
        out.push(format!("{}{}", indent_unit.repeat(level), line));
    }

    if depth > 0 {
        return Err(FormatError::Unclosed { depth });
    }
    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }

    let eol = options.end_of_line.as_str();
    let mut text = out.join(eol);
    text.push_str(eol);
    Ok(text)
}
