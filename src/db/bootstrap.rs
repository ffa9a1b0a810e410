//! One-shot schema bootstrap support.
//!
//! The schema script is compiled into the binary so it cannot drift from
//! the code that depends on it. The scanner below turns the script into
//! individual statements; execution is driven by the handle, best-effort.

/// Bundled schema script, applied when the table catalog is empty.
pub const SCHEMA: &str = include_str!("schema.sql");

/// Catalog probe: number of tables in the database.
pub const TABLE_COUNT_SQL: &str = "SELECT count(name) FROM sqlite_master WHERE type = 'table'";

/// Split an SQL script into executable statements.
///
/// Strips `--` line comments, keeps `;` appearing inside single-quoted
/// literals (with `''` escapes), and drops empty statements. A trailing
/// statement without a terminating `;` is kept.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut chars = script.chars().peekable();
    let mut in_literal = false;

    while let Some(c) = chars.next() {
        if in_literal {
            current.push(c);
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    // '' escapes a quote inside the literal
                    current.push('\'');
                    chars.next();
                } else {
                    in_literal = false;
                }
            }
            continue;
        }
        match c {
            '\'' => {
                in_literal = true;
                current.push(c);
            }
            '-' if chars.peek() == Some(&'-') => {
                // line comment, skip to end of line
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
                current.push('\n');
            }
            ';' => {
                push_statement(&mut statements, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_statement(&mut statements, &current);

    statements
}

fn push_statement(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
