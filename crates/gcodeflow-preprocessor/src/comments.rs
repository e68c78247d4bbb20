//! Comment stripping and extraction
//!
//! G-code comments come in two forms:
//! - Parentheses: `(this is a comment)`, possibly mid-line
//! - Semicolon: everything from `;` to end of line
//!
//! Nested parentheses are not supported; a run ends at the first `)`.

/// Remove every comment from a command line.
///
/// Strips each `(...)` run (first-closing match), then everything from
/// the first `;` onward, and trims surrounding whitespace. Interior
/// whitespace is left as-is. An unmatched `(` swallows the rest of the
/// line.
pub fn remove_comments(command: &str) -> String {
    let mut cmd = command.to_string();

    while let Some(start) = cmd.find('(') {
        match cmd[start..].find(')') {
            Some(len) => cmd.replace_range(start..start + len + 1, ""),
            None => {
                cmd.truncate(start);
                break;
            }
        }
    }

    if let Some(pos) = cmd.find(';') {
        cmd.truncate(pos);
    }

    cmd.trim().to_string()
}

/// Extract the first comment's inner text.
///
/// Returns the parenthesized content without the parentheses, or the
/// semicolon content without the semicolon, whichever appears first in
/// scan order. Returns an empty string when the line has no comment.
pub fn parse_comment(command: &str) -> String {
    for (i, c) in command.char_indices() {
        match c {
            '(' => {
                let inner = &command[i + 1..];
                let end = inner.find(')').unwrap_or(inner.len());
                return inner[..end].to_string();
            }
            ';' => return command[i + 1..].to_string(),
            _ => {}
        }
    }

    String::new()
}
