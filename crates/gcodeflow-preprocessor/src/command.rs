//! G-code command representation
//!
//! A thin carrier for one line of a program as it moves through the
//! processor pipeline. Rewrites keep the original text alongside the
//! current one so expanded commands stay traceable to their source line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One G-code command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcodeCommand {
    /// Current (possibly rewritten) command text
    pub command: String,
    /// Text as read from the program
    pub original: String,
    /// Line number in the source program, if known
    pub line_number: Option<u32>,
}

impl GcodeCommand {
    /// Create a command from raw line text
    pub fn new(line: impl Into<String>) -> Self {
        let line = line.into();
        Self {
            command: line.clone(),
            original: line,
            line_number: None,
        }
    }

    /// Create a command tagged with its source line number
    pub fn with_line_number(line: impl Into<String>, line_number: u32) -> Self {
        let mut command = Self::new(line);
        command.line_number = Some(line_number);
        command
    }

    /// Derive a command with new text and the same provenance
    pub fn rewritten(&self, text: impl Into<String>) -> Self {
        Self {
            command: text.into(),
            original: self.original.clone(),
            line_number: self.line_number,
        }
    }

    /// True when the current text is empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.command.trim().is_empty()
    }
}

impl fmt::Display for GcodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(n) => write!(f, "[{}] {}", n, self.command),
            None => write!(f, "{}", self.command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewritten_keeps_provenance() {
        let command = GcodeCommand::with_line_number("G2 X10 I5", 7);
        let segment = command.rewritten("G1X1.000Y2.000");
        assert_eq!(segment.command, "G1X1.000Y2.000");
        assert_eq!(segment.original, "G2 X10 I5");
        assert_eq!(segment.line_number, Some(7));
    }

    #[test]
    fn test_display_includes_line_number() {
        let command = GcodeCommand::with_line_number("G0 X0", 3);
        assert_eq!(command.to_string(), "[3] G0 X0");
        assert_eq!(GcodeCommand::new("G0 X0").to_string(), "G0 X0");
    }
}
