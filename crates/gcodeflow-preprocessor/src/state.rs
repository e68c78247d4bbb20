//! Caller-owned interpreter context
//!
//! The preprocessor itself is stateless; the caller owns a [`GcodeState`]
//! and passes it into each call. The pipeline folds emitted commands
//! back into it line by line, so position tracking and the G90/G91
//! motion mode stay correct across a whole program.

use gcodeflow_core::Point3;
use serde::{Deserialize, Serialize};

use crate::codes::parse_g_codes;
use crate::comments::remove_comments;
use crate::motion::update_point;
use crate::tokens::split_command;

/// Interpreter context for one pass over a program
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcodeState {
    /// Tool position before the next command
    pub position: Point3,
    /// Absolute (G90) vs relative (G91) motion coordinates
    pub absolute_motion: bool,
    /// Whether I/J/K words are absolute center coordinates rather than
    /// offsets from the arc's start point
    pub absolute_ijk: bool,
}

impl Default for GcodeState {
    fn default() -> Self {
        Self {
            position: Point3::default(),
            absolute_motion: true,
            absolute_ijk: false,
        }
    }
}

impl GcodeState {
    /// Create a state at the origin in absolute mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one emitted command into the state.
    ///
    /// Applies G90/G91 mode words first, then the X/Y/Z position words
    /// under the resulting mode. Comments are ignored. Commands without
    /// position words leave the position untouched.
    pub fn apply_command(&mut self, command: &str) {
        let cleaned = remove_comments(command);

        for code in parse_g_codes(&cleaned) {
            match code {
                90 => self.absolute_motion = true,
                91 => self.absolute_motion = false,
                _ => {}
            }
        }

        let tokens = split_command(&cleaned);
        self.position = update_point(&tokens, self.position, self.absolute_motion);
    }
}
