//! Command processor implementations
//!
//! Each processor wraps one preprocessing operation behind the
//! [`CommandProcessor`] trait so callers can compose them into a
//! [`crate::pipeline::ProcessorPipeline`] in whatever order a target
//! controller needs.

use gcodeflow_core::{PartialPoint, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::arc::points_along_arc;
use crate::codes::{parse_coord, parse_g_codes};
use crate::command::GcodeCommand;
use crate::comments::remove_comments;
use crate::format::{
    generate_move_from_points, override_speed, remove_all_whitespace, truncate_decimals,
};
use crate::motion::{update_center, update_point};
use crate::state::GcodeState;
use crate::tokens::split_command;

/// Configuration options for command processors
///
/// An enabled flag plus a free-form option map, so processors can be
/// configured uniformly from settings without each one growing its own
/// config type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Whether this processor is enabled
    pub enabled: bool,
    /// Processor-specific options
    pub options: HashMap<String, String>,
}

impl ProcessorConfig {
    /// Create an enabled configuration with no options
    pub fn new() -> Self {
        Self {
            enabled: true,
            options: HashMap::new(),
        }
    }

    /// Create a disabled configuration
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            options: HashMap::new(),
        }
    }

    /// Set a configuration option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get a configuration option
    pub fn get_option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|s| s.as_str())
    }

    fn f64_option(&self, key: &str, default: f64) -> f64 {
        self.get_option(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for G-code command processors
///
/// Processors transform commands on their way to a controller. Most
/// return a single command; some expand one into many (arc expansion)
/// or drop it entirely (comment-only lines). Returning an empty vector
/// skips the command.
pub trait CommandProcessor: Send + Sync {
    /// Name of this processor
    fn name(&self) -> &str;

    /// What this processor does
    fn description(&self) -> &str;

    /// Process a single command against the current interpreter state
    fn process(&self, command: &GcodeCommand, state: &GcodeState) -> Result<Vec<GcodeCommand>>;

    /// Check if this processor is enabled
    fn is_enabled(&self) -> bool {
        true
    }

    /// Get the configuration for this processor
    fn config(&self) -> &ProcessorConfig {
        static DEFAULT_CONFIG: std::sync::OnceLock<ProcessorConfig> = std::sync::OnceLock::new();
        DEFAULT_CONFIG.get_or_init(ProcessorConfig::new)
    }
}

/// Arc-wrapped processor for thread-safe sharing
pub type ProcessorHandle = Arc<dyn CommandProcessor>;

/// Removes every whitespace character from commands
///
/// Controllers accept the packed form and it shortens what goes over
/// the wire. Commands that are empty after stripping are dropped.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceProcessor;

impl WhitespaceProcessor {
    /// Create a new whitespace processor
    pub fn new() -> Self {
        Self
    }
}

impl CommandProcessor for WhitespaceProcessor {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn description(&self) -> &str {
        "Removes all whitespace from G-code commands"
    }

    fn process(&self, command: &GcodeCommand, _state: &GcodeState) -> Result<Vec<GcodeCommand>> {
        let stripped = remove_all_whitespace(&command.command);

        if stripped.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![command.rewritten(stripped)])
        }
    }
}

/// Removes G-code comments from commands
///
/// Both parenthesized and semicolon comments are stripped; lines that
/// were only a comment are dropped from the stream.
#[derive(Debug, Clone, Default)]
pub struct CommentProcessor;

impl CommentProcessor {
    /// Create a new comment processor
    pub fn new() -> Self {
        Self
    }
}

impl CommandProcessor for CommentProcessor {
    fn name(&self) -> &str {
        "comment"
    }

    fn description(&self) -> &str {
        "Removes G-code comments (parentheses and semicolon style)"
    }

    fn process(&self, command: &GcodeCommand, _state: &GcodeState) -> Result<Vec<GcodeCommand>> {
        let cleaned = remove_comments(&command.command);

        if cleaned.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![command.rewritten(cleaned)])
        }
    }
}

/// Truncates decimal values in G-code to a configurable precision
///
/// CAM output often carries more fractional digits than a controller
/// uses; fixing them shrinks programs without changing the toolpath.
#[derive(Debug, Clone)]
pub struct DecimalProcessor {
    config: ProcessorConfig,
}

impl DecimalProcessor {
    /// Create a decimal processor with the default precision (5 digits)
    pub fn new() -> Self {
        Self::with_precision(5)
    }

    /// Create a decimal processor with a specific precision
    pub fn with_precision(precision: u32) -> Self {
        let config = ProcessorConfig::new().with_option("precision", precision.to_string());
        Self { config }
    }
}

impl Default for DecimalProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandProcessor for DecimalProcessor {
    fn name(&self) -> &str {
        "decimal"
    }

    fn description(&self) -> &str {
        "Truncates decimal values to a fixed number of fractional digits"
    }

    fn process(&self, command: &GcodeCommand, _state: &GcodeState) -> Result<Vec<GcodeCommand>> {
        let precision = self
            .config
            .get_option("precision")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(5);

        Ok(vec![
            command.rewritten(truncate_decimals(precision, &command.command)),
        ])
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// Scales feed rates to a percentage of their programmed value
///
/// Rewrites each command's F word to `value / 100 · percent`, so every
/// feed in the program becomes a ratio of the requested speed. At 100%
/// commands pass through untouched.
#[derive(Debug, Clone)]
pub struct FeedOverrideProcessor {
    config: ProcessorConfig,
}

impl FeedOverrideProcessor {
    /// Create a feed override at 100% (pass-through)
    pub fn new() -> Self {
        Self::with_percent(100.0)
    }

    /// Create a feed override at a specific percentage
    pub fn with_percent(percent: f64) -> Self {
        let config = ProcessorConfig::new().with_option("percent", percent.to_string());
        Self { config }
    }
}

impl Default for FeedOverrideProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandProcessor for FeedOverrideProcessor {
    fn name(&self) -> &str {
        "feed_override"
    }

    fn description(&self) -> &str {
        "Scales feed rate words to a percentage of their programmed value"
    }

    fn process(&self, command: &GcodeCommand, _state: &GcodeState) -> Result<Vec<GcodeCommand>> {
        let percent = self.config.f64_option("percent", 100.0);

        if percent == 100.0 {
            return Ok(vec![command.clone()]);
        }

        Ok(vec![
            command.rewritten(override_speed(&command.command, percent)),
        ])
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// Expands arc commands (G2/G3) into linear segments
///
/// Resolves the arc's end point and center from the current interpreter
/// state, tessellates it, and emits one `G1` per segment in the active
/// distance mode. Arcs shorter than `min_arc_length` pass through
/// unexpanded; a geometrically impossible arc (radius unable to span
/// the chord) is a hard error.
///
/// Options: `min_arc_length` (default 0, disabled), `segment_length`
/// (default 0, meaning a fixed 20 segments per arc), `precision`
/// (default 4 fractional digits on emitted moves).
#[derive(Debug, Clone)]
pub struct ArcExpander {
    config: ProcessorConfig,
}

impl ArcExpander {
    /// Create an arc expander with default tessellation settings
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::new(),
        }
    }

    /// Create an arc expander with a maximum segment length
    pub fn with_segment_length(segment_length: f64) -> Self {
        let config = ProcessorConfig::new().with_option("segment_length", segment_length.to_string());
        Self { config }
    }

    /// Set the minimum arc length below which arcs pass through
    pub fn min_arc_length(mut self, min_arc_length: f64) -> Self {
        self.config = self
            .config
            .with_option("min_arc_length", min_arc_length.to_string());
        self
    }

    /// Set the precision of emitted segment moves
    pub fn precision(mut self, precision: usize) -> Self {
        self.config = self.config.with_option("precision", precision.to_string());
        self
    }
}

impl Default for ArcExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandProcessor for ArcExpander {
    fn name(&self) -> &str {
        "arc_expander"
    }

    fn description(&self) -> &str {
        "Expands arc commands (G2/G3) into linear segments"
    }

    fn process(&self, command: &GcodeCommand, state: &GcodeState) -> Result<Vec<GcodeCommand>> {
        let cleaned = remove_comments(&command.command);
        let codes = parse_g_codes(&cleaned);
        let clockwise = codes.contains(&2);

        if !clockwise && !codes.contains(&3) {
            return Ok(vec![command.clone()]);
        }

        let tokens = split_command(&cleaned);
        let end = update_point(&tokens, state.position, state.absolute_motion);
        let center = update_center(&tokens, state.position, end, state.absolute_ijk, clockwise)?;
        let radius = parse_coord(&tokens, 'R').map(f64::abs);

        let min_arc_length = self.config.f64_option("min_arc_length", 0.0);
        let segment_length = self.config.f64_option("segment_length", 0.0);
        let precision = self
            .config
            .get_option("precision")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(4);

        let points = points_along_arc(
            state.position,
            end,
            center,
            clockwise,
            radius,
            min_arc_length,
            segment_length,
        );

        if points.is_empty() {
            tracing::debug!(
                line = ?command.line_number,
                "arc below minimum length {}, not expanded",
                min_arc_length
            );
            return Ok(vec![command.clone()]);
        }

        let mut segments = Vec::with_capacity(points.len());
        let mut previous = state.position;

        for point in points {
            let line = generate_move_from_points(
                previous,
                PartialPoint::from(point),
                state.absolute_motion,
                precision,
            );
            segments.push(command.rewritten(line));
            previous = point;
        }

        Ok(segments)
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}
