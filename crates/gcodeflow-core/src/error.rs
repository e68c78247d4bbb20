//! Error handling for gcodeflow
//!
//! Parsing and extraction are deliberately permissive and never fail;
//! absent data surfaces as empty sequences or `None`. The fallible
//! operations are arc geometry (a radius that cannot span its chord)
//! and pipeline execution, both represented here.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Preprocessor error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The commanded radius is too small to span the chord between the
    /// start and end points, so no arc center exists
    #[error("Arc radius {radius} cannot span a chord of length {chord}")]
    ArcRadiusTooSmall {
        /// The commanded radius.
        radius: f64,
        /// The straight-line distance between start and end.
        chord: f64,
    },

    /// The arc specification cannot be resolved into a center point
    #[error("Degenerate arc: {reason}")]
    DegenerateArc {
        /// Why the arc could not be resolved.
        reason: String,
    },

    /// A command processor failed while transforming a command
    #[error("Processor '{name}' error: {reason}")]
    Processor {
        /// The name of the processor that failed.
        name: String,
        /// The reason the processor failed.
        reason: String,
    },
}

/// Convenience result type for preprocessor operations
pub type Result<T> = std::result::Result<T, Error>;
