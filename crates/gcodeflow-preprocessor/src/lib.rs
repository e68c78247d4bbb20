//! # gcodeflow Preprocessor
//!
//! G-code line interpretation and preprocessing:
//! - Command tokenization and comment handling
//! - G/M code and coordinate extraction
//! - Position tracking across absolute/relative moves
//! - Arc center resolution (I/J/K and R forms) and tessellation into
//!   linear segments
//! - Command rewriting (feed override, decimal truncation, whitespace)
//! - A composable processor pipeline tying the pieces together
//!
//! Everything here is a pure function over its arguments; the only
//! state is the [`GcodeState`] the caller owns and threads through.

pub mod arc;
pub mod codes;
pub mod command;
pub mod comments;
pub mod format;
pub mod motion;
pub mod pipeline;
pub mod processors;
pub mod state;
pub mod tokens;

pub use arc::{calculate_sweep, convert_r_to_center, get_angle, points_along_arc};
pub use codes::{codes_with_address, parse_coord, parse_g_codes, parse_m_codes};
pub use command::GcodeCommand;
pub use comments::{parse_comment, remove_comments};
pub use format::{
    generate_move_from_points, override_speed, remove_all_whitespace, truncate_decimals,
};
pub use motion::{update_center, update_point};
pub use pipeline::ProcessorPipeline;
pub use processors::{
    ArcExpander, CommandProcessor, CommentProcessor, DecimalProcessor, FeedOverrideProcessor,
    ProcessorConfig, ProcessorHandle, WhitespaceProcessor,
};
pub use state::GcodeState;
pub use tokens::split_command;

// Re-export the shared geometry and error types so callers rarely need
// a direct gcodeflow-core dependency.
pub use gcodeflow_core::{Error, PartialPoint, Point3, Result};
