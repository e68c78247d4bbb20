//! # gcodeflow Core
//!
//! Shared data model and error types for the gcodeflow preprocessor.
//! Provides the point/partial-point geometry primitives and the error
//! taxonomy used by the line interpreter and arc tessellation.

pub mod error;
pub mod position;

pub use error::{Error, Result};
pub use position::{PartialPoint, Point3};
