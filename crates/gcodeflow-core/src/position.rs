//! Point types for tool position tracking
//!
//! This module provides:
//! - `Point3`: a fully specified 3-axis machine position
//! - `PartialPoint`: a per-axis optional update, where `None` means
//!   "this axis was not specified and keeps its prior value"

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete 3-axis position (X, Y, Z)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point3 {
    /// Create a point from explicit coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another point
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance to another point in the XY plane only
    ///
    /// Arc geometry works in the selected plane; Z rides along and is
    /// interpolated separately.
    pub fn distance_xy(&self, other: &Point3) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

/// Partial position for updating only specific axes
///
/// Each axis is an `Option` where `None` means "don't change this axis"
/// and `Some(value)` means "assign or offset by value". This replaces
/// sentinel encodings of unspecified axes: an unset axis can never leak
/// into arithmetic, it is either dropped or inherited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPoint {
    /// X-axis value, if the command specified one
    pub x: Option<f64>,
    /// Y-axis value, if the command specified one
    pub y: Option<f64>,
    /// Z-axis value, if the command specified one
    pub z: Option<f64>,
}

impl PartialPoint {
    /// Create an empty partial point (all axes unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no axis is specified
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Apply this update to a prior position.
    ///
    /// In absolute mode a present axis replaces the prior value; in
    /// relative mode it is added to it. Absent axes are inherited
    /// unchanged. This never fails.
    pub fn apply_to(&self, initial: Point3, absolute: bool) -> Point3 {
        let apply = |prior: f64, value: Option<f64>| match value {
            Some(v) if absolute => v,
            Some(v) => prior + v,
            None => prior,
        };

        Point3 {
            x: apply(initial.x, self.x),
            y: apply(initial.y, self.y),
            z: apply(initial.z, self.z),
        }
    }
}

impl From<Point3> for PartialPoint {
    fn from(point: Point3) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            z: Some(point.z),
        }
    }
}
