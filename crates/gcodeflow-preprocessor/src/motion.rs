//! Position and arc-center updates from command words
//!
//! Bridges the token layer and the geometry layer: coordinate words are
//! folded into a prior position, and arc center words (I/J/K or R) are
//! resolved into an absolute center point.

use gcodeflow_core::{Error, PartialPoint, Point3, Result};

use crate::arc::convert_r_to_center;
use crate::codes::parse_coord;

/// Update a point with the X/Y/Z words of a command.
///
/// Present axes are assigned (absolute mode) or added (relative mode);
/// absent axes inherit the prior value. Never fails.
pub fn update_point(tokens: &[String], initial: Point3, absolute: bool) -> Point3 {
    let words = PartialPoint {
        x: parse_coord(tokens, 'X'),
        y: parse_coord(tokens, 'Y'),
        z: parse_coord(tokens, 'Z'),
    };

    words.apply_to(initial, absolute)
}

/// Resolve the center of an arc command.
///
/// If any of I/J/K is present, the center is a position update from the
/// start point with `absolute_ijk` choosing between absolute center
/// coordinates and offsets from the start. Otherwise the R word is
/// required and the center is reconstructed geometrically; the two paths
/// are mutually exclusive. The result is always an absolute point.
pub fn update_center(
    tokens: &[String],
    start: Point3,
    end: Point3,
    absolute_ijk: bool,
    clockwise: bool,
) -> Result<Point3> {
    let offsets = PartialPoint {
        x: parse_coord(tokens, 'I'),
        y: parse_coord(tokens, 'J'),
        z: parse_coord(tokens, 'K'),
    };

    if offsets.is_empty() {
        let radius = parse_coord(tokens, 'R').ok_or_else(|| Error::DegenerateArc {
            reason: "arc specifies neither I/J/K offsets nor a radius".to_string(),
        })?;
        return convert_r_to_center(start, end, radius, clockwise);
    }

    Ok(offsets.apply_to(start, absolute_ijk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::split_command;

    #[test]
    fn test_update_point_absolute() {
        let tokens = split_command("G1 X10.5 Y20 F500");
        let next = update_point(&tokens, Point3::default(), true);
        assert_eq!(next, Point3::new(10.5, 20.0, 0.0));
    }

    #[test]
    fn test_update_point_relative() {
        let tokens = split_command("G1 X-1 Z2");
        let next = update_point(&tokens, Point3::new(5.0, 5.0, 5.0), false);
        assert_eq!(next, Point3::new(4.0, 5.0, 7.0));
    }

    #[test]
    fn test_update_point_without_words_is_identity() {
        let tokens = split_command("G4 P100");
        let initial = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(update_point(&tokens, initial, true), initial);
    }

    #[test]
    fn test_center_from_incremental_ijk() {
        let tokens = split_command("G2 X10 Y0 I5 J0");
        let center = update_center(
            &tokens,
            Point3::default(),
            Point3::new(10.0, 0.0, 0.0),
            false,
            true,
        )
        .unwrap();
        assert_eq!(center, Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_center_from_absolute_ijk() {
        let tokens = split_command("G3 X0 Y10 I0 J0");
        let center = update_center(
            &tokens,
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            true,
            false,
        )
        .unwrap();
        // J absent would inherit; here I/J are absolute center coords.
        assert_eq!(center, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_center_falls_back_to_radius_form() {
        let tokens = split_command("G2 X10 Y0 R5");
        let center = update_center(
            &tokens,
            Point3::default(),
            Point3::new(10.0, 0.0, 0.0),
            false,
            true,
        )
        .unwrap();
        assert!((center.x - 5.0).abs() < 1e-9);
        assert!(center.y.abs() < 1e-9);
    }

    #[test]
    fn test_center_without_offsets_or_radius_is_error() {
        let tokens = split_command("G2 X10 Y0");
        let err = update_center(
            &tokens,
            Point3::default(),
            Point3::new(10.0, 0.0, 0.0),
            false,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateArc { .. }));
    }
}
