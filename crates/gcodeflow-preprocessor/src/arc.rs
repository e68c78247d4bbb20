//! Arc geometry: center recovery, sweep resolution, and tessellation
//!
//! Arcs arrive in two forms. The I/J/K form names the center directly
//! (handled in [`crate::motion`]); the R form implies it, and
//! [`convert_r_to_center`] reconstructs it here. Tessellation turns a
//! resolved arc into short linear segments for consumers that only
//! understand straight moves.

use gcodeflow_core::{Error, Point3, Result};
use std::f64::consts::TAU;

/// Segment count used when no maximum segment length is configured.
const DEFAULT_SEGMENTS: usize = 20;

/// Reconstruct an arc center from a commanded radius.
///
/// A positive radius selects the minor arc for the given chord and
/// direction; a negative radius selects the major arc. The returned
/// center is always an absolute point.
///
/// Fails when the radius cannot span the chord (`4R² < chord²`) or when
/// start and end coincide in XY, which leaves the center unconstrained.
pub fn convert_r_to_center(
    start: Point3,
    end: Point3,
    radius: f64,
    clockwise: bool,
) -> Result<Point3> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let chord = dx.hypot(dy);

    if chord == 0.0 {
        return Err(Error::DegenerateArc {
            reason: "start and end coincide, arc center is unconstrained".to_string(),
        });
    }

    let h_squared = 4.0 * radius * radius - dx * dx - dy * dy;
    if h_squared < 0.0 {
        return Err(Error::ArcRadiusTooSmall { radius, chord });
    }

    let mut h = -h_squared.sqrt() / chord;
    if !clockwise {
        h = -h;
    }
    // Negative radius selects the opposite (major) arc.
    if radius < 0.0 {
        h = -h;
    }

    Ok(Point3::new(
        start.x + 0.5 * (dx - dy * h),
        start.y + 0.5 * (dy + dx * h),
        start.z,
    ))
}

/// Angle of `point` as seen from `center`, in `[0, 2π)`.
pub fn get_angle(center: Point3, point: Point3) -> f64 {
    (point.y - center.y)
        .atan2(point.x - center.x)
        .rem_euclid(TAU)
}

/// Angular distance from `start_angle` to `end_angle` in the requested
/// direction, in `(0, 2π]`.
///
/// Equal angles mean a full circle. Otherwise the distance is
/// wrap-around aware: traveling counter-clockwise past the 0/2π seam
/// (or clockwise past it the other way) adds the missing turn.
pub fn calculate_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    if start_angle == end_angle {
        return TAU;
    }

    if !clockwise && end_angle < start_angle {
        (TAU - start_angle) + end_angle
    } else if clockwise && end_angle > start_angle {
        (TAU - end_angle) + start_angle
    } else {
        (end_angle - start_angle).abs()
    }
}

/// Generate the points approximating an arc, ending at `end` exactly.
///
/// The sequence starts conceptually at `start` (which is not included)
/// and always terminates with the literal `end` point rather than one
/// recomputed from the final angle, so the arc's termination carries no
/// floating-point drift. Z advances linearly with the sweep.
///
/// When `radius` is `None` it is derived from the center/start distance
/// in XY. A positive `min_arc_length` suppresses arcs shorter than the
/// threshold by returning an empty sequence, the signal to treat the
/// command as a non-expanding move. A positive `segment_length` sets the
/// segment count to `ceil(arc_length / segment_length)` (at least one);
/// otherwise a fixed default of 20 segments is used.
pub fn points_along_arc(
    start: Point3,
    end: Point3,
    center: Point3,
    clockwise: bool,
    radius: Option<f64>,
    min_arc_length: f64,
    segment_length: f64,
) -> Vec<Point3> {
    let radius = radius.unwrap_or_else(|| center.distance_xy(&start));
    let start_angle = get_angle(center, start);
    let end_angle = get_angle(center, end);
    let sweep = calculate_sweep(start_angle, end_angle, clockwise);
    let arc_length = sweep * radius;

    if min_arc_length > 0.0 && arc_length < min_arc_length {
        return Vec::new();
    }

    let segments = if segment_length > 0.0 {
        ((arc_length / segment_length).ceil() as usize).max(1)
    } else {
        DEFAULT_SEGMENTS
    };

    let mut points = Vec::with_capacity(segments);
    let z_step = (end.z - start.z) / segments as f64;

    for i in 1..segments {
        let step = i as f64 * sweep / segments as f64;
        let angle = if clockwise {
            start_angle - step
        } else {
            start_angle + step
        };
        let angle = angle.rem_euclid(TAU);

        points.push(Point3::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
            start.z + z_step * i as f64,
        ));
    }

    points.push(end);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_angle_by_quadrant() {
        let center = Point3::default();
        assert!((get_angle(center, Point3::new(5.0, 0.0, 0.0)) - 0.0).abs() < EPS);
        assert!((get_angle(center, Point3::new(0.0, 3.0, 0.0)) - FRAC_PI_2).abs() < EPS);
        assert!((get_angle(center, Point3::new(-2.0, 0.0, 0.0)) - PI).abs() < EPS);
        assert!((get_angle(center, Point3::new(0.0, -1.0, 0.0)) - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_sweep_equal_angles_is_full_circle() {
        assert!((calculate_sweep(1.25, 1.25, true) - TAU).abs() < EPS);
        assert!((calculate_sweep(1.25, 1.25, false) - TAU).abs() < EPS);
    }

    #[test]
    fn test_sweep_wraps_across_zero() {
        // CCW from 270° to 45°: 135° of travel through the seam.
        let sweep = calculate_sweep(3.0 * FRAC_PI_2, FRAC_PI_2 / 2.0, false);
        assert!((sweep - 3.0 * PI / 4.0).abs() < EPS);

        // CW from 45° to 270°: the same 135° the other way.
        let sweep = calculate_sweep(FRAC_PI_2 / 2.0, 3.0 * FRAC_PI_2, true);
        assert!((sweep - 3.0 * PI / 4.0).abs() < EPS);
    }

    #[test]
    fn test_r_center_equidistant_from_endpoints() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(10.0, 0.0, 0.0);
        let center = convert_r_to_center(start, end, 5.0, false).unwrap();
        assert!((center.distance_xy(&start) - 5.0).abs() < EPS);
        assert!((center.distance_xy(&end) - 5.0).abs() < EPS);

        let center = convert_r_to_center(start, end, 7.5, true).unwrap();
        assert!((center.distance_xy(&start) - 7.5).abs() < EPS);
        assert!((center.distance_xy(&end) - 7.5).abs() < EPS);
    }

    #[test]
    fn test_r_center_negative_radius_picks_major_arc() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(10.0, 0.0, 0.0);
        let minor = convert_r_to_center(start, end, 10.0, false).unwrap();
        let major = convert_r_to_center(start, end, -10.0, false).unwrap();
        // Same circle family, centers mirrored across the chord.
        assert!((minor.y + major.y).abs() < EPS);
        assert!((minor.x - major.x).abs() < EPS);
        assert!((major.distance_xy(&start) - 10.0).abs() < EPS);
    }

    #[test]
    fn test_r_center_semicircle_degenerates_to_midpoint() {
        // Chord length exactly 2R: h² = 0, center is the chord midpoint.
        let start = Point3::new(-5.0, 0.0, 0.0);
        let end = Point3::new(5.0, 0.0, 0.0);
        let center = convert_r_to_center(start, end, 5.0, false).unwrap();
        assert!(center.distance_xy(&Point3::new(0.0, 0.0, 0.0)) < EPS);
    }

    #[test]
    fn test_r_center_radius_too_small_is_error() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(10.0, 0.0, 0.0);
        let err = convert_r_to_center(start, end, 2.0, false).unwrap_err();
        assert!(matches!(err, Error::ArcRadiusTooSmall { .. }));
    }

    #[test]
    fn test_r_center_zero_chord_is_error() {
        let p = Point3::new(1.0, 2.0, 0.0);
        let err = convert_r_to_center(p, p, 4.0, true).unwrap_err();
        assert!(matches!(err, Error::DegenerateArc { .. }));
    }

    #[test]
    fn test_quarter_arc_ends_exactly_at_end() {
        let start = Point3::new(10.0, 0.0, 0.0);
        let end = Point3::new(0.0, 10.0, 0.0);
        let center = Point3::new(0.0, 0.0, 0.0);

        let points = points_along_arc(start, end, center, false, None, 0.0, 0.0);
        assert!(points.len() >= 2);
        assert_eq!(*points.last().unwrap(), end);

        // Default count is 20 segments; the first interpolated point sits
        // one step past the start, not on it.
        assert_eq!(points.len(), DEFAULT_SEGMENTS);
        let first = points[0];
        assert!(first.distance_xy(&start) > 0.0);
        let step = FRAC_PI_2 / DEFAULT_SEGMENTS as f64;
        assert!((get_angle(center, first) - step).abs() < 1e-6);
    }

    #[test]
    fn test_arc_points_stay_on_radius() {
        let start = Point3::new(10.0, 0.0, 0.0);
        let end = Point3::new(-10.0, 0.0, 0.0);
        let center = Point3::new(0.0, 0.0, 0.0);

        for point in points_along_arc(start, end, center, true, None, 0.0, 0.0) {
            assert!((center.distance_xy(&point) - 10.0).abs() < EPS);
        }
    }

    #[test]
    fn test_segment_length_drives_count() {
        let start = Point3::new(10.0, 0.0, 0.0);
        let end = Point3::new(0.0, 10.0, 0.0);
        let center = Point3::new(0.0, 0.0, 0.0);

        // Quarter circle of radius 10: length ≈ 15.708, so 1.0-long
        // segments need 16 of them.
        let points = points_along_arc(start, end, center, false, None, 0.0, 1.0);
        assert_eq!(points.len(), 16);

        // A segment length longer than the arc still yields one segment.
        let points = points_along_arc(start, end, center, false, None, 0.0, 100.0);
        assert_eq!(points, vec![end]);
    }

    #[test]
    fn test_min_arc_length_suppresses_short_arcs() {
        let start = Point3::new(1.0, 0.0, 0.0);
        let end = Point3::new(0.0, 1.0, 0.0);
        let center = Point3::new(0.0, 0.0, 0.0);

        let points = points_along_arc(start, end, center, false, None, 10.0, 0.0);
        assert!(points.is_empty());
    }

    #[test]
    fn test_z_interpolates_across_helix() {
        let start = Point3::new(10.0, 0.0, 0.0);
        let end = Point3::new(0.0, 10.0, 4.0);
        let center = Point3::new(0.0, 0.0, 0.0);

        let points = points_along_arc(start, end, center, false, None, 0.0, 0.0);
        let mid = points[points.len() / 2 - 1];
        assert!((mid.z - 2.0).abs() < 0.3);
        assert_eq!(points.last().unwrap().z, 4.0);

        // Z climbs monotonically.
        let mut prev = start.z;
        for point in &points {
            assert!(point.z >= prev);
            prev = point.z;
        }
    }

    #[test]
    fn test_clockwise_arc_regresses_angle() {
        let start = Point3::new(0.0, 10.0, 0.0);
        let end = Point3::new(10.0, 0.0, 0.0);
        let center = Point3::new(0.0, 0.0, 0.0);

        let points = points_along_arc(start, end, center, true, None, 0.0, 0.0);
        let first = get_angle(center, points[0]);
        assert!(first < FRAC_PI_2);
        assert!(first > 0.0);
    }
}
