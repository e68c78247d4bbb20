//! Command string generation and rewriting
//!
//! The inverse of parsing: building linear moves back out of points, and
//! whole-line rewrites (feed override, decimal truncation, whitespace
//! removal) applied to commands on their way to a controller.

use gcodeflow_core::{PartialPoint, Point3};
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

static FEED_REGEX: OnceLock<Regex> = OnceLock::new();
static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Build a linear move (`G1`) from a start point to a target.
///
/// In absolute mode the target's values are emitted; in relative mode
/// the difference from `start` is. Unset axes are omitted entirely.
/// Values are fixed to `precision` decimal digits and words are packed
/// without separating spaces, the compact form controllers accept.
pub fn generate_move_from_points(
    start: Point3,
    end: PartialPoint,
    absolute: bool,
    precision: usize,
) -> String {
    let mut line = String::from("G1");

    for (letter, prior, target) in [
        ('X', start.x, end.x),
        ('Y', start.y, end.y),
        ('Z', start.z, end.z),
    ] {
        if let Some(target) = target {
            let value = if absolute { target } else { target - prior };
            let _ = write!(line, "{letter}{value:.precision$}");
        }
    }

    line
}

/// Scale the feed rate of a command to a percentage of its value.
///
/// Rewrites the first `F<number>` word to `number / 100 · percent`, so
/// every feed in a program becomes a ratio of the requested speed. A
/// command without a feed word is returned unchanged.
pub fn override_speed(command: &str, percent: f64) -> String {
    let regex =
        FEED_REGEX.get_or_init(|| Regex::new(r"[Ff]([0-9.]+)").expect("invalid regex pattern"));

    if let Some(caps) = regex.captures(command) {
        if let Ok(value) = caps[1].parse::<f64>() {
            let scaled = value / 100.0 * percent;
            return regex.replace(command, format!("F{scaled}")).into_owned();
        }
    }

    command.to_string()
}

/// Rewrite every decimal numeral to a fixed number of fractional digits.
///
/// `truncate_decimals(3, "G1 X10.12345")` yields `"G1 X10.123"`; values
/// with fewer digits are padded. Integers without a decimal point are
/// left alone.
pub fn truncate_decimals(length: usize, command: &str) -> String {
    let regex =
        DECIMAL_REGEX.get_or_init(|| Regex::new(r"\d*\.\d*").expect("invalid regex pattern"));

    regex
        .replace_all(command, |caps: &regex::Captures| match caps[0].parse::<f64>() {
            Ok(value) => format!("{value:.length$}"),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

/// Remove every whitespace character from a command.
pub fn remove_all_whitespace(command: &str) -> String {
    command.chars().filter(|c| !c.is_whitespace()).collect()
}
