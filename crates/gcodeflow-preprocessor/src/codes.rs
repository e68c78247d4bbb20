//! Address and code extraction
//!
//! Pulls G/M codes and addressed values out of a command. Code scans run
//! over the whole string with cached regular expressions (a line may
//! carry several G-codes); coordinate lookups work on the token sequence
//! produced by [`crate::tokens::split_command`].

use regex::Regex;
use std::sync::OnceLock;

static G_CODE_REGEX: OnceLock<Regex> = OnceLock::new();
static M_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Collect the value substrings of every token matching an address.
///
/// The address letter comparison is case-insensitive and the letter
/// itself is removed from the returned values, preserving token order.
pub fn codes_with_address(tokens: &[String], address: char) -> Vec<String> {
    let address = address.to_ascii_uppercase();
    tokens
        .iter()
        .filter_map(|token| {
            let mut chars = token.chars();
            let first = chars.next()?;
            (first.to_ascii_uppercase() == address).then(|| chars.as_str().to_string())
        })
        .collect()
}

/// Extract every G-code number on the line, in order.
///
/// Leading zeros are stripped, so `G01` and `G1` both yield `1`. The
/// scan is independent of tokenization and tolerates arbitrary
/// surrounding text.
pub fn parse_g_codes(command: &str) -> Vec<u32> {
    let regex =
        G_CODE_REGEX.get_or_init(|| Regex::new(r"[Gg]0*(\d+)").expect("invalid regex pattern"));
    regex
        .captures_iter(command)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Extract every M-code number on the line, in order.
pub fn parse_m_codes(command: &str) -> Vec<u32> {
    let regex =
        M_CODE_REGEX.get_or_init(|| Regex::new(r"[Mm]0*(\d+)").expect("invalid regex pattern"));
    regex
        .captures_iter(command)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Parse the coordinate value for one axis letter.
///
/// Returns `None` when the axis is absent or its value does not parse.
/// When a command repeats an address (`"X1 X2"`), the **first** token
/// wins; this matches the dialect this interpreter descends from, where
/// the scan stops at the first hit. Other dialects resolve duplicates
/// last-wins, so the policy is pinned by test.
pub fn parse_coord(tokens: &[String], axis: char) -> Option<f64> {
    let axis = axis.to_ascii_uppercase();
    for token in tokens {
        let mut chars = token.chars();
        let Some(first) = chars.next() else { continue };
        if first.to_ascii_uppercase() == axis {
            return chars.as_str().parse().ok();
        }
    }

    None
}
