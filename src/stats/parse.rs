//! Lenient numeric parsing for imported CSV fields.
//!
//! Both parsers read the longest numeric prefix of the field and ignore the
//! rest, so `"45 visite"` counts as 45 visitors and `"3.5 s"` as 3.5 seconds.

use regex::Regex;
use std::sync::OnceLock;

fn int_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+").expect("valid integer pattern"))
}

fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float pattern")
    })
}

/// Parse the leading integer of a field.
///
/// Returns `None` when the trimmed field does not start with an optional sign
/// followed by at least one digit, or when the value overflows `i64`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let m = int_prefix().find(s.trim())?;
    m.as_str().parse().ok()
}

/// Parse the leading floating-point number of a field.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let m = float_prefix().find(s.trim())?;
    m.as_str().parse().ok()
}

/// Seconds encoded in a session duration such as `"210s"`.
///
/// The `s` suffix is optional; anything unparsable counts as zero.
pub fn parse_seconds(s: &str) -> f64 {
    let s = s.trim();
    let s = s.strip_suffix('s').unwrap_or(s);
    parse_leading_float(s).filter(|v| v.is_finite()).unwrap_or(0.0)
}
