//! # Lenient Parameter Parsing
//!
//! Query parameters never make a render fail. Anything that does not parse
//! falls back to its default, so every request produces an image.
//!
//! Integers use leading-integer semantics: surrounding whitespace and a sign
//! are accepted and parsing stops at the first non-digit, so `"12px"` is 12
//! and `"7.9"` is 7.

use std::collections::HashMap;

use crate::render::canvas::MAX_DIMENSION;
use crate::render::color::Rgb;

/// Query parameters as received.
pub type Params = HashMap<String, String>;

/// Parse the leading integer of `s`. Returns `None` when there are no digits.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn get<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Integer knob: zero and negative values are kept as given.
pub fn int_param(params: &Params, key: &str, default: i32) -> i32 {
    get(params, key)
        .and_then(parse_int_prefix)
        .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(default)
}

/// Canvas dimension: zero, negative or unparsable values use `default`, and
/// the result never exceeds [`MAX_DIMENSION`].
pub fn dimension_param(params: &Params, key: &str, default: u32) -> u32 {
    get(params, key)
        .and_then(parse_int_prefix)
        .filter(|&v| v > 0)
        .map(|v| v.min(MAX_DIMENSION as i64) as u32)
        .unwrap_or(default)
}

/// Hex color without (or with) a leading `#`.
pub fn color_param(params: &Params, key: &str, default: Rgb) -> Rgb {
    Rgb::parse_or(get(params, key), default)
}

/// Optional free-form string parameter. Empty values count as absent.
pub fn string_param(params: &Params, key: &str) -> Option<String> {
    get(params, key).map(str::to_string)
}

/// Parse `key=value` pairs, as given on the command line.
pub fn parse_pairs<I, S>(pairs: I) -> Result<Params, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|pair| {
            let pair = pair.as_ref();
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .ok_or_else(|| format!("expected key=value, got '{}'", pair))
        })
        .collect()
}
