//! Query string tokenizer and key dispatch.

use alloc::string::String;
use alloc::vec::Vec;

use crate::calculators;
use crate::geometry::{EdgeInsets, Rect, Size};

use super::ParseWarning;
use super::instructions::Instructions;

/// Parse a full query string into instructions and warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = canonical(&percent_decode(raw_key));
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "frame" | "calc" | "calculator" => {
            let parsed = parse_calculator(value);
            if parsed.is_none() {
                invalid(warnings, "frame", value, "unknown calculator name");
            }
            set_or_warn(&mut inst.frame, parsed, key, value, warnings);
        }
        "sizing" | "sizing_frame" => {
            let parsed = parse_calculator(value);
            if parsed.is_none() {
                invalid(warnings, "sizing", value, "unknown calculator name");
            }
            set_or_warn(&mut inst.sizing_frame, parsed, key, value, warnings);
        }
        "size" => {
            let parsed = parse_size(value);
            if parsed.is_none() {
                invalid(warnings, "size", value, "expected WxH");
            }
            set_or_warn(&mut inst.size, parsed, key, value, warnings);
        }
        "rect" => {
            let parsed = parse_rect(value);
            if parsed.is_none() {
                invalid(warnings, "rect", value, "expected x,y,w,h");
            }
            set_or_warn(&mut inst.rect, parsed, key, value, warnings);
        }
        "spacing" => {
            let parsed = parse_insets(value);
            if parsed.is_none() {
                invalid(warnings, "spacing", value, "expected 1, 2 or 4 numbers");
            }
            set_or_warn(&mut inst.spacing, parsed, key, value, warnings);
        }
        "padding" => {
            let parsed = parse_insets(value);
            if parsed.is_none() {
                invalid(warnings, "padding", value, "expected 1, 2 or 4 numbers");
            }
            set_or_warn(&mut inst.padding, parsed, key, value, warnings);
        }
        "skip" => {
            let parsed = parse_bool(value);
            if parsed.is_none() {
                invalid(warnings, "skip", value, "expected a boolean");
            }
            set_or_warn(&mut inst.skip, parsed, key, value, warnings);
        }
        "ignore_size" => {
            let parsed = parse_bool(value);
            if parsed.is_none() {
                invalid(warnings, "ignore_size", value, "expected a boolean");
            }
            set_or_warn(&mut inst.ignore_size, parsed, key, value, warnings);
        }
        "save_as_previous" | "save" => {
            let parsed = parse_bool(value);
            if parsed.is_none() {
                invalid(warnings, "save_as_previous", value, "expected a boolean");
            }
            set_or_warn(&mut inst.save_as_previous, parsed, key, value, warnings);
        }
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

fn invalid(warnings: &mut Vec<ParseWarning>, key: &'static str, value: &str, reason: &'static str) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Comma-separated numbers. `None` if any of them fails to parse.
fn parse_list(s: &str) -> Option<Vec<f64>> {
    s.split(',').map(parse_f64).collect()
}

/// `a`, `v,h` or `t,l,b,r`.
fn parse_insets(s: &str) -> Option<EdgeInsets> {
    match parse_list(s)?.as_slice() {
        &[all] => Some(EdgeInsets::uniform(all)),
        &[vertical, horizontal] => Some(EdgeInsets::symmetric(vertical, horizontal)),
        &[top, left, bottom, right] => Some(EdgeInsets::new(top, left, bottom, right)),
        _ => None,
    }
}

/// `WxH`, also accepting `W,H`. Negative sizes are rejected.
fn parse_size(s: &str) -> Option<Size> {
    let s = s.trim();
    let (width, height) = s.split_once(['x', 'X', ','])?;
    let size = Size::new(parse_f64(width)?, parse_f64(height)?);
    (size.width >= 0.0 && size.height >= 0.0).then_some(size)
}

fn parse_rect(s: &str) -> Option<Rect> {
    match parse_list(s)?.as_slice() {
        &[x, y, width, height] => Some(Rect::new(x, y, width, height)),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Canonical calculator name, if it is registered.
fn parse_calculator(s: &str) -> Option<String> {
    let name = canonical(s);
    calculators::by_name(&name).map(|_| name)
}

// ---- Tokenizer ----

/// Split a query string on '&', skipping empty segments.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Trimmed, lowercase, with '-' and ' ' read as '_'.
fn canonical(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
