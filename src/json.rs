//! Structural JSON comparison and key-path lookup over `serde_json` values.

use serde_json::Value;

use crate::error::Error;

pub fn parse(text: &str, context: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|source| Error::Parse {
        context: context.to_string(),
        source,
    })
}

/// Deep equality. Object key order is irrelevant and numbers compare by
/// value, so `1` equals `1.0`.
pub fn json_eq(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => numbers_eq(e, a),
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| json_eq(e, a))
        }
        (Value::Object(e), Value::Object(a)) => {
            e.len() == a.len()
                && e.iter()
                    .all(|(key, e)| a.get(key).is_some_and(|a| json_eq(e, a)))
        }
        _ => expected == actual,
    }
}

/// Like [`json_eq`] but objects in `actual` may carry keys that `expected`
/// does not mention, at any depth.
pub fn json_contains(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| json_contains(e, a))
        }
        (Value::Object(e), Value::Object(a)) => e
            .iter()
            .all(|(key, e)| a.get(key).is_some_and(|a| json_contains(e, a))),
        _ => json_eq(expected, actual),
    }
}

fn numbers_eq(e: &serde_json::Number, a: &serde_json::Number) -> bool {
    if let (Some(e), Some(a)) = (e.as_i64(), a.as_i64()) {
        return e == a;
    }
    if let (Some(e), Some(a)) = (e.as_u64(), a.as_u64()) {
        return e == a;
    }
    match (e.as_f64(), a.as_f64()) {
        (Some(e), Some(a)) => e == a,
        _ => false,
    }
}

#[derive(Debug, PartialEq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Finds the value at `path`.
///
/// Accepts a plain top-level key, a dotted path (`user.address.city`) or a
/// JSONPath-style path (`$.users[0].name`, `$['odd.key']`).
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(value) = root.as_object().and_then(|o| o.get(path)) {
        return Some(value);
    }

    let segments = segments(path)?;
    if segments.is_empty() && path != "$" {
        return None;
    }

    segments
        .iter()
        .try_fold(root, |value, segment| match segment {
            Segment::Key(key) => value.as_object()?.get(key),
            Segment::Index(index) => value.as_array()?.get(*index),
        })
}

fn segments(path: &str) -> Option<Vec<Segment>> {
    let path = path.strip_prefix('$').unwrap_or(path);
    let mut chars = path.chars();
    let mut segments = Vec::new();
    let mut key = String::new();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !key.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut key)));
                }
            }
            '[' => {
                if !key.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut key)));
                }
                let mut inner = String::new();
                loop {
                    match chars.next()? {
                        ']' => break,
                        c => inner.push(c),
                    }
                }
                let inner = inner.trim();
                let quoted = inner
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .or_else(|| inner.strip_prefix('"').and_then(|s| s.strip_suffix('"')));
                match quoted {
                    Some(name) => segments.push(Segment::Key(name.to_string())),
                    None => segments.push(Segment::Index(inner.parse().ok()?)),
                }
            }
            c => key.push(c),
        }
    }

    if !key.is_empty() {
        segments.push(Segment::Key(key));
    }

    Some(segments)
}
