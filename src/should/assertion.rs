//! Polarity-free evaluation of every response assertion.
//!
//! Each function reports whether the property holds for the response. The
//! `should` and `should not` surfaces only decide which outcome is a failure.

use bytes::Bytes;
use http::StatusCode;
use regex::Regex;
use serde_json::Value;

use crate::cookie::Cookie;
use crate::error::Error;
use crate::http_client::response::Response;
use crate::json::{self, json_contains, json_eq, lookup};
use crate::resource_loader::ResourceLoader;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Check {
    pub operation: &'static str,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

impl Check {
    fn new(
        operation: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
        passed: bool,
    ) -> Self {
        Self {
            operation,
            expected: expected.into(),
            actual: actual.into(),
            passed,
        }
    }
}

fn describe_status(status: u16) -> String {
    match StatusCode::from_u16(status) {
        Ok(code) => code.to_string(),
        Err(_) => status.to_string(),
    }
}

pub(crate) fn status(response: &Response, expected: u16) -> Check {
    Check::new(
        "have status",
        describe_status(expected),
        describe_status(response.status),
        response.status == expected,
    )
}

fn header_check(
    operation: &'static str,
    response: &Response,
    name: &str,
    expected: String,
    test: impl Fn(&str) -> bool,
) -> Check {
    let values = response.headers.values(name);
    Check::new(
        operation,
        format!("{name}: {expected}"),
        format!("{name}: {values:?}"),
        values.into_iter().any(test),
    )
}

pub(crate) fn header(response: &Response, name: &str) -> Check {
    header_check("have header", response, name, "any value".to_string(), |_| true)
}

pub(crate) fn header_value(response: &Response, name: &str, expected: &str) -> Check {
    header_check(
        "have header value",
        response,
        name,
        format!("{expected:?}"),
        |v| v == expected,
    )
}

pub(crate) fn header_matching(response: &Response, name: &str, pattern: &Regex) -> Check {
    header_check(
        "have header matching",
        response,
        name,
        format!("/{}/", pattern.as_str()),
        |v| pattern.is_match(v),
    )
}

pub(crate) fn header_satisfying<P>(response: &Response, name: &str, predicate: P) -> Check
where
    P: Fn(&str) -> bool,
{
    header_check(
        "have header satisfying",
        response,
        name,
        "a value accepted by the predicate".to_string(),
        predicate,
    )
}

pub(crate) fn header_values(response: &Response, name: &str, expected: &[&str]) -> Check {
    let values = response.headers.values(name);
    Check::new(
        "have header values",
        format!("{name}: {expected:?}"),
        format!("{name}: {values:?}"),
        values == expected,
    )
}

pub(crate) fn content_type(response: &Response, expected: &mime::Mime) -> Check {
    let charset = |m: &mime::Mime| {
        m.get_param(mime::CHARSET)
            .map(|c| c.as_str().to_ascii_lowercase())
    };

    let (actual, passed) = match response.content_type() {
        None => ("no Content-Type".to_string(), false),
        Some(raw) => match raw.parse::<mime::Mime>() {
            Ok(actual) => (
                actual.to_string(),
                actual.essence_str() == expected.essence_str() && charset(&actual) == charset(expected),
            ),
            Err(_) => (raw.to_string(), false),
        },
    };

    Check::new("have content type", expected.to_string(), actual, passed)
}

pub(crate) fn cookie(response: &Response, expected: &Cookie) -> Check {
    let cookies = response.set_cookies();
    let actual: Vec<String> = cookies.iter().map(Cookie::to_string).collect();
    Check::new(
        "have cookie",
        expected.to_string(),
        format!("{actual:?}"),
        cookies.iter().any(|c| expected.matches(c)),
    )
}

pub(crate) fn body_satisfying<P>(response: &Response, predicate: P) -> Check
where
    P: Fn(&Bytes) -> bool,
{
    Check::new(
        "have body satisfying",
        "a body accepted by the predicate",
        format!("{:?}", response.body_string()),
        predicate(&response.body),
    )
}

pub(crate) fn body(response: &Response, expected: &str) -> Check {
    let actual = response.body_string();
    let passed = actual == expected;
    Check::new("have body", format!("{expected:?}"), format!("{actual:?}"), passed)
}

fn body_json(response: &Response) -> Result<Value, String> {
    serde_json::from_slice(&response.body).map_err(|e| format!("invalid JSON ({e})"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "JSON null",
        Value::Bool(_) => "a JSON boolean",
        Value::Number(_) => "a JSON number",
        Value::String(_) => "a JSON string",
        Value::Array(_) => "a JSON array",
        Value::Object(_) => "a JSON object",
    }
}

pub(crate) fn valid_json(response: &Response) -> Check {
    let (actual, passed) = match body_json(response) {
        Ok(_) => ("valid JSON".to_string(), true),
        Err(reason) => (reason, false),
    };
    Check::new("be valid JSON", "valid JSON", actual, passed)
}

fn json_kind(response: &Response, operation: &'static str, expected: &'static str) -> Check {
    let (actual, passed) = match body_json(response) {
        Ok(value) => (kind(&value).to_string(), kind(&value) == expected),
        Err(reason) => (reason, false),
    };
    Check::new(operation, expected, actual, passed)
}

pub(crate) fn json_object(response: &Response) -> Check {
    json_kind(response, "be a JSON object", "a JSON object")
}

pub(crate) fn json_array(response: &Response) -> Check {
    json_kind(response, "be a JSON array", "a JSON array")
}

fn compare_json(
    response: &Response,
    operation: &'static str,
    expected: &Value,
    compare: fn(&Value, &Value) -> bool,
) -> Check {
    match body_json(response) {
        Ok(actual) => Check::new(
            operation,
            expected.to_string(),
            actual.to_string(),
            compare(expected, &actual),
        ),
        Err(reason) => Check::new(operation, expected.to_string(), reason, false),
    }
}

pub(crate) fn equal_json(response: &Response, expected: &str) -> Result<Check, Error> {
    let expected = json::parse(expected, "expected JSON")?;
    Ok(compare_json(response, "equal JSON", &expected, json_eq))
}

pub(crate) fn equal_specified_json(response: &Response, expected: &str) -> Result<Check, Error> {
    let expected = json::parse(expected, "expected JSON")?;
    Ok(compare_json(
        response,
        "equal specified JSON",
        &expected,
        json_contains,
    ))
}

pub(crate) fn json_key(response: &Response, path: &str) -> Check {
    let (actual, passed) = match body_json(response) {
        Ok(doc) => match lookup(&doc, path) {
            Some(value) => (format!("{path} = {value}"), true),
            None => (format!("no key {path}"), false),
        },
        Err(reason) => (reason, false),
    };
    Check::new("contain JSON key", format!("key {path}"), actual, passed)
}

pub(crate) fn json_key_value(response: &Response, path: &str, expected: &Value) -> Check {
    let (actual, passed) = match body_json(response) {
        Ok(doc) => match lookup(&doc, path) {
            Some(value) => (format!("{path} = {value}"), json_eq(expected, value)),
            None => (format!("no key {path}"), false),
        },
        Err(reason) => (reason, false),
    };
    Check::new(
        "contain JSON key value",
        format!("{path} = {expected}"),
        actual,
        passed,
    )
}

pub(crate) fn json_resource(
    response: &Response,
    loader: &dyn ResourceLoader,
    resource: &str,
) -> Result<Check, Error> {
    let text = loader.load(resource)?;
    let expected = json::parse(&text, &format!("resource {resource}"))?;
    Ok(compare_json(response, "match JSON resource", &expected, json_eq))
}

pub(crate) fn resource(
    response: &Response,
    loader: &dyn ResourceLoader,
    resource: &str,
) -> Result<Check, Error> {
    let expected = loader.load(resource)?;
    let actual = response.body_string();
    let passed = actual == expected;
    Ok(Check::new(
        "match resource",
        format!("{resource}: {expected:?}"),
        format!("{actual:?}"),
        passed,
    ))
}
