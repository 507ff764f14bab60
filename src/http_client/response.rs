use std::ops::Deref;

use bytes::Bytes;
use http::header::{CONTENT_TYPE, SET_COOKIE};

use crate::cookie::Cookie;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: ResponseHeaders,
    pub body: Bytes,
}

/// Response header lines in the order they were received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeaders(pub Vec<(String, String)>);

impl ResponseHeaders {
    /// Every value sent for `name`, compared case-insensitively.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl Deref for ResponseHeaders {
    type Target = Vec<(String, String)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for ResponseHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        ResponseHeaders(arr.into_iter().collect())
    }
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: ResponseHeaders::default(),
            body: Bytes::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.0.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_content_type(self, content_type: &mime::Mime) -> Self {
        self.with_header(CONTENT_TYPE.as_str(), content_type.to_string())
    }

    pub fn with_cookie(self, cookie: &Cookie) -> Self {
        self.with_header(SET_COOKIE.as_str(), cookie.to_string())
    }

    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.first(CONTENT_TYPE.as_str())
    }

    /// Cookies from every parseable `Set-Cookie` header.
    pub fn set_cookies(&self) -> Vec<Cookie> {
        self.headers
            .values(SET_COOKIE.as_str())
            .into_iter()
            .filter_map(Cookie::parse_set_cookie)
            .collect()
    }
}
