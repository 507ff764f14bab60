use std::{
    fmt::{self, Display},
    ops::Deref,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: RequestMethod,
    pub url: String,
    pub headers: RequestHeaders,
    pub body: Option<String>,
}

/// Header pairs in insertion order. A name may appear more than once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeaders(pub Vec<(String, String)>);

impl RequestHeaders {
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl Deref for RequestHeaders {
    type Target = Vec<(String, String)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for RequestHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        RequestHeaders(arr.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestMethod::Get => "GET",
            RequestMethod::Head => "HEAD",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Trace => "TRACE",
        };
        write!(f, "{}", s)
    }
}
