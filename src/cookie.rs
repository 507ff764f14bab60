//! Cookies as sent in `Set-Cookie` response headers.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        };
        write!(f, "{}", s)
    }
}

/// A cookie set by a response.
///
/// When used as an expectation only the name, the value, and the attributes
/// that were explicitly set take part in matching (see [`Cookie::matches`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age: Option<i64>,
    pub expires: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn with_expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    /// Parses a `Set-Cookie` header value. Unknown attributes are ignored.
    pub fn parse_set_cookie(header: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut cookie = Cookie::new(name, value.trim().trim_matches('"'));

        for part in parts {
            let part = part.trim();
            match part.split_once('=') {
                Some((attr, val)) => {
                    let val = val.trim();
                    match attr.trim().to_ascii_lowercase().as_str() {
                        "path" => cookie.path = Some(val.to_string()),
                        "domain" => cookie.domain = Some(val.trim_start_matches('.').to_string()),
                        "max-age" => cookie.max_age = val.parse().ok(),
                        "expires" => cookie.expires = Some(val.to_string()),
                        "samesite" => {
                            cookie.same_site = match val.to_ascii_lowercase().as_str() {
                                "strict" => Some(SameSite::Strict),
                                "lax" => Some(SameSite::Lax),
                                "none" => Some(SameSite::None),
                                _ => None,
                            }
                        }
                        _ => {}
                    }
                }
                None => match part.to_ascii_lowercase().as_str() {
                    "secure" => cookie.secure = true,
                    "httponly" => cookie.http_only = true,
                    _ => {}
                },
            }
        }

        Some(cookie)
    }

    /// True when `actual` has this cookie's name and value and agrees with
    /// every attribute set on `self`. Flags only constrain when `true`.
    pub fn matches(&self, actual: &Cookie) -> bool {
        fn agrees<T: PartialEq>(expected: &Option<T>, actual: &Option<T>) -> bool {
            expected.is_none() || expected == actual
        }

        self.name == actual.name
            && self.value == actual.value
            && agrees(&self.path, &actual.path)
            && agrees(
                &self.domain.as_ref().map(|d| d.to_ascii_lowercase()),
                &actual.domain.as_ref().map(|d| d.to_ascii_lowercase()),
            )
            && agrees(&self.max_age, &actual.max_age)
            && agrees(&self.expires, &actual.expires)
            && agrees(&self.same_site, &actual.same_site)
            && (!self.secure || actual.secure)
            && (!self.http_only || actual.http_only)
    }
}

impl Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(path) = &self.path {
            write!(f, "; Path={}", path)?;
        }
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={}", domain)?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={}", max_age)?;
        }
        if let Some(expires) = &self.expires {
            write!(f, "; Expires={}", expires)?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; SameSite={}", same_site)?;
        }
        if self.secure {
            write!(f, "; Secure")?;
        }
        if self.http_only {
            write!(f, "; HttpOnly")?;
        }
        Ok(())
    }
}
