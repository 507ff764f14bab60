use std::marker::PhantomData;

use bytes::Bytes;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cookie::Cookie;
use crate::error::Error;
use crate::http_client::response::Response;
use crate::resource_loader::{FsResourceLoader, ResourceLoader};
use crate::should::assertion::{self, Check};
use crate::should::assertion_failure::{AssertionFailure, Polarity};

pub trait Direction {
    const POLARITY: Polarity;
}

pub enum Positive {}

pub enum Negative {}

impl Direction for Positive {
    const POLARITY: Polarity = Polarity::Should;
}

impl Direction for Negative {
    const POLARITY: Polarity = Polarity::ShouldNot;
}

/// Assertions against a single response.
///
/// Every method evaluates the same check for both directions; [`Should`]
/// fails when the check does not hold and [`ShouldNot`] fails when it does.
pub struct Expect<'a, D: Direction> {
    response: &'a Response,
    resources: Box<dyn ResourceLoader + 'a>,
    direction: PhantomData<D>,
}

pub type Should<'a> = Expect<'a, Positive>;
pub type ShouldNot<'a> = Expect<'a, Negative>;

impl<'a, D: Direction> Expect<'a, D> {
    pub fn new(response: &'a Response) -> Self {
        Self::with_resource_loader(response, FsResourceLoader::default())
    }

    pub fn with_resource_loader(response: &'a Response, loader: impl ResourceLoader + 'a) -> Self {
        Self {
            response,
            resources: Box::new(loader),
            direction: PhantomData,
        }
    }

    pub fn response(&self) -> &'a Response {
        self.response
    }

    fn verify(&self, check: Check) -> Result<(), Error> {
        let holds = match D::POLARITY {
            Polarity::Should => check.passed,
            Polarity::ShouldNot => !check.passed,
        };

        debug!(
            "Response {} {}: {}",
            D::POLARITY,
            check.operation,
            if holds { "ok" } else { "failed" }
        );

        if holds {
            return Ok(());
        }

        let failure = AssertionFailure {
            polarity: D::POLARITY,
            operation: check.operation,
            expected: check.expected,
            actual: check.actual,
        };
        warn!("{failure}");
        Err(failure.into())
    }

    pub fn have_status(&self, status: u16) -> Result<(), Error> {
        self.verify(assertion::status(self.response, status))
    }

    pub fn have_header(&self, name: &str) -> Result<(), Error> {
        self.verify(assertion::header(self.response, name))
    }

    pub fn have_header_value(&self, name: &str, value: &str) -> Result<(), Error> {
        self.verify(assertion::header_value(self.response, name, value))
    }

    pub fn have_header_matching(&self, name: &str, pattern: &Regex) -> Result<(), Error> {
        self.verify(assertion::header_matching(self.response, name, pattern))
    }

    pub fn have_header_satisfying<P>(&self, name: &str, predicate: P) -> Result<(), Error>
    where
        P: Fn(&str) -> bool,
    {
        self.verify(assertion::header_satisfying(self.response, name, predicate))
    }

    /// Compares every value of `name`, in order.
    pub fn have_header_values(&self, name: &str, values: &[&str]) -> Result<(), Error> {
        self.verify(assertion::header_values(self.response, name, values))
    }

    pub fn have_content_type(&self, content_type: &mime::Mime) -> Result<(), Error> {
        self.verify(assertion::content_type(self.response, content_type))
    }

    pub fn have_cookie(&self, cookie: &Cookie) -> Result<(), Error> {
        self.verify(assertion::cookie(self.response, cookie))
    }

    pub fn have_body_satisfying<P>(&self, predicate: P) -> Result<(), Error>
    where
        P: Fn(&Bytes) -> bool,
    {
        self.verify(assertion::body_satisfying(self.response, predicate))
    }

    pub fn have_body(&self, body: &str) -> Result<(), Error> {
        self.verify(assertion::body(self.response, body))
    }

    pub fn be_valid_json(&self) -> Result<(), Error> {
        self.verify(assertion::valid_json(self.response))
    }

    pub fn be_json_object(&self) -> Result<(), Error> {
        self.verify(assertion::json_object(self.response))
    }

    pub fn be_json_array(&self) -> Result<(), Error> {
        self.verify(assertion::json_array(self.response))
    }

    pub fn equal_json(&self, expected: &str) -> Result<(), Error> {
        self.verify(assertion::equal_json(self.response, expected)?)
    }

    /// Like [`Expect::equal_json`], but the body may contain keys that
    /// `expected` leaves out.
    pub fn equal_specified_json(&self, expected: &str) -> Result<(), Error> {
        self.verify(assertion::equal_specified_json(self.response, expected)?)
    }

    pub fn contain_json_key(&self, key: &str) -> Result<(), Error> {
        self.verify(assertion::json_key(self.response, key))
    }

    pub fn contain_json_key_value(&self, key: &str, value: impl Into<Value>) -> Result<(), Error> {
        self.verify(assertion::json_key_value(
            self.response,
            key,
            &value.into(),
        ))
    }

    pub fn match_json_resource(&self, resource: &str) -> Result<(), Error> {
        self.verify(assertion::json_resource(
            self.response,
            self.resources.as_ref(),
            resource,
        )?)
    }

    pub fn match_resource(&self, resource: &str) -> Result<(), Error> {
        self.verify(assertion::resource(
            self.response,
            self.resources.as_ref(),
            resource,
        )?)
    }
}

/// `response.should(|s| ...)` and `response.should_not(|s| ...)`.
///
/// The block runs against this response and the same response is handed
/// back, so assertion blocks can be chained with `?`.
pub trait ResponseShould {
    fn should<F>(&self, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&Should<'_>) -> Result<(), Error>;

    fn should_not<F>(&self, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&ShouldNot<'_>) -> Result<(), Error>;

    fn should_with<F>(&self, loader: &dyn ResourceLoader, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&Should<'_>) -> Result<(), Error>;

    fn should_not_with<F>(&self, loader: &dyn ResourceLoader, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&ShouldNot<'_>) -> Result<(), Error>;
}

impl ResponseShould for Response {
    fn should<F>(&self, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&Should<'_>) -> Result<(), Error>,
    {
        block(&Should::new(self))?;
        Ok(self)
    }

    fn should_not<F>(&self, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&ShouldNot<'_>) -> Result<(), Error>,
    {
        block(&ShouldNot::new(self))?;
        Ok(self)
    }

    fn should_with<F>(&self, loader: &dyn ResourceLoader, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&Should<'_>) -> Result<(), Error>,
    {
        block(&Should::with_resource_loader(self, loader))?;
        Ok(self)
    }

    fn should_not_with<F>(&self, loader: &dyn ResourceLoader, block: F) -> Result<&Self, Error>
    where
        F: FnOnce(&ShouldNot<'_>) -> Result<(), Error>,
    {
        block(&ShouldNot::with_resource_loader(self, loader))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::http_client::response::Response;
    use crate::should::assertion_failure::{AssertionFailure, Polarity};
    use crate::should::expect::{ResponseShould, Should, ShouldNot};

    #[test]
    fn should_return_the_same_response_instance() {
        let response = Response::new(200).with_body("{}");

        let returned = response
            .should(|s| {
                s.have_status(200)?;
                s.be_json_object()
            })
            .unwrap();

        assert!(std::ptr::eq(returned, &response));

        let chained = returned.should_not(|s| s.be_json_array()).unwrap();
        assert!(std::ptr::eq(chained, &response));
    }

    #[test]
    fn should_stop_at_the_first_failing_assertion() {
        let response = Response::new(404);
        let mut reached = false;

        let result = response.should(|s| {
            s.have_status(200)?;
            reached = true;
            Ok(())
        });

        assert!(!reached);
        match result {
            Err(Error::Assertion(AssertionFailure {
                polarity,
                operation,
                expected,
                actual,
            })) => {
                assert_eq!(polarity, Polarity::Should);
                assert_eq!(operation, "have status");
                assert_eq!(expected, "200 OK");
                assert_eq!(actual, "404 Not Found");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_not_reports_its_polarity() {
        let response = Response::new(200);

        let err = ShouldNot::new(&response).have_status(200).unwrap_err();

        assert!(matches!(
            err,
            Error::Assertion(AssertionFailure {
                polarity: Polarity::ShouldNot,
                ..
            })
        ));
        assert!(Should::new(&response).have_status(200).is_ok());
    }
}
