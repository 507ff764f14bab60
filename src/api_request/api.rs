use crate::api_request::request_builder::RequestBuilder;
use crate::error::Error;
use crate::http_client::{
    http_client::HttpClient, request::RequestMethod, response::Response,
    reqwest_http_client::ReqwestHttpClient,
};

/// Entry points for sending requests through a particular [`HttpClient`].
///
/// Requests block until the response arrives. The default client is a
/// `reqwest::blocking::Client`, which panics when built or used inside an
/// async runtime, so call these from synchronous code such as a plain
/// `#[test]`, not from `#[tokio::test]`.
pub struct Api {
    client: Box<dyn HttpClient>,
}

impl Api {
    pub fn new(client: impl HttpClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    pub fn get<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Get, uri, block)
    }

    pub fn patch<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Patch, uri, block)
    }

    pub fn post<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Post, uri, block)
    }

    pub fn put<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Put, uri, block)
    }

    pub fn delete<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Delete, uri, block)
    }

    pub fn head<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Head, uri, block)
    }

    pub fn options<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Options, uri, block)
    }

    pub fn trace<F>(&self, uri: impl Into<String>, block: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        self.perform_request_for_method(RequestMethod::Trace, uri, block)
    }

    fn perform_request_for_method<F>(
        &self,
        method: RequestMethod,
        uri: impl Into<String>,
        block: F,
    ) -> Result<Response, Error>
    where
        F: FnOnce(&mut RequestBuilder<'_>),
    {
        let mut builder = RequestBuilder::new(self.client.as_ref());
        builder.request(method, uri);
        block(&mut builder);
        builder.dispatch()
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new(ReqwestHttpClient::default())
    }
}

/// Sends a GET request with the default client.
///
/// Like every free verb function this blocks and must be called from
/// synchronous code; see [`Api`].
pub fn get<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().get(uri, block)
}

pub fn patch<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().patch(uri, block)
}

pub fn post<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().post(uri, block)
}

pub fn put<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().put(uri, block)
}

pub fn delete<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().delete(uri, block)
}

pub fn head<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().head(uri, block)
}

pub fn options<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().options(uri, block)
}

pub fn trace<F>(uri: impl Into<String>, block: F) -> Result<Response, Error>
where
    F: FnOnce(&mut RequestBuilder<'_>),
{
    Api::default().trace(uri, block)
}
