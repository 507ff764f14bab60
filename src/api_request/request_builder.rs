use tracing::debug;

use crate::error::Error;
use crate::http_client::{
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    response::Response,
};

/// Accumulates one request and sends it with [`RequestBuilder::dispatch`].
///
/// Obtained through the verb entry points ([`crate::get`], [`Api::post`],
/// ...), which set the method and URI before handing the builder to the
/// caller's configuration block.
///
/// [`Api::post`]: crate::api_request::api::Api::post
pub struct RequestBuilder<'a> {
    client: &'a dyn HttpClient,
    target: Option<(RequestMethod, String)>,
    headers: RequestHeaders,
    body: Option<String>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a dyn HttpClient) -> Self {
        Self {
            client,
            target: None,
            headers: RequestHeaders::default(),
            body: None,
        }
    }

    pub fn request(&mut self, method: RequestMethod, uri: impl Into<String>) -> &mut Self {
        self.target = Some((method, uri.into()));
        self
    }

    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.append(name, value);
        self
    }

    pub fn body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    pub fn dispatch(self) -> Result<Response, Error> {
        let (method, url) = match self.target {
            Some((method, url)) if !url.trim().is_empty() => (method, url),
            _ => return Err(Error::Precondition("Request is not set".to_string())),
        };

        let request = Request {
            method,
            url,
            headers: self.headers,
            body: self.body,
        };

        let response = self.client.execute(request)?;
        debug!("Received status {}", response.status);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use mockall::predicate::eq;

    use crate::api_request::request_builder::RequestBuilder;
    use crate::error::Error;
    use crate::http_client::{
        error::TransportError,
        http_client::MockHttpClient,
        request::{Request, RequestHeaders, RequestMethod},
        response::Response,
    };

    #[test]
    fn should_refuse_to_dispatch_an_unconfigured_request() {
        let mut client = MockHttpClient::new();
        client.expect_execute().never();

        let result = RequestBuilder::new(&client).dispatch();

        assert!(matches!(result, Err(Error::Precondition(m)) if m == "Request is not set"));
    }

    #[test]
    fn should_refuse_to_dispatch_an_empty_uri() {
        let mut client = MockHttpClient::new();
        client.expect_execute().never();

        let mut builder = RequestBuilder::new(&client);
        builder.request(RequestMethod::Get, "  ");

        assert!(matches!(builder.dispatch(), Err(Error::Precondition(_))));
    }

    #[test]
    fn should_send_the_accumulated_request_exactly_once() {
        let expected = Request {
            method: RequestMethod::Post,
            url: "http://localhost/api".to_string(),
            headers: RequestHeaders::from([
                ("Accept".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "text/plain".to_string()),
            ]),
            body: Some("second".to_string()),
        };

        let mut client = MockHttpClient::new();
        client
            .expect_execute()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(Response::new(201).with_body(Bytes::from("created"))));

        let mut builder = RequestBuilder::new(&client);
        builder
            .request(RequestMethod::Post, "http://localhost/api")
            .header("Accept", "application/json")
            .header("Accept", "text/plain")
            .body("first")
            .body("second");

        let response = builder.dispatch().unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body, Bytes::from("created"));
    }

    #[test]
    fn should_send_no_body_by_default() {
        let mut client = MockHttpClient::new();
        client
            .expect_execute()
            .withf(|request| request.body.is_none() && request.headers.is_empty())
            .times(1)
            .returning(|_| Ok(Response::new(204)));

        let mut builder = RequestBuilder::new(&client);
        builder.request(RequestMethod::Delete, "http://localhost/api/1");

        assert_eq!(builder.dispatch().unwrap().status, 204);
    }

    #[test]
    fn should_propagate_transport_errors_unchanged() {
        let mut client = MockHttpClient::new();
        client
            .expect_execute()
            .times(1)
            .returning(|_| Err(TransportError::Timeout));

        let mut builder = RequestBuilder::new(&client);
        builder.request(RequestMethod::Get, "http://localhost/slow");

        assert!(matches!(
            builder.dispatch(),
            Err(Error::Transport(TransportError::Timeout))
        ));
    }
}
