use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http_client::{
    error::{HttpClientErrorChecker, TransportError},
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    response::{Response, ResponseHeaders},
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Panics if called from within an async runtime.
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("Failed to build reqwest client"),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::from_config(&Config::from_env())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        info!("Dispatching {} {}", request.method, request.url);
        debug!("Request {:#?}", request);

        let headers = HeaderMap::<HeaderValue>::try_from(request.headers).map_err(|e| {
            warn!("Refusing request: {e}");
            e
        })?;

        let mut request_builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(headers);

        if let Some(body) = request.body {
            request_builder = request_builder.body(body);
        }

        let reqwest_response = request_builder.send().map_err(|e| {
            warn!("Request failed: {e}");
            TransportError::from(e)
        })?;

        let status = reqwest_response.status().as_u16();

        let headers: ResponseHeaders = reqwest_response.headers().into();

        let body = reqwest_response
            .bytes()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl From<&HeaderMap> for ResponseHeaders {
    fn from(headers: &HeaderMap) -> Self {
        let lines = headers
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        ResponseHeaders(lines)
    }
}

impl TryFrom<RequestHeaders> for HeaderMap {
    type Error = TransportError;

    fn try_from(h: RequestHeaders) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.iter() {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| TransportError::InvalidRequest(format!("header name {k:?}: {e}")))?;
            let value = HeaderValue::from_str(v).map_err(|e| {
                TransportError::InvalidRequest(format!("value of header {k}: {e}"))
            })?;
            header_map.append(name, value);
        }
        Ok(header_map)
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(value: RequestMethod) -> Self {
        match value {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Head => reqwest::Method::HEAD,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
            RequestMethod::Options => reqwest::Method::OPTIONS,
            RequestMethod::Trace => reqwest::Method::TRACE,
        }
    }
}
