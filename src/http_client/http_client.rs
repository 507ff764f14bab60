use crate::http_client::{error::TransportError, request::Request, response::Response};

#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    fn execute(&self, request: Request) -> Result<Response, TransportError>;
}
