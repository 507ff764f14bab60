#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: HttpClientErrorChecker> From<T> for TransportError {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() || err.is_request() {
            TransportError::Network(err.error_string())
        } else {
            TransportError::InvalidRequest(err.error_string())
        }
    }
}
