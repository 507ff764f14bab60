use std::path::PathBuf;

use crate::http_client::error::TransportError;
use crate::should::assertion_failure::AssertionFailure;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error("Invalid JSON in {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource {resource} not found at {}", path.display())]
    ResourceNotFound {
        resource: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read resource {resource} at {}", path.display())]
    ResourceRead {
        resource: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
