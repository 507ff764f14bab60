#![allow(dead_code)]

use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use wiremock::{Mock, MockServer};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_test_writer()
        .try_init();
}

pub fn resources_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources")
}

/// A wiremock server driven from synchronous tests.
///
/// Requests are dispatched with the blocking client, which must not run
/// inside an async context, so the runtime only drives stub setup.
pub struct StubServer {
    server: MockServer,
    runtime: Runtime,
}

impl StubServer {
    pub fn start() -> Self {
        init_tracing();
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }
}

pub fn is_assertion_failure<T: std::fmt::Debug>(result: Result<T, http_should::Error>) -> bool {
    matches!(result, Err(http_should::Error::Assertion(_)))
}
