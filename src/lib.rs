//! Fluent HTTP API testing.
//!
//! Requests are sent with a blocking client, so the entry points must be
//! called from synchronous code rather than from inside an async runtime.
//!
//! ```no_run
//! use http_should::{get, Error, ResponseShould};
//!
//! fn check_health() -> Result<(), Error> {
//!     get("http://localhost:8080/health", |r| {
//!         r.header("Accept", "application/json");
//!     })?
//!     .should(|s| {
//!         s.have_status(200)?;
//!         s.contain_json_key_value("status", "UP")
//!     })?;
//!     Ok(())
//! }
//! ```

pub mod api_request;
pub mod config;
pub mod cookie;
pub mod error;
pub mod http_client;
pub mod json;
pub mod resource_loader;
pub mod should;

pub use api_request::api::{Api, delete, get, head, options, patch, post, put, trace};
pub use api_request::request_builder::RequestBuilder;
pub use config::Config;
pub use cookie::{Cookie, SameSite};
pub use error::Error;
pub use http_client::{
    error::TransportError,
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    reqwest_http_client::ReqwestHttpClient,
    response::{Response, ResponseHeaders},
};
pub use resource_loader::{FsResourceLoader, ResourceLoader};
pub use should::{
    assertion_failure::{AssertionFailure, Polarity},
    expect::{Expect, ResponseShould, Should, ShouldNot},
};
