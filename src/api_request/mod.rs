pub mod api;
pub mod request_builder;
