//! Typed HTTP client for the solar dashboard API
//!
//! Every request goes through [`ApiClient::fetch_json`], which turns transport
//! failures, non-2xx statuses and undecodable bodies into a single [`ApiError`].

pub mod client;
pub mod endpoint;
pub mod error;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use transport::{GlooTransport, HttpTransport, TransportError, TransportResponse};
