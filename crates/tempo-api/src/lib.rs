//! Async Rust client for the Tempo time-tracking REST API.
//!
//! One configured HTTP client ([`ApiClient`]) wraps the base URL,
//! credentials, and error shape; each resource module adds pure
//! request-mapping methods on top and unwraps the backend's response
//! envelopes. Every endpoint is namespaced by an organization id.
//!
//! Auth works either way the backend supports:
//! - **Token**: [`ApiClient::from_token`] injects a bearer header.
//! - **Session**: [`ApiClient::from_session`] + [`ApiClient::login`]
//!   hold the session cookie in a jar.
//!
//! No retries, no request de-duplication beyond the `Idempotency-Key`
//! header attached to every mutating request.

pub mod error;
pub mod transport;
pub mod types;

mod auth;
mod client;
mod clients;
mod members;
mod organization;
mod projects;
mod tags;
mod tasks;
mod time;

pub use client::ApiClient;
pub use error::Error;
pub use transport::TransportConfig;
