//! HTTP gateway to the GearGuard backend.
//!
//! Every screen talks to the server through one [`ApiClient`]: requests are
//! described by [`ApiRequest`], decorated by the [`RequestMiddleware`]
//! pipeline and executed by a [`Transport`]. Failures are normalised into
//! [`ApiError`].

pub mod client;
pub mod crud;
pub mod error;
pub mod middleware;
pub mod request;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{client, ApiClient};
pub use error::ApiError;
pub use middleware::{BearerAuth, RequestMiddleware};
pub use request::{ApiRequest, Method};
pub use transport::{BrowserTransport, RawResponse, Transport};
