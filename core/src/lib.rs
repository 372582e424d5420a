//! Synchronous client for the booleans.io service.
//!
//! # Overview
//! booleans.io stores individual boolean values as network resources. This
//! crate wraps one resource as [`RemoteBool`] (an identifier plus a locally
//! cached value) and a fixed-length ordered collection of them as
//! [`BitString`], with flat-file save/load helpers in [`store`].
//!
//! # Design
//! - `BoolClient` is stateless and builds `HttpRequest` values / parses
//!   `HttpResponse` values without touching the network.
//! - The actual round trip is a [`Transport`] impl; [`UreqTransport`] is the
//!   blocking production implementation, and tests substitute their own.
//! - [`Remote`] bundles the client with a shared transport so entities can
//!   execute one request per operation. Every mutator is "network call, then
//!   conditional cache update"; the cache never changes on a failed call.
//! - The remote service is last-write-wins per identifier. Nothing here adds
//!   ordering or atomicity across calls.

pub mod bits;
pub mod boolean;
pub mod client;
pub mod error;
pub mod http;
pub mod remote;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use bits::BitString;
pub use boolean::RemoteBool;
pub use client::BoolClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use remote::{Remote, BOOLEANS_IO};
pub use store::{load, save, Stored, StoreError};
pub use transport::{Transport, UreqTransport};
pub use types::BoolResource;
