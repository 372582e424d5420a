//! Executed API operations: build, one round trip, parse.
//!
//! # Design
//! `Remote` pairs a stateless `BoolClient` with a shared `Transport` and is
//! the only place the two meet. Entities hold a `Remote` clone; cloning
//! shares the underlying transport. Each method performs exactly one
//! blocking request and returns the parsed outcome, with remote not-found
//! reported as `None`/`false` rather than an error.

use std::fmt;
use std::sync::Arc;

use crate::client::BoolClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::BoolResource;

/// Base URL of the live service.
pub const BOOLEANS_IO: &str = "https://api.booleans.io";

/// Handle to one booleans.io endpoint.
#[derive(Clone)]
pub struct Remote {
    client: BoolClient,
    transport: Arc<dyn Transport>,
}

impl Remote {
    /// Connect to the service at `base_url` over the blocking ureq transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, Arc::new(UreqTransport::new()))
    }

    /// Connect through a caller-supplied transport.
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: BoolClient::new(base_url),
            transport,
        }
    }

    /// Request a new resource holding `initial`; returns the assigned
    /// identifier and stored value.
    pub fn create(&self, initial: bool) -> Result<BoolResource, ApiError> {
        let request = self.client.build_create(initial);
        let response = self.transport.execute(request)?;
        self.client.parse_create(response)
    }

    /// Fetch the current remote value; `None` if the resource is absent.
    pub fn read(&self, id: &str) -> Result<Option<BoolResource>, ApiError> {
        let request = self.client.build_read(id);
        let response = self.transport.execute(request)?;
        self.client.parse_read(response)
    }

    /// Set the remote value; `false` if the resource is absent.
    pub fn update(&self, id: &str, value: bool) -> Result<bool, ApiError> {
        let request = self.client.build_update(id, value);
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_update(response))
    }

    /// Delete the resource; `true` only on an explicit 200.
    pub fn delete(&self, id: &str) -> Result<bool, ApiError> {
        let request = self.client.build_delete(id);
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_delete(response))
    }
}

impl Default for Remote {
    fn default() -> Self {
        Self::new(BOOLEANS_IO)
    }
}

impl fmt::Debug for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remote").field("client", &self.client).finish_non_exhaustive()
    }
}
