//! A single remotely-backed boolean.
//!
//! # Design
//! `RemoteBool` is a two-field record: the identifier naming the remote
//! resource and a locally cached mirror of its value. The cache reflects the
//! remote state as of the last successful create/read/update and may be
//! stale under concurrent external mutation. Every mutator is a network
//! call followed by a conditional cache update; a failed or not-found call
//! leaves the cache untouched.

use std::fmt;

use crate::error::ApiError;
use crate::remote::Remote;

/// One boolean resource with a locally cached value.
///
/// Cloning copies the identifier and cached value without a network call, so
/// two values may alias the same remote resource. Mutating one does not
/// refresh the other's cache; call [`pull`](Self::pull) to resynchronize.
#[derive(Debug, Clone)]
pub struct RemoteBool {
    remote: Remote,
    id: String,
    value: bool,
}

impl RemoteBool {
    /// Create a fresh remote resource holding `initial`.
    ///
    /// Fails hard if the create call fails: without an assigned identifier
    /// there is no usable value to return.
    pub fn create(remote: &Remote, initial: bool) -> Result<Self, ApiError> {
        let resource = remote.create(initial)?;
        Ok(Self {
            remote: remote.clone(),
            id: resource.id,
            value: resource.val,
        })
    }

    /// Wrap a known identifier with an assumed cached value.
    ///
    /// No network call is made and the value is not verified against the
    /// remote resource.
    pub fn attach(remote: &Remote, id: impl Into<String>, value: bool) -> Self {
        Self {
            remote: remote.clone(),
            id: id.into(),
            value,
        }
    }

    /// The identifier assigned by the service.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The locally cached value.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Overwrite the cache from the remote resource.
    ///
    /// Returns whether the resource was found; on `Ok(false)` the cache is
    /// left unchanged.
    pub fn pull(&mut self) -> Result<bool, ApiError> {
        match self.remote.read(&self.id)? {
            Some(resource) => {
                self.value = resource.val;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Send `value` to the remote resource, caching it on reported success.
    pub fn set(&mut self, value: bool) -> Result<bool, ApiError> {
        let updated = self.remote.update(&self.id, value)?;
        if updated {
            self.value = value;
        }
        Ok(updated)
    }

    /// Send the negation of the cached value; the cache flips only if the
    /// remote reports the write took effect.
    pub fn toggle(&mut self) -> Result<bool, ApiError> {
        let flipped = !self.value;
        self.set(flipped)
    }

    /// Re-send the cached value, forcing the remote to match the local state.
    /// The cache itself never changes.
    pub fn push(&self) -> Result<bool, ApiError> {
        self.remote.update(&self.id, self.value)
    }

    /// Delete the remote resource.
    ///
    /// The local identifier and value are kept; further operations through
    /// this value now name a dangling resource and will report not-found.
    pub fn destroy(&self) -> Result<bool, ApiError> {
        self.remote.delete(&self.id)
    }
}

impl fmt::Display for RemoteBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.value { "1" } else { "0" })
    }
}
