//! A fixed-length ordered collection of remote booleans.
//!
//! # Design
//! `BitString` is a plain `Vec<RemoteBool>` with index 0 as the
//! least-significant bit. Bulk operations iterate the elements in index
//! order, one remote call each; nothing is transactional, and a failure on
//! one element neither rolls back nor (for per-element outcomes) prevents
//! the rest. Views over the cached values (`bits`, `to_u128`, `Display`)
//! make no network calls.

use std::fmt;
use std::slice;

use crate::boolean::RemoteBool;
use crate::error::ApiError;
use crate::remote::Remote;

/// Fixed-length, index-ordered collection of remote booleans, interpretable
/// as a bit string or unsigned integer.
#[derive(Debug, Clone)]
pub struct BitString {
    bits: Vec<RemoteBool>,
}

impl BitString {
    /// Create `length` fresh remote booleans, each initialized to false.
    ///
    /// The first failed creation propagates; resources created before the
    /// failure stay allocated on the service.
    pub fn create(remote: &Remote, length: usize) -> Result<Self, ApiError> {
        let mut bits = Vec::with_capacity(length);
        for _ in 0..length {
            bits.push(RemoteBool::create(remote, false)?);
        }
        Ok(Self { bits })
    }

    pub(crate) fn from_bits(bits: Vec<RemoteBool>) -> Self {
        Self { bits }
    }

    /// Number of elements, fixed at construction.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Element identifiers in index order.
    pub fn ids(&self) -> Vec<&str> {
        self.bits.iter().map(RemoteBool::id).collect()
    }

    /// Cached value at `index`; `None` out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(RemoteBool::value)
    }

    /// Set the element at `index`, delegating to [`RemoteBool::set`].
    ///
    /// `None` means the index is out of range and nothing was attempted, as
    /// opposed to `Some(Ok(false))` where the remote reported not-found.
    pub fn set(&mut self, index: usize, value: bool) -> Option<Result<bool, ApiError>> {
        self.bits.get_mut(index).map(|bit| bit.set(value))
    }

    /// Pull every element in index order, returning the per-element found
    /// flags. Not atomic: earlier elements keep their refreshed values even
    /// if a later one is missing.
    pub fn pull(&mut self) -> Result<Vec<bool>, ApiError> {
        self.bits.iter_mut().map(RemoteBool::pull).collect()
    }

    /// Push every cached value in index order, returning the per-element
    /// update flags.
    pub fn push(&self) -> Result<Vec<bool>, ApiError> {
        self.bits.iter().map(RemoteBool::push).collect()
    }

    /// Delete every element in index order, returning the per-element delete
    /// flags. Every element is attempted regardless of earlier failures.
    pub fn destroy(&self) -> Result<Vec<bool>, ApiError> {
        self.bits.iter().map(RemoteBool::destroy).collect()
    }

    /// The cached values as a `'0'`/`'1'` string, most-significant bit
    /// (highest index) first.
    pub fn bits(&self) -> String {
        self.bits
            .iter()
            .rev()
            .map(|bit| if bit.value() { '1' } else { '0' })
            .collect()
    }

    /// The cached values as an unsigned integer: the sum of `2^i` over
    /// indices `i` holding true. True bits at index 128 and above do not fit
    /// and are ignored.
    pub fn to_u128(&self) -> u128 {
        self.bits
            .iter()
            .take(128)
            .enumerate()
            .filter(|(_, bit)| bit.value())
            .map(|(i, _)| 1u128 << i)
            .sum()
    }

    /// Elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, RemoteBool> {
        self.bits.iter()
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = &'a RemoteBool;
    type IntoIter = slice::Iter<'a, RemoteBool>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits())
    }
}
