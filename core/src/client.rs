//! Stateless HTTP request builder and response parser for the booleans.io API.
//!
//! # Design
//! `BoolClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, with
//! the round trip executed in between by a `Transport`.
//!
//! Status interpretation follows the service's conventions rather than a
//! uniform rule: create expects a 2xx plus a decodable resource document,
//! read treats 404 as "absent", update treats anything but 404 as success
//! (the service never confirmed writes more strongly than that), and delete
//! succeeds only on an explicit 200.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{to_token, BoolResource};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Synchronous, stateless client for the booleans.io API.
#[derive(Debug, Clone)]
pub struct BoolClient {
    base_url: String,
}

impl BoolClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create(&self, initial: bool) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/", self.base_url),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(format!("val={}", to_token(initial))),
        }
    }

    pub fn build_read(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update(&self, id: &str, value: bool) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(format!("val={}", to_token(value))),
        }
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse a create response: any 2xx status carrying a resource document.
    pub fn parse_create(&self, response: HttpResponse) -> Result<BoolResource, ApiError> {
        if !(200..300).contains(&response.status) {
            return Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            });
        }
        decode_resource(&response.body)
    }

    /// Parse a read response. 404 means the resource is absent.
    pub fn parse_read(&self, response: HttpResponse) -> Result<Option<BoolResource>, ApiError> {
        if response.status == 404 {
            return Ok(None);
        }
        decode_resource(&response.body).map(Some)
    }

    /// Parse an update response: false only on 404, true for any other
    /// status. The service reports writes no more strongly than "the
    /// resource exists", so this stays a weak success signal.
    pub fn parse_update(&self, response: HttpResponse) -> bool {
        response.status != 404
    }

    /// Parse a delete response: success iff the status is exactly 200.
    pub fn parse_delete(&self, response: HttpResponse) -> bool {
        response.status == 200
    }
}

fn decode_resource(body: &str) -> Result<BoolResource, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
