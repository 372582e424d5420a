//! Blocking HTTP execution behind the [`Transport`] seam.
//!
//! # Design
//! The protocol layer never does I/O; a `Transport` carries out exactly one
//! blocking round trip per call, with no retries. [`UreqTransport`] is the
//! production implementation. ureq's status-as-error behavior is disabled so
//! 4xx/5xx responses come back as data and the client's `parse_*` methods
//! stay the single place where status codes are interpreted.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;
        let content_type = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.clone());

        let result = match (method, body) {
            (HttpMethod::Get, _) => self.agent.get(&path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&path).call(),
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(&path);
                if let Some(ct) = &content_type {
                    builder = builder.content_type(ct);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(&path).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                let mut builder = self.agent.put(&path);
                if let Some(ct) = &content_type {
                    builder = builder.content_type(ct);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.agent.put(&path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
