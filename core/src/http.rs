//! HTTP request and response types described as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! without ever executing I/O; a [`crate::Transport`] carries out the round
//! trip in between. Keeping the protocol layer free of any HTTP engine makes
//! it deterministic and lets unit tests feed it canned responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can be recorded,
//! replayed, and compared wholesale.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `BoolClient::build_*` methods and executed by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, then handed to `BoolClient::parse_*` methods
/// for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
