//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and normalizes `HttpResponse` values
//! without ever touching the network — the caller (host) executes the actual
//! I/O. This keeps the crate deterministic: any transport (blocking, async,
//! a test harness feeding canned responses) can sit on the other side.
//!
//! All fields use owned types (`String`, `Vec`) so a response can be stored
//! inside an `ApiError` and inspected after the request is long gone.

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
/// Built by the resource facades. The caller is responsible for executing
/// this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// back through `ApiClient::intercept` (directly or via a facade `parse_*`
/// method) before application code sees it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the response clears the interceptor untouched.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}
