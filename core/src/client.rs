//! Stateless HTTP client and resource facades for the heroes API.
//!
//! # Design
//! `ApiClient` fixes the base URL at `{origin}/api` and stamps the default
//! `content-type: application/json` header on every request it builds. It
//! carries no mutable state between calls. Each resource operation is split
//! into a `build_*` method that produces an `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`; the caller executes the actual
//! round-trip in between. Every `parse_*` routes the response through
//! [`ApiClient::intercept`], so application code only ever sees untouched
//! successful responses or a single normalized `ApiError`.
//!
//! Payloads are opaque `serde_json::Value`s passed through to and from the
//! backend: the facades perform no shape validation, transformation, or
//! caching, and ids are untyped strings.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Path prefix shared by every backend endpoint.
pub const API_BASE_PATH: &str = "/api";

/// Shared client configuration: one base URL, one default header.
///
/// Create a single instance and hand out facades from it; the configuration
/// is fixed after construction, so sharing a reference is safe anywhere.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// `origin` is scheme plus authority (for example
    /// `http://localhost:3000`); the `/api` prefix is appended here and
    /// shared by every request the client builds.
    pub fn new(origin: &str) -> Self {
        Self {
            base_url: format!("{}{API_BASE_PATH}", origin.trim_end_matches('/')),
        }
    }

    /// The heroes resource facade, borrowing this client.
    pub fn heroes(&self) -> HeroesApi<'_> {
        HeroesApi { client: self }
    }

    /// The superpowers resource facade, borrowing this client.
    pub fn superpowers(&self) -> SuperpowersApi<'_> {
        SuperpowersApi { client: self }
    }

    /// Gate every response before it reaches the caller.
    ///
    /// Successful responses pass through unmodified; any other response is
    /// consumed into exactly one [`ApiError`].
    pub fn intercept(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response))
        }
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }
    }

    /// Intercept, then hand the body back as untouched JSON. An empty
    /// success body (204) becomes `Value::Null`.
    fn parse_json(&self, response: HttpResponse) -> Result<Value, ApiError> {
        let response = self.intercept(response)?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::from_message(e.to_string()))
    }
}

/// Pass-through method set for the heroes resource.
#[derive(Debug, Clone, Copy)]
pub struct HeroesApi<'a> {
    client: &'a ApiClient,
}

impl HeroesApi<'_> {
    pub fn build_list(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, "/heroes", None)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Value, ApiError> {
        self.client.parse_json(response)
    }

    pub fn build_get(&self, id: &str) -> HttpRequest {
        self.client
            .request(HttpMethod::Get, &format!("/heroes/{id}"), None)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Value, ApiError> {
        self.client.parse_json(response)
    }

    pub fn build_create(&self, hero: &Value) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(hero).map_err(|e| ApiError::from_message(e.to_string()))?;
        Ok(self.client.request(HttpMethod::Post, "/heroes", Some(body)))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Value, ApiError> {
        self.client.parse_json(response)
    }

    pub fn build_update(&self, id: &str, hero: &Value) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(hero).map_err(|e| ApiError::from_message(e.to_string()))?;
        Ok(self
            .client
            .request(HttpMethod::Put, &format!("/heroes/{id}"), Some(body)))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Value, ApiError> {
        self.client.parse_json(response)
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        self.client
            .request(HttpMethod::Delete, &format!("/heroes/{id}"), None)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<Value, ApiError> {
        self.client.parse_json(response)
    }
}

/// Pass-through method set for the superpowers resource. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct SuperpowersApi<'a> {
    client: &'a ApiClient,
}

impl SuperpowersApi<'_> {
    pub fn build_list(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, "/superpowers", None)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Value, ApiError> {
        self.client.parse_json(response)
    }
}
