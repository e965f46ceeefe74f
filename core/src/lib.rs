//! Client-side surface of the heroes catalog: a declarative route table and
//! a stateless HTTP client over the `/api` REST backend.
//!
//! # Overview
//! Builds `HttpRequest` values and normalizes `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the crate fully deterministic and
//! testable.
//!
//! # Design
//! - `ApiClient` is stateless — it holds only the base URL, fixed at
//!   `{origin}/api`, and stamps the JSON content-type default on every
//!   request it builds. One instance is shared by reference with all
//!   facades.
//! - Each resource operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every failed response collapses into one `ApiError` before it reaches
//!   application code; success responses pass through untouched.
//! - The route table is immutable after construction; exact segments win
//!   over `{id}` captures, and unmatched paths fall through to `not-found`.

pub mod client;
pub mod error;
pub mod http;
pub mod router;

pub use client::{ApiClient, HeroesApi, SuperpowersApi, API_BASE_PATH};
pub use error::{ApiError, CONNECTION_ERROR, UNEXPECTED_ERROR, VALIDATION_ERROR};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use router::{
    RouteEntry, RouteMatch, RouteParams, Router, RouterError, View, NOT_FOUND, ROUTES,
};
