//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - JSON extractor with uniform error bodies
//! - [`handlers`] - HTTP request handlers
//! - [`mapping`] - Conversions between DTOs and domain entities
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod mapping;
pub mod middleware;
pub mod routes;
