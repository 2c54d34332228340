//! HTTP REST API interfaces
//!
//! - `common`: response envelope and domain error mapping
//! - `modules`: per-resource DTOs and handlers, plus health/metrics/request-id
//! - `router`: route table, CORS allow-list and Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
