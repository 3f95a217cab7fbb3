//! # vitrine-api
//!
//! HTTP API layer for Vitrine built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging), the
//! auth-gate extractor and admin check, DTOs, and the centralized error
//! mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
