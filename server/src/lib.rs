//! RateDesk HTTP server
//!
//! Thin axum surface over the rate table core: one /rate route backed
//! by the immutable effective configuration.

pub mod routes;

pub use routes::router;
