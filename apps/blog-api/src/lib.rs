//! # Blog API
//!
//! Actix-web surface for the blog post resource service.
//! The binary in `main.rs` wires configuration and telemetry around it;
//! tests mount the same routes against an in-memory store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use handlers::configure_routes;
pub use state::AppState;
