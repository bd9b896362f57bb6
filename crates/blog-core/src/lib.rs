//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the blog post model, the repository port and the
//! resource service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::BlogPostService;
