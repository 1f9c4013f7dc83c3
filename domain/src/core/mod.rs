//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - model identifiers understood by the provider
//! - [`error::DomainError`] - domain-level errors
//! - [`error::SetupError`] - rejected round setup

pub mod error;
pub mod model;
