//! # Folio Core
//!
//! The domain layer of the Folio resource service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! resource kinds, validation, the access policy and the ports adapters implement.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;

pub use error::{DomainError, RepoError, ValidationError};
