//! Middleware and request extractors.

pub mod auth;
pub mod error;
pub mod policy;
pub mod resolve;
