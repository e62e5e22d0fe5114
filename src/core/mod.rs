//! Core business logic for JWT operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod base64url;
pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod keys;
