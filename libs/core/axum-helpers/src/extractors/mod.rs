//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod path_param;
pub mod validated_json;

pub use path_param::PathParam;
pub use validated_json::ValidatedJson;
