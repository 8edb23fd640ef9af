//! Products Domain
//!
//! A small product catalog with optimistic concurrency on updates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, If-Match / ETag handling
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← New products start at version 1
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! // Serves /product and /product/{id}
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, INITIAL_VERSION, Product, UpdateOutcome, UpdateProduct};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
