use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Version every newly created product starts its lineage at
pub const INITIAL_VERSION: i32 = 1;

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Display name
    pub name: Option<String>,
    /// Quantity on hand
    pub quantity: Option<i32>,
    /// Optimistic-concurrency token, bumped by one on every update
    pub version: i32,
}

/// DTO for creating a new product
///
/// Any `id` or `version` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub quantity: Option<i32>,
}

/// DTO for replacing the mutable fields of an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub quantity: Option<i32>,
}

/// Result of a compare-and-swap update against the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record was at the expected version and has been overwritten
    Applied,
    /// The record exists but another writer moved its version on
    Stale,
    /// No record with that id exists
    Missing,
}

impl Product {
    /// Create an unsaved product from the CreateProduct DTO
    ///
    /// The id is a placeholder until the repository assigns one.
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: 0,
            name: input.name,
            quantity: input.quantity,
            version: INITIAL_VERSION,
        }
    }

    /// Build the next revision of this product from an UpdateProduct DTO
    pub fn next_revision(&self, update: UpdateProduct) -> Self {
        Self {
            id: self.id,
            name: update.name,
            quantity: update.quantity,
            version: self.version + 1,
        }
    }

    /// Strong entity tag for this revision, e.g. `"3"`
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_starts_at_initial_version() {
        let product = Product::new(CreateProduct {
            name: Some("Widget".to_string()),
            quantity: Some(3),
        });

        assert_eq!(product.version, INITIAL_VERSION);
        assert_eq!(product.name.as_deref(), Some("Widget"));
        assert_eq!(product.quantity, Some(3));
    }

    #[test]
    fn test_next_revision_bumps_version_and_replaces_fields() {
        let product = Product {
            id: 7,
            name: Some("Old".to_string()),
            quantity: Some(1),
            version: 4,
        };

        let next = product.next_revision(UpdateProduct {
            name: Some("New".to_string()),
            quantity: None,
        });

        assert_eq!(next.id, 7);
        assert_eq!(next.version, 5);
        assert_eq!(next.name.as_deref(), Some("New"));
        assert_eq!(next.quantity, None);
    }

    #[test]
    fn test_etag_is_quoted_version() {
        let product = Product {
            id: 1,
            name: None,
            quantity: None,
            version: 12,
        };
        assert_eq!(product.etag(), "\"12\"");
    }

    #[test]
    fn test_create_product_ignores_id_and_version() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"id": 9, "name": "Thing", "quantity": 2, "version": 42}"#)
                .unwrap();
        let product = Product::new(input);

        assert_eq!(product.version, INITIAL_VERSION);
        assert_eq!(product.quantity, Some(2));
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 1,
            name: Some("Product Name".to_string()),
            quantity: Some(10),
            version: 1,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Product Name", "quantity": 10, "version": 1})
        );
    }
}
