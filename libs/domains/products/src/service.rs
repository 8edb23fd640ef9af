//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{INITIAL_VERSION, Product, UpdateOutcome};
use crate::repository::ProductRepository;

/// Product service
///
/// Thin layer over the repository. Its one rule is that a newly saved
/// product always starts at [`INITIAL_VERSION`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Save a new product, resetting whatever version the caller supplied
    #[instrument(skip(self, product))]
    pub async fn save(&self, mut product: Product) -> ProductResult<Product> {
        product.version = INITIAL_VERSION;
        self.repository.save(product).await
    }

    /// Overwrite a product if it is still at `expected_version`
    #[instrument(skip(self, product), fields(product_id = product.id, version = product.version))]
    pub async fn update(
        &self,
        product: Product,
        expected_version: i32,
    ) -> ProductResult<UpdateOutcome> {
        self.repository.update(product, expected_version).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ProductResult<bool> {
        self.repository.delete(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: i32, version: i32) -> Product {
        Product {
            id,
            name: Some("Product Name".to_string()),
            quantity: Some(10),
            version,
        }
    }

    #[tokio::test]
    async fn test_save_forces_initial_version() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_save()
            .withf(|p| p.version == INITIAL_VERSION)
            .times(1)
            .returning(|mut p| {
                p.id = 1;
                Ok(p)
            });

        let service = ProductService::new(mock_repo);
        let saved = service.save(product(0, 17)).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.version, 1, "Caller-supplied version must be discarded");
    }

    #[tokio::test]
    async fn test_find_by_id_passes_through_miss() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(3))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        assert!(service.find_by_id(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_delegates_outcome_unchanged() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_update()
            .withf(|p, expected| p.version == 3 && *expected == 2)
            .returning(|_, _| Ok(UpdateOutcome::Stale));

        let service = ProductService::new(mock_repo);
        let outcome = service.update(product(1, 3), 2).await.unwrap();

        assert_eq!(outcome, UpdateOutcome::Stale);
    }

    #[tokio::test]
    async fn test_delete_delegates_boolean() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_delete()
            .with(eq(5))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        assert!(!service.delete(5).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_passes_through() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_all()
            .returning(|| Ok(vec![product(1, 1), product(2, 4)]));

        let service = ProductService::new(mock_repo);
        let products = service.find_all().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].version, 4);
    }
}
