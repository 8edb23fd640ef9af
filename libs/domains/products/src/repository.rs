use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, UpdateOutcome};

/// Repository trait for Product persistence
///
/// Every call must be atomic with respect to other calls touching the same id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List every stored product
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Persist a new product, assigning its id
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Overwrite a product only if it is still at `expected_version`
    async fn update(&self, product: Product, expected_version: i32)
    -> ProductResult<UpdateOutcome>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i32, Product>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository
///
/// Ids are handed out sequentially from 1 and never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        product.id = store.next_id;
        store.next_id += 1;
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(
        &self,
        product: Product,
        expected_version: i32,
    ) -> ProductResult<UpdateOutcome> {
        let mut store = self.store.write().await;

        let Some(current) = store.products.get_mut(&product.id) else {
            return Ok(UpdateOutcome::Missing);
        };

        if current.version != expected_version {
            tracing::info!(
                product_id = product.id,
                expected_version,
                current_version = current.version,
                "Rejected stale product update"
            );
            return Ok(UpdateOutcome::Stale);
        }

        tracing::info!(
            product_id = product.id,
            version = product.version,
            "Updated product"
        );
        *current = product;
        Ok(UpdateOutcome::Applied)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
