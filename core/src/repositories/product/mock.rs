//! Mock implementations of ProductRepository for testing.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::r#trait::ProductRepository;
use crate::domain::entities::product::{NewProduct, Product, ProductPatch};
use crate::errors::StorageError;

/// In-memory product repository for tests
///
/// Assigns ids sequentially like the real auto-increment column and keeps
/// rows ordered by id so `find_all` is deterministic.
pub struct MockProductRepository {
    products: RwLock<BTreeMap<i32, Product>>,
    next_id: AtomicI32,
}

impl MockProductRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, StorageError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorageError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, fields: NewProduct) -> Result<Product, StorageError> {
        let product = Product {
            product_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: fields.name,
            description: fields.description,
            img_url: fields.img_url,
            price: fields.price,
            slug: fields.slug,
        };

        let mut products = self.products.write().await;
        products.insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, patch: ProductPatch) -> Result<Option<Product>, StorageError> {
        let mut products = self.products.write().await;
        match products.get_mut(&id) {
            Some(product) => {
                patch.apply(product);
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, StorageError> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).map_or(0, |_| 1))
    }
}

/// Repository that fails every operation, for exercising 500 paths
pub struct FailingProductRepository;

impl FailingProductRepository {
    fn error() -> StorageError {
        StorageError::new("database connection lost").with_detail("connection refused")
    }
}

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, StorageError> {
        Err(Self::error())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, StorageError> {
        Err(Self::error())
    }

    async fn create(&self, _fields: NewProduct) -> Result<Product, StorageError> {
        Err(Self::error())
    }

    async fn update(&self, _id: i32, _patch: ProductPatch) -> Result<Option<Product>, StorageError> {
        Err(Self::error())
    }

    async fn delete(&self, _id: i32) -> Result<u64, StorageError> {
        Err(Self::error())
    }
}
