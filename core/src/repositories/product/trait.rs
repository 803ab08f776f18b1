//! Product repository trait defining the catalog persistence interface.

use async_trait::async_trait;

use crate::domain::entities::product::{NewProduct, Product, ProductPatch};
use crate::errors::StorageError;

/// Repository contract for product rows
///
/// "Not found" is an explicit `None` or a zero count, never an error.
/// `StorageError` is reserved for infrastructure failures (connection loss,
/// constraint violations) and carries the driver diagnostic.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product
    async fn find_all(&self) -> Result<Vec<Product>, StorageError>;

    /// Fetch one product by primary key
    ///
    /// # Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product with the given id
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorageError>;

    /// Insert a product; the repository assigns `product_id`
    async fn create(&self, fields: NewProduct) -> Result<Product, StorageError>;

    /// Overlay `patch` onto an existing product and save it
    ///
    /// Find-then-save: two storage operations, not atomic.
    ///
    /// # Returns
    /// * `Ok(Some(Product))` - The updated product
    /// * `Ok(None)` - No product with the given id
    async fn update(&self, id: i32, patch: ProductPatch) -> Result<Option<Product>, StorageError>;

    /// Delete a product
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows removed (0 when the id was absent)
    async fn delete(&self, id: i32) -> Result<u64, StorageError>;
}
