//! PostgreSQL implementation of the ProductRepository trait.
//!
//! Raw SQLx queries against the `products` table with explicit row
//! mapping. "Not found" surfaces as `None`/zero rows; only driver
//! failures become `StorageError`, carrying the driver text as `detail`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{postgres::PgRow, PgPool, Row};

use orchard_core::domain::entities::product::{NewProduct, Product, ProductPatch};
use orchard_core::errors::StorageError;
use orchard_core::repositories::ProductRepository;

const PRODUCT_COLUMNS: &str = "product_id, name, description, img_url, price, slug";

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PostgreSQL product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `products` table if it does not exist yet
    ///
    /// Startup-time schema sync; no-op once the table is in place.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                product_id  SERIAL PRIMARY KEY,
                name        TEXT NOT NULL,
                description TEXT NOT NULL,
                img_url     TEXT NOT NULL,
                price       NUMERIC NOT NULL,
                slug        TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create products table", e))?;

        tracing::debug!("products table is in place");
        Ok(())
    }

    /// Convert a database row to a Product entity
    fn row_to_product(row: &PgRow) -> Result<Product, StorageError> {
        Ok(Product {
            product_id: row
                .try_get("product_id")
                .map_err(|e| storage_error("Failed to read product_id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| storage_error("Failed to read name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| storage_error("Failed to read description", e))?,
            img_url: row
                .try_get("img_url")
                .map_err(|e| storage_error("Failed to read img_url", e))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| storage_error("Failed to read price", e))?,
            slug: row
                .try_get("slug")
                .map_err(|e| storage_error("Failed to read slug", e))?,
        })
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, StorageError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to fetch products", e))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorageError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to fetch product", e))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn create(&self, fields: NewProduct) -> Result<Product, StorageError> {
        let query = format!(
            "INSERT INTO products (name, description, img_url, price, slug) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(&fields.img_url)
            .bind(fields.price)
            .bind(&fields.slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to create product", e))?;

        Self::row_to_product(&row)
    }

    async fn update(&self, id: i32, patch: ProductPatch) -> Result<Option<Product>, StorageError> {
        // Find-then-save, mirroring the repository contract: two storage
        // operations with no transaction spanning them.
        let mut product = match self.find_by_id(id).await? {
            Some(product) => product,
            None => return Ok(None),
        };
        patch.apply(&mut product);

        let query = format!(
            "UPDATE products SET name = $1, description = $2, img_url = $3, \
             price = $4, slug = $5 WHERE product_id = $6 RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.img_url)
            .bind(product.price)
            .bind(&product.slug)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to update product", e))?;

        Self::row_to_product(&row).map(Some)
    }

    async fn delete(&self, id: i32) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete product", e))?;

        Ok(result.rows_affected())
    }
}

/// Map a SQLx error into a StorageError with the driver text as detail
fn storage_error(message: &str, error: sqlx::Error) -> StorageError {
    tracing::error!("{message}: {error}");
    StorageError::new(message).with_detail(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_carries_driver_text() {
        let err = storage_error("Failed to fetch products", sqlx::Error::PoolClosed);

        assert_eq!(err.message, "Failed to fetch products");
        let detail = err.detail.expect("driver text attached");
        assert!(detail.contains("pool"), "unexpected detail: {detail}");
    }
}
