use async_trait::async_trait;
use domain::repository::Result;
use domain::{Entity, Money, Product, ProductId, Repository, RepositoryError};
use futures_util::{TryStreamExt, future};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::error::{db_error, invalid_record};

/// SQLite-backed product repository.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_product(row: SqliteRow) -> Result<Product> {
        let id: String = row.try_get("id").map_err(db_error)?;
        let name: String = row.try_get("name").map_err(db_error)?;
        let price: i64 = row.try_get("price").map_err(db_error)?;

        Product::new(id, name, Money::from_cents(price))
            .map_err(invalid_record(Product::entity_type()))
    }
}

#[async_trait]
impl Repository<Product> for SqliteProductRepository {
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update(&self, product: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(product.name())
            .bind(product.price().cents())
            .bind(product.id().as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                Product::entity_type(),
                product.id(),
            ));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &ProductId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or_else(|| RepositoryError::not_found(Product::entity_type(), id))?;

        Self::row_to_product(row)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>> {
        sqlx::query("SELECT id, name, price FROM products ORDER BY rowid")
            .fetch(&self.pool)
            .map_err(db_error)
            .and_then(|row| future::ready(Self::row_to_product(row)))
            .try_collect()
            .await
    }
}
