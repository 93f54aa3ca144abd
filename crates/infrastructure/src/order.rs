use std::collections::HashMap;

use async_trait::async_trait;
use domain::repository::Result;
use domain::{Entity, Money, Order, OrderId, OrderItem, Repository, RepositoryError};
use sqlx::{QueryBuilder, Row, Sqlite, SqliteConnection, SqlitePool, sqlite::SqliteRow};

use crate::error::{db_error, invalid_record};

/// Upper bound on bound parameters per statement (`SQLITE_MAX_VARIABLE_NUMBER`).
const SQLITE_BIND_LIMIT: usize = 32_766;

/// Columns bound per `order_items` row.
const ITEM_COLUMNS: usize = 6;

const ITEMS_PER_INSERT: usize = SQLITE_BIND_LIMIT / ITEM_COLUMNS;

/// SQLite-backed order repository.
///
/// An order and its items are one unit: writes and reads each run inside a
/// single transaction, so readers never see half of an update.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Creates a new order repository on top of the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts one row per item, in as few statements as the bind limit allows.
    async fn insert_items(
        conn: &mut SqliteConnection,
        order: &Order,
    ) -> std::result::Result<(), sqlx::Error> {
        for chunk in order.items().chunks(ITEMS_PER_INSERT) {
            let mut builder = QueryBuilder::<Sqlite>::new(
                "INSERT INTO order_items (order_id, id, product_id, name, price, quantity) ",
            );
            builder.push_values(chunk, |mut row, item| {
                row.push_bind(order.id().as_str().to_owned())
                    .push_bind(item.id().as_str().to_owned())
                    .push_bind(item.product_id().as_str().to_owned())
                    .push_bind(item.name().to_owned())
                    .push_bind(item.price().cents())
                    .push_bind(i64::from(item.quantity()));
            });
            builder.build().execute(&mut *conn).await?;
        }
        Ok(())
    }

    fn row_to_item(row: &SqliteRow) -> Result<OrderItem> {
        let id: String = row.try_get("id").map_err(db_error)?;
        let product_id: String = row.try_get("product_id").map_err(db_error)?;
        let name: String = row.try_get("name").map_err(db_error)?;
        let price: i64 = row.try_get("price").map_err(db_error)?;
        let quantity: i64 = row.try_get("quantity").map_err(db_error)?;
        let quantity = u32::try_from(quantity).map_err(RepositoryError::storage)?;

        OrderItem::new(id, name, Money::from_cents(price), product_id, quantity)
            .map_err(invalid_record(Order::entity_type()))
    }

    fn row_to_order(row: &SqliteRow, items: Vec<OrderItem>) -> Result<Order> {
        let id: String = row.try_get("id").map_err(db_error)?;
        let customer_id: String = row.try_get("customer_id").map_err(db_error)?;
        let stored_total: i64 = row.try_get("total").map_err(db_error)?;

        let order =
            Order::new(id, customer_id, items).map_err(invalid_record(Order::entity_type()))?;

        if order.total().cents() != stored_total {
            tracing::warn!(
                order_id = %order.id(),
                stored = stored_total,
                computed = order.total().cents(),
                "stored order total differs from its items"
            );
        }
        Ok(order)
    }
}

#[async_trait]
impl Repository<Order> for SqliteOrderRepository {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id(), items = order.items().len()))]
    async fn create(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(order.id().as_str())
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        Self::insert_items(&mut *tx, order).await.map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        metrics::counter!("order_repository_writes", "operation" => "create").increment(1);
        Ok(())
    }

    /// Replaces the order's items and refreshes the order row.
    ///
    /// Everything happens in one transaction; on any error the transaction is
    /// dropped without commit and the stored order is left untouched.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id(), items = order.items().len()))]
    async fn update(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let exists = sqlx::query("SELECT 1 FROM orders WHERE id = ?")
            .bind(order.id().as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error)?
            .is_some();
        if !exists {
            return Err(RepositoryError::not_found(Order::entity_type(), order.id()));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        Self::insert_items(&mut *tx, order).await.map_err(db_error)?;

        sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        metrics::counter!("order_repository_writes", "operation" => "update").increment(1);
        Ok(())
    }

    /// Reads the order row and its items from one snapshot.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &OrderId) -> Result<Order> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let row = sqlx::query("SELECT id, customer_id, total FROM orders WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error)?
            .ok_or_else(|| RepositoryError::not_found(Order::entity_type(), id))?;

        let item_rows = sqlx::query(
            r#"
            SELECT id, product_id, name, price, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        let items = item_rows
            .iter()
            .map(Self::row_to_item)
            .collect::<Result<Vec<_>>>()?;
        Self::row_to_order(&row, items)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let order_rows = sqlx::query("SELECT id, customer_id, total FROM orders ORDER BY rowid")
            .fetch_all(&mut *tx)
            .await
            .map_err(db_error)?;

        let item_rows = sqlx::query(
            r#"
            SELECT order_id, id, product_id, name, price, quantity
            FROM order_items
            ORDER BY rowid
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let order_id: String = row.try_get("order_id").map_err(db_error)?;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(Self::row_to_item(row)?);
        }

        order_rows
            .iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(db_error)?;
                let items = items_by_order.remove(&id).unwrap_or_default();
                Self::row_to_order(row, items)
            })
            .collect()
    }
}
