use async_trait::async_trait;
use domain::repository::Result;
use domain::{Address, Customer, CustomerId, Entity, Repository, RepositoryError};
use futures_util::{TryStreamExt, future};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::error::{db_error, invalid_record};

/// SQLite-backed customer repository.
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_customer(row: SqliteRow) -> Result<Customer> {
        let id: String = row.try_get("id").map_err(db_error)?;
        let name: String = row.try_get("name").map_err(db_error)?;
        let street: Option<String> = row.try_get("street").map_err(db_error)?;
        let active: bool = row.try_get("active").map_err(db_error)?;
        let reward_points: i64 = row.try_get("reward_points").map_err(db_error)?;

        let mut customer = Customer::new(id, name).map_err(invalid_record(Customer::entity_type()))?;

        if let Some(street) = street {
            let number: i64 = row.try_get("number").map_err(db_error)?;
            let zip: String = row.try_get("zipcode").map_err(db_error)?;
            let city: String = row.try_get("city").map_err(db_error)?;
            let number = u32::try_from(number).map_err(RepositoryError::storage)?;
            let address = Address::new(street, number, zip, city)
                .map_err(invalid_record(Customer::entity_type()))?;
            customer.change_address(address);
        }
        if active {
            customer
                .activate()
                .map_err(invalid_record(Customer::entity_type()))?;
        }
        customer.add_reward_points(u64::try_from(reward_points).map_err(RepositoryError::storage)?);

        Ok(customer)
    }
}

/// Splits an optional address into its nullable columns.
fn address_columns(
    address: Option<&Address>,
) -> (Option<&str>, Option<i64>, Option<&str>, Option<&str>) {
    match address {
        Some(a) => (
            Some(a.street()),
            Some(i64::from(a.number())),
            Some(a.zip()),
            Some(a.city()),
        ),
        None => (None, None, None, None),
    }
}

#[async_trait]
impl Repository<Customer> for SqliteCustomerRepository {
    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn create(&self, customer: &Customer) -> Result<()> {
        let (street, number, zip, city) = address_columns(customer.address());
        let reward_points = i64::try_from(customer.reward_points()).map_err(RepositoryError::storage)?;

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(street)
        .bind(number)
        .bind(zip)
        .bind(city)
        .bind(customer.is_active())
        .bind(reward_points)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        let (street, number, zip, city) = address_columns(customer.address());
        let reward_points = i64::try_from(customer.reward_points()).map_err(RepositoryError::storage)?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
            WHERE id = ?
            "#,
        )
        .bind(customer.name())
        .bind(street)
        .bind(number)
        .bind(zip)
        .bind(city)
        .bind(customer.is_active())
        .bind(reward_points)
        .bind(customer.id().as_str())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                Customer::entity_type(),
                customer.id(),
            ));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &CustomerId) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or_else(|| RepositoryError::not_found(Customer::entity_type(), id))?;

        Self::row_to_customer(row)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Customer>> {
        sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY rowid
            "#,
        )
        .fetch(&self.pool)
        .map_err(db_error)
        .and_then(|row| future::ready(Self::row_to_customer(row)))
        .try_collect()
        .await
    }
}
