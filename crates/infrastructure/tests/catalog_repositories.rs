//! Customer and product repository integration tests

use domain::{
    Address, Customer, CustomerId, Money, Product, ProductId, Repository, RepositoryError,
};
use infrastructure::{DatabaseConfig, SqliteCustomerRepository, SqliteProductRepository, db};
use sqlx::SqlitePool;

async fn pool() -> SqlitePool {
    infrastructure::telemetry::init_test_tracing();
    db::init(&DatabaseConfig::in_memory()).await.unwrap()
}

mod customers {
    use super::*;

    fn address() -> Address {
        Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_without_address() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let customer = Customer::new("123", "Customer 1").unwrap();
        repo.create(&customer).await.unwrap();

        let found = repo.find(&CustomerId::from("123")).await.unwrap();
        assert_eq!(found, customer);
        assert!(found.address().is_none());
        assert!(!found.is_active());
    }

    #[tokio::test]
    async fn test_create_and_find_active_customer_with_points() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let mut customer = Customer::new("123", "Customer 1").unwrap();
        customer.change_address(address());
        customer.activate().unwrap();
        customer.add_reward_points(10);
        repo.create(&customer).await.unwrap();

        let found = repo.find(&CustomerId::from("123")).await.unwrap();
        assert_eq!(found, customer);
        assert_eq!(found.address(), Some(&address()));
        assert!(found.is_active());
        assert_eq!(found.reward_points(), 10);
    }

    #[tokio::test]
    async fn test_update_customer() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let mut customer = Customer::new("123", "Customer 1").unwrap();
        repo.create(&customer).await.unwrap();

        customer.change_name("Customer 2").unwrap();
        customer.change_address(address());
        customer.activate().unwrap();
        repo.update(&customer).await.unwrap();

        assert_eq!(repo.find(&CustomerId::from("123")).await.unwrap(), customer);
    }

    #[tokio::test]
    async fn test_update_unknown_customer_is_not_found() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let customer = Customer::new("123", "Customer 1").unwrap();
        let err = repo.update(&customer).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_unknown_customer_is_not_found() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let err = repo.find(&CustomerId::from("456ABC")).await.unwrap_err();

        assert_eq!(err.to_string(), "Customer not found");
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_storage_error() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let customer = Customer::new("123", "Customer 1").unwrap();
        repo.create(&customer).await.unwrap();

        assert!(matches!(
            repo.create(&customer).await,
            Err(RepositoryError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = SqliteCustomerRepository::new(pool().await);

        let second = Customer::new("2", "Customer 2").unwrap();
        let mut first = Customer::new("1", "Customer 1").unwrap();
        first.change_address(address());
        repo.create(&second).await.unwrap();
        repo.create(&first).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![second, first]);
    }

    #[tokio::test]
    async fn test_invalid_row_is_reported() {
        let pool = pool().await;
        sqlx::query("INSERT INTO customers (id, name) VALUES ('123', '  ')")
            .execute(&pool)
            .await
            .unwrap();
        let repo = SqliteCustomerRepository::new(pool);

        let err = repo.find(&CustomerId::from("123")).await.unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::InvalidRecord {
                entity: "Customer",
                ..
            }
        ));
    }
}

mod products {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = SqliteProductRepository::new(pool().await);

        let product = Product::new("1", "Product 1", Money::from_cents(100)).unwrap();
        repo.create(&product).await.unwrap();

        assert_eq!(repo.find(&ProductId::from("1")).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_update_product() {
        let repo = SqliteProductRepository::new(pool().await);

        let mut product = Product::new("1", "Product 1", Money::from_cents(100)).unwrap();
        repo.create(&product).await.unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(Money::from_cents(200)).unwrap();
        repo.update(&product).await.unwrap();

        let found = repo.find(&ProductId::from("1")).await.unwrap();
        assert_eq!(found.name(), "Product 2");
        assert_eq!(found.price(), Money::from_cents(200));
    }

    #[tokio::test]
    async fn test_update_unknown_product_is_not_found() {
        let repo = SqliteProductRepository::new(pool().await);

        let product = Product::new("1", "Product 1", Money::from_cents(100)).unwrap();

        assert!(repo.update(&product).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_find_unknown_product_is_not_found() {
        let repo = SqliteProductRepository::new(pool().await);

        let err = repo.find(&ProductId::from("nope")).await.unwrap_err();

        assert_eq!(err.to_string(), "Product not found");
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = SqliteProductRepository::new(pool().await);

        let b = Product::new("b", "Product B", Money::from_cents(2)).unwrap();
        let a = Product::new("a", "Product A", Money::from_cents(1)).unwrap();
        repo.create(&b).await.unwrap();
        repo.create(&a).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![b, a]);
    }
}
