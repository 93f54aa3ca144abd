//! Store demo entry point.
//!
//! Opens the database, wires the event handlers, then walks a customer, a
//! product and an order through their lifecycle.

use std::error::Error;
use std::sync::Arc;

use domain::customer::{
    AddressChangedData, AddressChangedEvent, CustomerCreatedData, CustomerCreatedEvent,
    FirstLogWhenCustomerIsCreatedHandler, LogWhenAddressIsChangedHandler,
    SecondLogWhenCustomerIsCreatedHandler,
};
use domain::product::{
    ProductCreatedData, ProductCreatedEvent, SendEmailWhenProductIsCreatedHandler,
};
use domain::{
    Address, Customer, Event, EventDispatcher, Money, Order, OrderItem, Product, Repository,
};
use infrastructure::{
    DatabaseConfig, SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
    TelemetryConfig, db, telemetry,
};

fn build_dispatcher() -> EventDispatcher<Event> {
    let mut dispatcher = EventDispatcher::<Event>::new();
    dispatcher.register(
        CustomerCreatedEvent::NAME,
        Arc::new(FirstLogWhenCustomerIsCreatedHandler),
    );
    dispatcher.register(
        CustomerCreatedEvent::NAME,
        Arc::new(SecondLogWhenCustomerIsCreatedHandler),
    );
    dispatcher.register(
        AddressChangedEvent::NAME,
        Arc::new(LogWhenAddressIsChangedHandler),
    );
    dispatcher.register(
        ProductCreatedEvent::NAME,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );
    dispatcher
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 1. Initialize tracing
    telemetry::init_tracing(&TelemetryConfig::from_env());

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Open the database and build repositories
    let pool = db::init(&DatabaseConfig::from_env()).await?;
    let customers = SqliteCustomerRepository::new(pool.clone());
    let products = SqliteProductRepository::new(pool.clone());
    let orders = SqliteOrderRepository::new(pool);

    let dispatcher = build_dispatcher();

    // 4. Customer lifecycle
    let mut customer = Customer::new("c1", "Customer 1")?;
    customers.create(&customer).await?;
    dispatcher.notify(&Event::from(CustomerCreatedEvent::new(
        CustomerCreatedData::from(&customer),
    )))?;

    customer.change_address(Address::new("Street 1", 123, "13330-250", "São Paulo")?);
    customer.activate()?;
    customers.update(&customer).await?;
    if let Some(data) = AddressChangedData::from_customer(&customer) {
        dispatcher.notify(&Event::from(AddressChangedEvent::new(data)))?;
    }

    // 5. Product catalogue
    let product = Product::new("p1", "Product 1", Money::from_cents(1_000))?;
    products.create(&product).await?;
    dispatcher.notify(&Event::from(ProductCreatedEvent::new(
        ProductCreatedData::from_product(&product, "Product 1 description"),
    )))?;

    // 6. Order lifecycle
    let item = OrderItem::new("i1", product.name(), product.price(), product.id().clone(), 2)?;
    let mut order = Order::new("o1", customer.id().clone(), vec![item])?;
    orders.create(&order).await?;

    let extra = OrderItem::new("i2", product.name(), product.price(), product.id().clone(), 1)?;
    let mut items = order.items().to_vec();
    items.push(extra);
    order.change_items(items)?;
    orders.update(&order).await?;

    for stored in orders.find_all().await? {
        tracing::info!(
            order_id = %stored.id(),
            customer_id = %stored.customer_id(),
            items = stored.items().len(),
            total = %stored.total(),
            "order stored"
        );
    }

    tracing::info!(metrics = %metrics_handle.render(), "metrics snapshot");
    Ok(())
}
