mod edits;

use anyhow::{bail, Context};
use backoffice_catalog::{search_products, Product, ProductDraft, ProductQuery, ProductStatus};
use backoffice_order::{CustomerInfo, LineItem, Order, OrderManager, OrderUpdateRequest, PricingEngine, PricingParameters};
use backoffice_store::{Config, MemoryStore, OrderRepository, ProductRepository};
use edits::Command;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backoffice_cli=debug,backoffice_order=debug,backoffice_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("failed to load config")?;
    if let Some(base_url) = &config.api.base_url {
        tracing::debug!(%base_url, "remote API configured; using in-memory store");
    }

    let store = match &config.seed.orders_path {
        Some(path) => MemoryStore::from_orders_file(path).await?,
        None => MemoryStore::with_orders(sample_orders()),
    };

    for product in sample_products()? {
        store.create_product(product).await?;
    }

    let mut args = std::env::args().skip(1).peekable();
    if args.peek().map(String::as_str) == Some("products") {
        args.next();
        let search = args.next().unwrap_or_default();
        let page = args
            .next()
            .map(|p| p.parse())
            .transpose()
            .context("page must be a number")?
            .unwrap_or(1);
        let query = ProductQuery::search(search).page(page, config.catalog.default_per_page);

        let products = store.list_products().await?;
        let page = search_products(&products, &query);
        for product in &page.items {
            println!(
                "{:<6} {:<20} {:>8} {:>4}% {:>8} {:>5}",
                product.id,
                product.name,
                product.price.to_string(),
                product.discount.to_string(),
                product.final_price().to_string(),
                product.stock
            );
        }
        println!("page {}/{} ({} products)", page.page, page.total_pages, page.total_items);
        return Ok(());
    }

    let mut manager = OrderManager::new(PricingEngine::new(config.pricing.clone()));
    for order in store.list_orders().await? {
        manager.insert(order);
    }

    let Some(order_id) = args.next() else {
        println!("{}", serde_json::to_string_pretty(&manager.list())?);
        return Ok(());
    };

    let commands = args
        .map(|arg| arg.parse::<Command>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = manager.open_edit(&order_id)?;
    let mut confirm = false;
    for command in commands {
        match command {
            Command::Edit(edit) => session.apply(edit),
            Command::Confirm => confirm = true,
        }
    }
    manager.commit_edit(session)?;

    let invoice = if confirm { Some(manager.confirm(&order_id)?) } else { None };

    let order = manager
        .get_order(&order_id)
        .cloned()
        .with_context(|| format!("order {order_id} disappeared"))?;
    let body = OrderUpdateRequest::from(order);
    println!("PUT /orders/{order_id}");
    println!("{}", serde_json::to_string_pretty(&body)?);

    let ack = store.update_order(&order_id, body).await?;
    if !ack.success {
        bail!("remote store rejected the update for order {order_id}");
    }

    if let Some(invoice) = invoice {
        println!();
        println!("{invoice}");
    }

    Ok(())
}

fn sample_orders() -> Vec<Order> {
    let mut john = Order::new(
        "1",
        CustomerInfo {
            name: "John Doe".to_string(),
            email: "john@example.com".into(),
            phone: "0123456789".into(),
            address: "123 Coconut Street".to_string(),
            invoice: "INV-1001".to_string(),
        },
    );
    john.cart_items = vec![
        LineItem::new("coconut-water", "Coconut Water", Decimal::from(5), 2),
        LineItem::new("coconut-oil", "Coconut Oil", Decimal::from(10), 1),
    ];
    john.pricing.parameters = PricingParameters {
        discount_percentage: Decimal::ZERO,
        delivery_charge: Decimal::from(3),
    };

    let mut jane = Order::new(
        "2",
        CustomerInfo {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".into(),
            phone: "0987654321".into(),
            address: "456 Palm Avenue".to_string(),
            invoice: "INV-1002".to_string(),
        },
    );
    jane.cart_items = vec![LineItem::new("coconut-milk", "Coconut Milk", Decimal::from(7), 3)];
    jane.pricing.parameters = PricingParameters {
        discount_percentage: Decimal::ZERO,
        delivery_charge: Decimal::from(2),
    };

    vec![john, jane]
}

fn sample_products() -> anyhow::Result<Vec<Product>> {
    let oil = ProductDraft {
        img: "https://via.placeholder.com/80".to_string(),
        name: "Coconut Oil".to_string(),
        short_desc: "Organic coconut oil".to_string(),
        country: "Bangladesh".to_string(),
        category: "Oil".to_string(),
        stock: "50".to_string(),
        price: "15".to_string(),
        discount: "5".to_string(),
        status: ProductStatus::InStock,
        ..Default::default()
    };
    let milk = ProductDraft {
        img: "https://via.placeholder.com/80".to_string(),
        name: "Coconut Milk".to_string(),
        short_desc: "Fresh coconut milk".to_string(),
        country: "India".to_string(),
        category: "Food".to_string(),
        stock: "30".to_string(),
        price: "10".to_string(),
        discount: "0".to_string(),
        status: ProductStatus::InStock,
        ..Default::default()
    };

    Ok(vec![oil.validate("1")?, milk.validate("2")?])
}
