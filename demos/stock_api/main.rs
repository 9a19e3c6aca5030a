//! Stock API demo server
//!
//! Runs the full stock API against the in-memory store with a couple of
//! seeded records and one demo token.
//!
//! ```text
//! cargo run --example stock_api
//! curl -H 'Authorization: Bearer demo-token' http://127.0.0.1:3000/stock
//! ```

use restock::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_yaml_str(
        r#"
server:
  bind_addr: "127.0.0.1:3000"
auth:
  tokens: ["demo-token"]
  policies:
    list: authenticated
    get: authenticated
    create: authenticated
    update: authenticated
    delete: authenticated
"#,
    )?;

    let store = InMemoryStockStore::new();
    seed_demo_records(&store).await?;

    println!("🌐 Stock API on http://{}", config.server.bind_addr);
    println!("\n  Routes:");
    println!("    GET    /stock                - List stock records (paginated)");
    println!("    POST   /stock                - Create a stock record");
    println!("    GET    /stock/{{productId}}    - Get a stock record");
    println!("    PUT    /stock/{{productId}}    - Replace a record's quantity");
    println!("    DELETE /stock/{{productId}}    - Delete a stock record");
    println!("    GET    /health               - Health check");
    println!("\n  All stock routes expect: Authorization: Bearer demo-token\n");

    ServerBuilder::new()
        .with_store(store)
        .with_config(config)
        .serve()
        .await
}

/// Populate the store with a few records
async fn seed_demo_records(store: &InMemoryStockStore) -> Result<()> {
    let service = StockService::new(Arc::new(store.clone()));

    for (name, quantity, relation_id) in [
        ("Cedar Desk", 12, "prod-desk-01"),
        ("Walnut Chair", 48, "prod-chair-07"),
        ("Brass Lamp", 5, "prod-lamp-03"),
    ] {
        let record = service
            .create(CreateStock {
                name: name.to_string(),
                quantity,
                relation_id: relation_id.to_string(),
            })
            .await?;
        println!("✅ Seeded: {} ({} units, id {})", name, quantity, record.id);
    }

    Ok(())
}
