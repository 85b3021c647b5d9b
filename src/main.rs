//! mongo-operator - connectivity check for a configured MongoDB deployment.
//!
//! Reads `MONGODB_*` variables (or a `.env` file), connects, pings and reports
//! the size of the default collection.

use mongodb::bson::doc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mongo_operator::{Config, Operator};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mongo_operator=info,mongodb=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let config = Config::from_env();
    info!("Connecting to MongoDB...");
    let op = Operator::connect(config).await?;
    info!("Operator ready (timeout {:?})", op.timeout());

    op.ping().await?;
    info!("Ping to {} succeeded", op.database());

    if op.default_collection().is_empty() {
        info!("No default collection configured (MONGODB_DEFAULT_COLLECTION is empty)");
    } else {
        let count = op.count("", &doc! {}, None).await?;
        info!("Collection {} holds {} documents", op.default_collection(), count);
    }

    Ok(())
}
