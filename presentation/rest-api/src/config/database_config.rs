use mongodb::Database;
use persistence::db::{DatabaseConfig, connect};
use std::env;
use std::time::Duration;

/// Read the document store settings from environment variables
///
/// Environment variables:
/// - MONGODB_URI: connection string (default: "mongodb://localhost:27017")
/// - MONGODB_DATABASE: database name (default: "product_db")
/// - MONGODB_MAX_POOL_SIZE: connection pool ceiling (default: 10)
/// - MONGODB_TIMEOUT_SECS: connect and per-operation timeout (default: 10)
pub fn database_config_from_env() -> DatabaseConfig {
    database_config_from_lookup(|key| env::var(key).ok())
}

pub fn database_config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DatabaseConfig {
    let uri = lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string());
    let name = lookup("MONGODB_DATABASE").unwrap_or_else(|| "product_db".to_string());
    let mut config = DatabaseConfig::new(uri, name);

    if let Some(pool) = lookup("MONGODB_MAX_POOL_SIZE").and_then(|value| value.parse().ok()) {
        config.max_pool_size = pool;
    }
    if let Some(secs) = lookup("MONGODB_TIMEOUT_SECS").and_then(|value| value.parse().ok()) {
        config.connect_timeout = Duration::from_secs(secs);
        config.operation_timeout = Duration::from_secs(secs);
    }

    config
}

/// Connect to the document store
///
/// # Errors
/// Returns error if the connection string is malformed or the server does not answer a ping
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<Database> {
    let database = connect(config).await?;
    Ok(database)
}
