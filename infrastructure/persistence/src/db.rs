use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("invalid MongoDB connection string: {0}")]
    InvalidConnectionString(String),
    #[error("could not reach MongoDB: {0}")]
    ConnectionError(String),
}

/// Configuration for the document store connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub database_name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    /// Upper bound for every single store call made by the repositories.
    pub operation_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String, database_name: String) -> Self {
        Self {
            connection_string,
            database_name,
            max_pool_size: 10,
            connect_timeout: Duration::from_secs(10),
            operation_timeout: Duration::from_secs(10),
        }
    }
}

/// Builds a pooled MongoDB client and verifies the server answers a `ping`.
///
/// The returned handle is cheap to clone and shares one connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(&config.connection_string)
        .await
        .map_err(|e| DatabaseError::InvalidConnectionString(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.connect_timeout);
    options.app_name = Some("product-api".to_string());

    let client =
        Client::with_options(options).map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;
    let database = client.database(&config.database_name);

    ping(&database).await?;

    info!(database = %config.database_name, "Connected to MongoDB");
    Ok(database)
}

/// Round-trips a `ping` command to the server.
pub async fn ping(database: &Database) -> Result<(), DatabaseError> {
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_pool_and_timeouts() {
        let config = DatabaseConfig::new(
            "mongodb://localhost:27017".to_string(),
            "product_db".to_string(),
        );

        assert_eq!(config.max_pool_size, 10);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.operation_timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn should_reject_malformed_connection_string() {
        let config = DatabaseConfig::new("not-a-uri".to_string(), "product_db".to_string());

        let result = connect(&config).await;

        assert!(matches!(
            result,
            Err(DatabaseError::InvalidConnectionString(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn should_connect_to_local_server() {
        let url = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = DatabaseConfig::new(url, "product_db_test".to_string());

        assert!(connect(&config).await.is_ok());
    }
}
