use persistence::db::DatabaseConfig;

use super::{database_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: database_config::database_config_from_env(),
        }
    }
}
