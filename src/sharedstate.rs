use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tracing::info;

use crate::config::{AdminCredentials, AppConfig};
use crate::familywish_errors::FWErr;
use crate::orm::{add_default_settings, check_settings_table_exists, create_tables};

#[derive(Debug, Clone)]
pub struct SharedState {
    pub database: Arc<DatabaseConnection>,
    pub admin: Arc<AdminCredentials>,
    pub server_secret: String,
    pub token_ttl_hours: i64,
}

impl SharedState {
    pub async fn new(config: &AppConfig) -> Result<Self, FWErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(false);
        let db = Database::connect(options).await?;

        // Init DB
        if config.init_schemas {
            create_tables(&db).await?;
        }

        // Wait till the Setting table is created...
        while !check_settings_table_exists(&db).await? {
            info!(target: "db", "Waiting for Setting table to be created...");
            tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
        }

        add_default_settings(&db).await?;

        Ok(Self::from_connection(db, config))
    }

    pub fn from_connection(db: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            database: Arc::new(db),
            admin: Arc::new(config.admin.clone()),
            server_secret: config.server_secret.clone(),
            token_ttl_hours: config.token_ttl_hours,
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::config::HttpListenerConfig;
    use crate::utils::auth::hashing::plain_string_to_hash;

    pub const TEST_ADMIN_PASSWORD: &str = "reindeer";

    pub async fn memory_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        // every pooled connection would open its own empty database
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        Database::connect(options).await.unwrap()
    }

    pub fn test_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            init_schemas: true,
            server_secret: "test-secret".to_string(),
            token_ttl_hours: 1,
            admin: AdminCredentials {
                username: "admin".to_string(),
                password_hash: plain_string_to_hash(TEST_ADMIN_PASSWORD).unwrap(),
            },
            http: HttpListenerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
        }
    }

    pub async fn test_state() -> Arc<SharedState> {
        let db = memory_db().await;
        create_tables(&db).await.unwrap();
        add_default_settings(&db).await.unwrap();
        Arc::new(SharedState::from_connection(db, &test_config()))
    }
}
