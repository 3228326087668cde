use std::env;
use tracing::{debug, warn};

use crate::familywish_errors::FWErr;
use crate::orm::build_database_conn_string;
use crate::utils::auth::hashing::plain_string_to_hash;

pub const UNSAFE_SERVER_SECRET: &str = "UNSAFE_SERVER_SECRET_123456789";
pub const UNSAFE_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    // argon2 PHC string
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct HttpListenerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub init_schemas: bool,
    pub server_secret: String,
    pub token_ttl_hours: i64,
    pub admin: AdminCredentials,
    pub http: HttpListenerConfig,
}

fn value_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, FWErr>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| FWErr::ConfigError(format!("{} has an invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, FWErr> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FWErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Load DB configuration infos
        let db_proto = value_or(&lookup, "DB_PROTO", "sqlite");
        // Only the SQLite driver is built in
        if db_proto != "sqlite" {
            return Err(FWErr::ConfigError(format!(
                "DB_PROTO '{}' is not supported, use sqlite",
                db_proto
            )));
        }
        let db_name = value_or(&lookup, "DB_NAME", "wishlist.sqlite");
        let db_user = value_or(&lookup, "DB_USER", "");
        let db_password = value_or(&lookup, "DB_PASSWORD", "");
        let db_host = value_or(&lookup, "DB_HOST", "");
        let db_port = value_or(&lookup, "DB_PORT", "");
        let db_params = value_or(&lookup, "DB_PARAMS", "mode=rwc");

        let database_url = build_database_conn_string(
            &db_proto,
            &db_name,
            &db_user,
            &db_password,
            &db_host,
            &db_port,
            &db_params,
        );
        debug!(target: "args", "Database connection string: {}", database_url);

        let init_schemas = value_or(&lookup, "INIT_SCHEMAS", "1") == "1";

        let server_secret = value_or(&lookup, "SECRET_KEY", UNSAFE_SERVER_SECRET);
        if server_secret == UNSAFE_SERVER_SECRET {
            warn!(target: "args", "SECRET_KEY is not set, tokens are signed with the built-in secret");
        }
        let token_ttl_hours = parse_or(&lookup, "TOKEN_TTL_HOURS", 720i64)?;
        if token_ttl_hours <= 0 {
            return Err(FWErr::ConfigError(
                "TOKEN_TTL_HOURS must be positive".to_string(),
            ));
        }

        // Admin credentials, a stored hash wins over a plain password
        let admin_username = value_or(&lookup, "ADMIN_USERNAME", "admin");
        let password_hash = match lookup("ADMIN_PASSWORD_HASH") {
            Some(hash) if !hash.trim().is_empty() => hash.trim().to_string(),
            _ => {
                let plain = value_or(&lookup, "ADMIN_PASSWORD", UNSAFE_ADMIN_PASSWORD);
                if plain == UNSAFE_ADMIN_PASSWORD {
                    warn!(target: "args", "ADMIN_PASSWORD is not set, using the built-in admin password");
                }
                plain_string_to_hash(&plain)?
            }
        };

        let http = HttpListenerConfig {
            host: value_or(&lookup, "HTTP_HOST", "0.0.0.0"),
            port: parse_or(&lookup, "HTTP_PORT", 5000u16)?,
        };

        Ok(Self {
            database_url,
            init_schemas,
            server_secret,
            token_ttl_hours,
            admin: AdminCredentials {
                username: admin_username,
                password_hash,
            },
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::auth::hashing::verify_plain_string_for_hash;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_sqlite() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, "sqlite://wishlist.sqlite?mode=rwc");
        assert!(config.init_schemas);
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.admin.username, "admin");
        assert!(verify_plain_string_for_hash(
            UNSAFE_ADMIN_PASSWORD,
            &config.admin.password_hash
        ));
    }

    #[test]
    fn plain_admin_password_is_hashed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ADMIN_USERNAME", "mum"),
            ("ADMIN_PASSWORD", "mistletoe"),
            ("HTTP_PORT", "8080"),
            ("INIT_SCHEMAS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.admin.username, "mum");
        assert_ne!(config.admin.password_hash, "mistletoe");
        assert!(verify_plain_string_for_hash("mistletoe", &config.admin.password_hash));
        assert_eq!(config.http.port, 8080);
        assert!(!config.init_schemas);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("HTTP_PORT", "north-pole")]));
        assert!(matches!(result, Err(FWErr::ConfigError(_))));
    }

    #[test]
    fn only_sqlite_databases_are_accepted() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DB_PROTO", "postgres"),
            ("DB_HOST", "db"),
        ]));
        assert!(matches!(result, Err(FWErr::ConfigError(_))));
    }

    #[test]
    fn non_positive_ttl_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("TOKEN_TTL_HOURS", "0")]));
        assert!(matches!(result, Err(FWErr::ConfigError(_))));
    }
}
