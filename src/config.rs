use std::{env, time::Duration};

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub host: String,
    pub port: u16,
}

/// Static connection settings for the backing store.
///
/// `url` wins when present; otherwise the discrete fields are used.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            name: "lightbnb".to_string(),
            user: "lighthouse".to_string(),
            password: None,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return Ok(url.parse::<PgConnectOptions>()?);
        }
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseSettings::default();
        let database = DatabaseSettings {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: parse_or("DB_PORT", &lookup, defaults.port)?,
            name: lookup("DB_NAME").unwrap_or(defaults.name),
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD"),
            max_connections: parse_or("DB_MAX_CONNECTIONS", &lookup, defaults.max_connections)?,
            acquire_timeout: defaults.acquire_timeout,
        };

        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            database,
            host,
            port,
        })
    }
}

fn parse_or<F, T>(key: &str, lookup: &F, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw:?}: {e}")),
        None => Ok(default),
    }
}
