//! Server configuration loaded from the environment.

use std::net::SocketAddr;

use anyhow::Context;
use firmy_db::DbConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Reads `FIRMY_*` variables. Unset variables fall back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = lookup("FIRMY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("FIRMY_BIND_ADDR is not a socket address: {bind}"))?;

        let defaults = DbConfig::default();
        let db = DbConfig {
            url: lookup("FIRMY_DB_URL").unwrap_or(defaults.url),
            namespace: lookup("FIRMY_DB_NAMESPACE").unwrap_or(defaults.namespace),
            database: lookup("FIRMY_DB_DATABASE").unwrap_or(defaults.database),
            username: lookup("FIRMY_DB_USER").unwrap_or(defaults.username),
            password: lookup("FIRMY_DB_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(Self { bind_addr, db })
    }
}
