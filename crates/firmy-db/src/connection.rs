//! SurrealDB bootstrap for the Firmy store.
//!
//! [`DbManager::connect`] opens the WebSocket connection, signs in, selects
//! the configured namespace and database, and applies the hierarchy schema.
//! A manager that exists is ready to serve repositories.

use std::fmt;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

use crate::error::DbError;
use crate::schema::init_schema;

/// Where the Firmy hierarchy lives.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// WebSocket address (e.g., `127.0.0.1:8000`).
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "firmy".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// `namespace/database`, as shown in logs.
    pub fn target(&self) -> String {
        format!("{}/{}", self.namespace, self.database)
    }
}

// The config ends up in startup logs; keep the password out of them.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url)
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Connected, schema-initialized handle to the Firmy store.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        info!(url = %config.url, store = %config.target(), "Connecting to Firmy store");

        let db = Surreal::new::<Ws>(&config.url).await?;
        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        init_schema(&db).await?;

        info!(store = %config.target(), "Firmy store ready");
        Ok(Self { db })
    }

    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_firmy_namespace() {
        let config = DbConfig::default();
        assert_eq!(config.target(), "firmy/main");
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig {
            password: "hunter2".into(),
            ..DbConfig::default()
        };
        let shown = format!("{config:?}");
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("firmy"));
    }
}
