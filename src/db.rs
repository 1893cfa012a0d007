use async_trait::async_trait;
use mongodb::{Client, Database, bson::doc};
use thiserror::Error;

/// Failure reported by a [`ConnectionProvider`].
///
/// There is exactly one failure mode: the provider could not produce a
/// usable handle. It carries only a human-readable description, which the
/// status endpoint surfaces verbatim in the error response body.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConnectionError {
    message: String,
}

impl ConnectionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<mongodb::error::Error> for ConnectionError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// A connected database handle.
///
/// The status endpoint only checks whether a handle exists; it never manages
/// the connection's lifetime, which stays with the provider and the driver.
#[derive(Debug)]
pub struct DbHandle {
    database: Database,
}

impl DbHandle {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn name(&self) -> &str {
        self.database.name()
    }
}

/// # Connection Provider
///
/// External collaborator responsible for establishing a database connection.
/// Exposes a single capability, mirroring the shape consumed by the status
/// endpoint:
///
/// - `Ok(Some(handle))`: connected
/// - `Ok(None)`: the provider is reachable but holds no live connection
/// - `Err(e)`: acquisition failed; `e` carries the description text
///
/// Handlers take this as a trait object injected via `web::Data`, so tests
/// can substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn get_connection(&self) -> Result<Option<DbHandle>, ConnectionError>;
}

/// MongoDB-backed [`ConnectionProvider`].
///
/// Client construction in the driver is lazy, so acquisition is proven with
/// a `ping` command against the configured database before the handle is
/// handed out.
pub struct MongoConnectionProvider {
    uri: String,
    database: String,
}

impl MongoConnectionProvider {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }
}

#[async_trait]
impl ConnectionProvider for MongoConnectionProvider {
    async fn get_connection(&self) -> Result<Option<DbHandle>, ConnectionError> {
        let client = Client::with_uri_str(&self.uri).await?;
        let database = client.database(&self.database);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::debug!(database = %self.database, "database ping succeeded");
        Ok(Some(DbHandle::new(database)))
    }
}
