use std::env;

/// Process configuration loaded from environment variables.
///
/// All values fall back to local-development defaults:
/// - `HOST` (default `127.0.0.1`)
/// - `PORT` (default `8080`)
/// - `MONGODB_URI` (default `mongodb://localhost:27017`)
/// - `MONGODB_DB` (default `forest_trekking`)
///
/// A `.env` file is honoured when present (loaded in `main` via `dotenv`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub mongodb_db: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongodb_db: env::var("MONGODB_DB").unwrap_or_else(|_| "forest_trekking".to_string()),
        }
    }

    /// Returns the `host:port` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_db: "forest_trekking".to_string(),
        }
    }
}
