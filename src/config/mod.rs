//! Configuration module for the MongoDB operator.
//!
//! Loads connection info from JSON or environment variables and normalizes it
//! before an operator is built.

use std::env;
use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{OperatorError, Result};

/// Lower bound for the per-call timeout, in milliseconds.
pub const MIN_TIMEOUT_MS: i64 = 10_000;

/// Upper bound for the per-call timeout, in milliseconds.
pub const MAX_TIMEOUT_MS: i64 = 60_000;

/// Connection info required to interface with MongoDB.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database to operate on; required.
    pub database: String,

    /// Connection string used to reach the deployment; required.
    pub uri: String,

    pub username: String,

    pub password: String,

    /// Collection used when a call passes an empty collection name.
    pub default_collection: String,

    /// Per-call timeout in milliseconds.
    /// Clamped to `[MIN_TIMEOUT_MS, MAX_TIMEOUT_MS]`.
    #[serde(alias = "timeoutMS")]
    pub timeout_ms: i64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };

        f.debug_struct("Config")
            .field("database", &self.database)
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &password)
            .field("default_collection", &self.default_collection)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Config {
    /// Parse configuration from a JSON document.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Load configuration from environment variables.
    ///
    /// Missing variables are left empty; `sanitize_and_validate` rejects them.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let timeout_ms = match env::var("MONGODB_TIMEOUT_MS") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unparseable MONGODB_TIMEOUT_MS value {:?}", raw);
                0
            }),
            Err(_) => 0,
        };

        Self {
            database: env::var("MONGODB_DATABASE").unwrap_or_default(),
            uri: env::var("MONGODB_URI").unwrap_or_default(),
            username: env::var("MONGODB_USERNAME").unwrap_or_default(),
            password: env::var("MONGODB_PASSWORD").unwrap_or_default(),
            default_collection: env::var("MONGODB_DEFAULT_COLLECTION").unwrap_or_default(),
            timeout_ms,
        }
    }

    /// Trim all string fields, reject an empty database or uri and clamp the
    /// timeout into bounds. Performs no I/O.
    pub fn sanitize_and_validate(&mut self) -> Result<()> {
        self.database = self.database.trim().to_string();
        if self.database.is_empty() {
            return Err(OperatorError::EmptyDatabase);
        }

        self.uri = self.uri.trim().to_string();
        if self.uri.is_empty() {
            return Err(OperatorError::EmptyUri);
        }

        self.username = self.username.trim().to_string();
        self.password = self.password.trim().to_string();
        self.default_collection = self.default_collection.trim().to_string();

        let clamped = self.timeout_ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS);
        if clamped != self.timeout_ms {
            warn!(
                "Timeout of {}ms is out of bounds, using {}ms",
                self.timeout_ms, clamped
            );
            self.timeout_ms = clamped;
        }

        Ok(())
    }

    /// Per-call timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(0) as u64)
    }

    /// Whether a credential should be attached to the client.
    pub fn has_credential(&self) -> bool {
        !self.username.is_empty()
    }
}
