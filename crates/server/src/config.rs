//! Server configuration.
//!
//! Resolution order, later wins:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`--config bridge.toml`)
//! 3. environment variables
//! 4. command-line flags (applied by the binary)
//!
//! ```toml
//! database_url = "sqlite:///bridge.db"
//! secret_key = "change-me"
//! debug = false
//! bind = "0.0.0.0:5000"
//! enable_ssl = true
//! ssl_cert_file = "./Certs/localhost.pem"
//! ssl_key_file = "./Certs/localhost-key.pem"
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use bridge_storage::DatabaseLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Secret used when none is configured.
pub const DEFAULT_SECRET_KEY: &str = "your_default_secret_key";
/// Database used when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///bridge.db";
/// Listen address used when none is configured.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Environment variable names.
pub mod env {
    /// Database URL.
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Secret key.
    pub const SECRET_KEY: &str = "SECRET_KEY";
    /// Debug flag.
    pub const DEBUG: &str = "BRIDGE_DEBUG";
    /// Listen address.
    pub const BIND: &str = "BRIDGE_BIND";
    /// Serve HTTPS.
    pub const ENABLE_SSL: &str = "ENABLE_SSL";
    /// PEM certificate path.
    pub const SSL_CERT_FILE: &str = "SSL_CERT_FILE";
    /// PEM private key path.
    pub const SSL_KEY_FILE: &str = "SSL_KEY_FILE";
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ServerConfig`].
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The database URL names a backend this build cannot open.
    #[error("unsupported database url '{url}': only sqlite is supported")]
    UnsupportedDatabase {
        /// Offending URL.
        url: String,
    },

    /// The database URL is empty.
    #[error("database url is empty")]
    EmptyDatabaseUrl,

    /// The listen address does not parse.
    #[error("invalid bind address '{value}'")]
    InvalidBind {
        /// Offending value.
        value: String,
    },

    /// HTTPS is enabled but a certificate or key file is missing.
    #[error("ssl is enabled but {what} file {path} does not exist")]
    MissingTlsFile {
        /// "certificate" or "key".
        what: &'static str,
        /// Expected path.
        path: PathBuf,
    },
}

/// Everything the server needs to start.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// SQLite database URL or path.
    pub database_url: String,
    /// Application secret. Never logged.
    pub secret_key: String,
    /// Verbose logging.
    pub debug: bool,
    /// Listen address.
    pub bind: String,
    /// Terminate TLS and send HTTPS-enforcement headers.
    pub enable_ssl: bool,
    /// PEM certificate chain.
    pub ssl_cert_file: PathBuf,
    /// PEM private key.
    pub ssl_key_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            debug: false,
            bind: DEFAULT_BIND.to_string(),
            enable_ssl: false,
            ssl_cert_file: PathBuf::from("./Certs/default-cert.pem"),
            ssl_key_file: PathBuf::from("./Certs/default-key.pem"),
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("secret_key", &"<redacted>")
            .field("debug", &self.debug)
            .field("bind", &self.bind)
            .field("enable_ssl", &self.enable_ssl)
            .field("ssl_cert_file", &self.ssl_cert_file)
            .field("ssl_key_file", &self.ssl_key_file)
            .finish()
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay values from `lookup`, which maps a variable name to its value.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup(env::DATABASE_URL) {
            self.database_url = v;
        }
        if let Some(v) = lookup(env::SECRET_KEY) {
            self.secret_key = v;
        }
        if let Some(v) = lookup(env::DEBUG) {
            self.debug = parse_bool(&v);
        }
        if let Some(v) = lookup(env::BIND) {
            self.bind = v;
        }
        if let Some(v) = lookup(env::ENABLE_SSL) {
            self.enable_ssl = parse_bool(&v);
        }
        if let Some(v) = lookup(env::SSL_CERT_FILE) {
            self.ssl_cert_file = PathBuf::from(v);
        }
        if let Some(v) = lookup(env::SSL_KEY_FILE) {
            self.ssl_key_file = PathBuf::from(v);
        }
    }

    /// Resolve `database_url` to a location.
    pub fn database_location(&self) -> Result<DatabaseLocation, ConfigError> {
        parse_database_url(&self.database_url)
    }

    /// Parse `bind`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|_| ConfigError::InvalidBind {
            value: self.bind.clone(),
        })
    }

    /// True when the secret was never changed from the default.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    /// Check everything that can be checked before binding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database_location()?;
        self.bind_addr()?;
        if self.enable_ssl {
            if !self.ssl_cert_file.exists() {
                return Err(ConfigError::MissingTlsFile {
                    what: "certificate",
                    path: self.ssl_cert_file.clone(),
                });
            }
            if !self.ssl_key_file.exists() {
                return Err(ConfigError::MissingTlsFile {
                    what: "key",
                    path: self.ssl_key_file.clone(),
                });
            }
        }
        Ok(())
    }
}

/// `true`, `1` and `t` (any case) are true; everything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "t")
}

/// Map a database URL to a location.
///
/// | URL | Location |
/// |---|---|
/// | `sqlite:///bridge.db` | relative file `bridge.db` |
/// | `sqlite:////var/lib/bridge.db` | absolute file |
/// | `sqlite://`, `sqlite::memory:`, `:memory:` | in-memory |
/// | `/path/to/file.db` | file |
pub fn parse_database_url(url: &str) -> Result<DatabaseLocation, ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::EmptyDatabaseUrl);
    }
    let rest = if let Some(rest) = url.strip_prefix("sqlite://") {
        match rest {
            "" => return Ok(DatabaseLocation::Memory),
            // sqlite:///path keeps everything after the third slash
            _ => rest.strip_prefix('/').unwrap_or(rest),
        }
    } else if let Some(rest) = url.strip_prefix("sqlite:") {
        rest
    } else if url.contains("://") {
        return Err(ConfigError::UnsupportedDatabase {
            url: url.to_string(),
        });
    } else {
        url
    };

    match rest {
        "" | ":memory:" => Ok(DatabaseLocation::Memory),
        path => Ok(DatabaseLocation::File(PathBuf::from(path))),
    }
}
