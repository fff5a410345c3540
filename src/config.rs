use std::path::PathBuf;

use thiserror::Error;

/// Locator prefix for objects when the connection string sets none
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080/blobs";

/// Connection string shared by every capability without its own
const SHARED_CONNECTION_VAR: &str = "STORAGE_CONNECTION_STRING";

/// Fallback connection string consulted last
const FALLBACK_CONNECTION_VAR: &str = "WEBJOBS_STORAGE";

/// Backend capability configured by its own connection string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ObjectStore,
    FileShare,
    Queue,
    RecordTable,
}

impl Capability {
    /// Capability-specific environment variable
    pub fn env_var(self) -> &'static str {
        match self {
            Capability::ObjectStore => "BLOB_CONNECTION_STRING",
            Capability::FileShare => "FILE_CONNECTION_STRING",
            Capability::Queue => "QUEUE_CONNECTION_STRING",
            Capability::RecordTable => "TABLE_CONNECTION_STRING",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::ObjectStore => write!(f, "object store"),
            Capability::FileShare => write!(f, "file share"),
            Capability::Queue => write!(f, "queue"),
            Capability::RecordTable => write!(f, "record table"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No connection string configured for the {0}")]
    MissingConnectionString(Capability),

    #[error("Connection string for the {capability} names no supported backend")]
    UnsupportedBackend { capability: Capability },

    #[error("Malformed connection string segment: {0}")]
    MalformedSegment(String),

    #[error("{0}")]
    Invalid(String),
}

/// Parsed `Key=Value;` connection string. Keys are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    pub use_in_memory: bool,
    pub local_root: Option<PathBuf>,
    pub public_base_url: Option<String>,
    pub database_url: Option<String>,
}

impl ConnectionString {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut parsed = Self::default();

        for segment in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedSegment(segment.to_string()))?;
            let value = value.trim();

            match key.trim().to_ascii_lowercase().as_str() {
                "useinmemorystorage" => {
                    parsed.use_in_memory = value.eq_ignore_ascii_case("true");
                }
                "localroot" => parsed.local_root = Some(PathBuf::from(value)),
                "publicbaseurl" => parsed.public_base_url = Some(value.to_string()),
                "databaseurl" => parsed.database_url = Some(value.to_string()),
                // Unknown keys are ignored so one string can serve every capability
                _ => {}
            }
        }

        Ok(parsed)
    }
}

/// Backend for the object store and file share
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBackend {
    InMemory { public_base_url: String },
    LocalFilesystem { root: PathBuf, public_base_url: String },
}

/// Backend for the queue and record table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseBackend {
    InMemory,
    Postgres { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// `json` switches the log output to JSON lines
    pub log_format: String,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub object_store_connection: Option<String>,
    pub file_share_connection: Option<String>,
    pub queue_connection: Option<String>,
    pub table_connection: Option<String>,
    // Database connection pool settings
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let connection = |capability: Capability| {
            non_empty(SHARED_CONNECTION_VAR)
                .or_else(|| non_empty(capability.env_var()))
                .or_else(|| non_empty(FALLBACK_CONNECTION_VAR))
        };

        Self {
            listen_addr: non_empty("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            log_format: non_empty("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            allowed_origins: non_empty("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            object_store_connection: connection(Capability::ObjectStore),
            file_share_connection: connection(Capability::FileShare),
            queue_connection: connection(Capability::Queue),
            table_connection: connection(Capability::RecordTable),
            db_max_connections: non_empty("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            db_acquire_timeout_secs: non_empty("DB_ACQUIRE_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Configuration with every backend in memory
    pub fn in_memory() -> Self {
        let in_memory = Some("UseInMemoryStorage=true".to_string());
        Self {
            listen_addr: "127.0.0.1:0".to_string(),
            log_format: "pretty".to_string(),
            allowed_origins: Vec::new(),
            object_store_connection: in_memory.clone(),
            file_share_connection: in_memory.clone(),
            queue_connection: in_memory.clone(),
            table_connection: in_memory,
            db_max_connections: 10,
            db_acquire_timeout_secs: 30,
        }
    }

    fn raw_connection(&self, capability: Capability) -> Result<&str, ConfigError> {
        let raw = match capability {
            Capability::ObjectStore => &self.object_store_connection,
            Capability::FileShare => &self.file_share_connection,
            Capability::Queue => &self.queue_connection,
            Capability::RecordTable => &self.table_connection,
        };
        raw.as_deref()
            .ok_or(ConfigError::MissingConnectionString(capability))
    }

    /// Backend for the object store or file share.
    ///
    /// A local root wins over the in-memory flag.
    pub fn file_backend(&self, capability: Capability) -> Result<FileBackend, ConfigError> {
        let parsed = ConnectionString::parse(self.raw_connection(capability)?)?;
        let public_base_url = parsed
            .public_base_url
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());

        match (parsed.local_root, parsed.use_in_memory) {
            (Some(root), _) => Ok(FileBackend::LocalFilesystem {
                root,
                public_base_url,
            }),
            (None, true) => Ok(FileBackend::InMemory { public_base_url }),
            (None, false) => Err(ConfigError::UnsupportedBackend { capability }),
        }
    }

    /// Backend for the queue or record table.
    ///
    /// A database URL wins over the in-memory flag.
    pub fn database_backend(&self, capability: Capability) -> Result<DatabaseBackend, ConfigError> {
        let parsed = ConnectionString::parse(self.raw_connection(capability)?)?;

        match (parsed.database_url, parsed.use_in_memory) {
            (Some(url), _) => Ok(DatabaseBackend::Postgres { url }),
            (None, true) => Ok(DatabaseBackend::InMemory),
            (None, false) => Err(ConfigError::UnsupportedBackend { capability }),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.is_empty() {
            return Err(ConfigError::Invalid("LISTEN_ADDR cannot be empty".to_string()));
        }

        if !matches!(self.log_format.as_str(), "pretty" | "json") {
            return Err(ConfigError::Invalid(
                "LOG_FORMAT must be either pretty or json".to_string(),
            ));
        }

        if self.db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        self.file_backend(Capability::ObjectStore)?;
        self.file_backend(Capability::FileShare)?;

        for capability in [Capability::Queue, Capability::RecordTable] {
            if let DatabaseBackend::Postgres { url } = self.database_backend(capability)? {
                if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                    return Err(ConfigError::Invalid(format!(
                        "DatabaseUrl for the {} must start with postgres:// or postgresql://",
                        capability
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_shared_connection_string_wins() {
        let config = config_from(&[
            ("STORAGE_CONNECTION_STRING", "UseInMemoryStorage=true"),
            ("BLOB_CONNECTION_STRING", "LocalRoot=/data"),
        ]);
        assert_eq!(
            config.file_backend(Capability::ObjectStore).unwrap(),
            FileBackend::InMemory {
                public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string()
            }
        );
    }

    #[test]
    fn test_per_capability_then_fallback() {
        let config = config_from(&[
            ("QUEUE_CONNECTION_STRING", "DatabaseUrl=postgres://db/queue"),
            ("WEBJOBS_STORAGE", "UseInMemoryStorage=true"),
        ]);

        assert_eq!(
            config.database_backend(Capability::Queue).unwrap(),
            DatabaseBackend::Postgres {
                url: "postgres://db/queue".to_string()
            }
        );
        assert_eq!(
            config.database_backend(Capability::RecordTable).unwrap(),
            DatabaseBackend::InMemory
        );
    }

    #[test]
    fn test_missing_connection_string_fails_validation() {
        let config = config_from(&[]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingConnectionString(Capability::ObjectStore))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_tolerant() {
        let parsed = ConnectionString::parse(
            " localroot=/srv/files ; PUBLICBASEURL=https://cdn.example.com/b; Other=1;",
        )
        .unwrap();
        assert_eq!(parsed.local_root, Some(PathBuf::from("/srv/files")));
        assert_eq!(
            parsed.public_base_url.as_deref(),
            Some("https://cdn.example.com/b")
        );
        assert!(!parsed.use_in_memory);
    }

    #[test]
    fn test_parse_rejects_segment_without_value() {
        assert!(matches!(
            ConnectionString::parse("UseInMemoryStorage"),
            Err(ConfigError::MalformedSegment(_))
        ));
    }

    #[test]
    fn test_database_string_unsupported_for_files() {
        let config = config_from(&[("STORAGE_CONNECTION_STRING", "DatabaseUrl=postgres://db/x")]);
        assert_eq!(
            config.file_backend(Capability::FileShare),
            Err(ConfigError::UnsupportedBackend {
                capability: Capability::FileShare
            })
        );
    }

    #[test]
    fn test_in_memory_config_is_valid() {
        assert!(Config::in_memory().validate().is_ok());
    }

    #[test]
    fn test_allowed_origins_list() {
        let config = config_from(&[("ALLOWED_ORIGINS", "https://a.test, https://b.test,")]);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.test".to_string(), "https://b.test".to_string()]
        );
    }
}
