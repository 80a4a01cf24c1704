use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while locating, reading and decoding the CLI configuration
#[derive(Debug)]
pub enum ConfigError {
    /// `~` in the config path could not be expanded
    PathResolution { path: String, reason: String },
    /// I/O failure other than a missing file
    Read { path: PathBuf, source: io::Error },
    /// Structural parser rejected the text
    Syntax(String),
    /// Parsed root is not an object list
    Malformed,
    /// Top-level key outside the allow-list
    UnknownKey { key: String },
    /// Known key with a value of the wrong shape
    Decode { key: String, message: String },
    /// Parse failure of a file loaded from disk
    Parse {
        path: PathBuf,
        source: Box<ConfigError>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PathResolution { path, reason } => {
                write!(f, "error expanding config path {:?}: {}", path, reason)
            }
            ConfigError::Read { path, source } => {
                write!(f, "error reading config file {}: {}", path.display(), source)
            }
            ConfigError::Syntax(msg) => write!(f, "{}", msg),
            ConfigError::Malformed => {
                write!(f, "failed to parse config; does not contain a root object")
            }
            ConfigError::UnknownKey { key } => write!(f, "invalid key {:?}", key),
            ConfigError::Decode { key, message } => {
                write!(f, "error decoding {:?}: {}", key, message)
            }
            ConfigError::Parse { path, source } => write!(
                f,
                "error parsing config file at {:?}: {}; ensure that the file is valid; \
                 Ansible Vault is known to conflict with it",
                path.display().to_string(),
                source
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<hcl::Error> for ConfigError {
    fn from(err: hcl::Error) -> Self {
        ConfigError::Syntax(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Syntax(err.to_string())
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
