use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_FAVORITES_FILE: &str = "data/favorites.json";

/// Where the favorites are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Postgres,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => anyhow::bail!(
                "Unknown STORAGE_BACKEND '{}', expected one of: file, postgres, memory",
                other
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub favorites_file: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_BACKEND: file | postgres | memory (default: file)
    /// - FAVORITES_FILE: JSON file used by the file backend (default: data/favorites.json)
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StorageBackend::File,
        };
        let favorites_file = env::var("FAVORITES_FILE")
            .unwrap_or_else(|_| DEFAULT_FAVORITES_FILE.to_string())
            .into();

        Ok(Self {
            backend,
            favorites_file,
        })
    }
}
