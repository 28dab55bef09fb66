//! Explicit catalog cache
//!
//! Keeps one standardized catalog per source file, shared as
//! `Arc<StandardizedCatalog>`. An entry is reused while the file's length
//! and modification time are unchanged and rebuilt otherwise.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use influence_io::IoError;

use crate::config::RecommenderConfig;
use crate::error::Result;
use crate::recommend::load_and_prepare_with_config;
use crate::standardize::StandardizedCatalog;

/// Identity of a source file at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceIdentity {
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceIdentity {
    fn of(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
            _ => IoError::Io(e.to_string()),
        })?;

        Ok(Self {
            len: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}

#[derive(Debug)]
struct CacheEntry {
    identity: SourceIdentity,
    catalog: Arc<StandardizedCatalog>,
}

/// Cache of prepared catalogs keyed by canonical source path
#[derive(Debug, Default)]
pub struct CatalogCache {
    config: RecommenderConfig,
    entries: RwLock<HashMap<PathBuf, CacheEntry>>,
}

impl CatalogCache {
    /// Create a cache that prepares catalogs with `config`
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached catalog for `path`, loading it if absent or stale
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<StandardizedCatalog>> {
        let key = canonical(path.as_ref())?;
        let identity = SourceIdentity::of(&key)?;

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(&key) {
                if entry.identity == identity {
                    return Ok(Arc::clone(&entry.catalog));
                }
                tracing::info!("Source {:?} changed, reloading catalog", key);
            }
        }

        let (catalog, _) = load_and_prepare_with_config(&key, &self.config)?;
        let catalog = Arc::new(catalog);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            CacheEntry {
                identity,
                catalog: Arc::clone(&catalog),
            },
        );

        Ok(catalog)
    }

    /// Drop the entry for `path`; returns whether one existed
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let key = canonical(path.as_ref()).unwrap_or_else(|_| path.as_ref().to_path_buf());
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some()
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()).into(),
        _ => IoError::Io(e.to_string()).into(),
    })
}
