//! # Discount Ledger Module
//!
//! The ledger maps each user to the single discount code issued to them. It is
//! loaded wholesale from its backing store before first use and rewritten
//! wholesale after each issuance.
//!
//! Storage backends implement [`LedgerStore`]:
//! - [`JsonFileStore`]: a single pretty-printed JSON file (default)
//! - [`crate::db::PgLedgerStore`]: a PostgreSQL table

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::discount::DiscountRecord;
use crate::errors::LedgerError;
use crate::event::UserId;

/// Full content of the ledger, keyed by user
pub type LedgerMap = BTreeMap<UserId, DiscountRecord>;

/// Durable storage for the whole ledger mapping
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Load the persisted mapping, or an empty one if nothing was stored yet
    async fn load(&self) -> Result<LedgerMap, LedgerError>;

    /// Replace the persisted mapping with `ledger`
    async fn save(&self, ledger: &LedgerMap) -> Result<(), LedgerError>;
}

/// Ledger stored as one JSON object in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "ledger".into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn load(&self) -> Result<LedgerMap, LedgerError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No ledger file yet, starting empty");
                return Ok(LedgerMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            warn!(path = %self.path.display(), "Ledger file is empty, starting empty");
            return Ok(LedgerMap::new());
        }

        let ledger: LedgerMap = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), records = ledger.len(), "Ledger file loaded");
        Ok(ledger)
    }

    async fn save(&self, ledger: &LedgerMap) -> Result<(), LedgerError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        serde::Serialize::serialize(ledger, &mut serializer)?;

        // Write to a sibling temp file, then rename over the ledger
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &buffer).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(path = %self.path.display(), records = ledger.len(), "Ledger file written");
        Ok(())
    }
}

/// Process-wide discount ledger
///
/// All reads and mutations go through one async mutex so that concurrent
/// requests for the same user can never issue two different codes. The
/// mapping is loaded lazily on first access and cached afterwards.
pub struct DiscountLedger {
    store: Arc<dyn LedgerStore>,
    cache: Mutex<Option<LedgerMap>>,
}

impl DiscountLedger {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            store,
            cache: Mutex::new(None),
        }
    }

    /// Return the record already issued to `user_id`, if any
    pub async fn lookup(&self, user_id: &UserId) -> Result<Option<DiscountRecord>, LedgerError> {
        let mut cache = self.cache.lock().await;
        let ledger = Self::loaded(&mut cache, self.store.as_ref()).await?;
        Ok(ledger.get(user_id).cloned())
    }

    /// Return the record issued to `user_id`, issuing one with `issuer` if needed
    ///
    /// A fresh record is persisted before it is returned. If persisting fails
    /// the cached ledger is left untouched and the error is returned.
    pub async fn get_or_issue<F>(
        &self,
        user_id: &UserId,
        issuer: F,
    ) -> Result<DiscountRecord, LedgerError>
    where
        F: FnOnce() -> DiscountRecord + Send,
    {
        let mut cache = self.cache.lock().await;
        let ledger = Self::loaded(&mut cache, self.store.as_ref()).await?;

        if let Some(existing) = ledger.get(user_id) {
            debug!(user_id = %user_id, code = %existing.code, "Returning existing discount code");
            return Ok(existing.clone());
        }

        let record = issuer();
        let mut updated = ledger.clone();
        updated.insert(user_id.clone(), record.clone());
        self.store.save(&updated).await?;
        *ledger = updated;

        info!(user_id = %user_id, code = %record.code, "Issued discount code");
        Ok(record)
    }

    /// Copy of the whole ledger
    pub async fn snapshot(&self) -> Result<LedgerMap, LedgerError> {
        let mut cache = self.cache.lock().await;
        Ok(Self::loaded(&mut cache, self.store.as_ref()).await?.clone())
    }

    async fn loaded<'a>(
        cache: &'a mut Option<LedgerMap>,
        store: &dyn LedgerStore,
    ) -> Result<&'a mut LedgerMap, LedgerError> {
        if cache.is_none() {
            let ledger = store.load().await?;
            info!(records = ledger.len(), "Discount ledger loaded");
            *cache = Some(ledger);
        }
        Ok(cache.get_or_insert_with(LedgerMap::new))
    }
}
